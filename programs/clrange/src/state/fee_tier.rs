use crate::constants::{fee_tiers::*, FEE_RATE_DENOMINATOR};
use crate::errors::{RangeMathError, Result};

/// Fee tier of a pool
/// Lower fee = tighter spacing for stable pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeTier {
    /// Fee rate in hundredths of a basis point (3000 = 0.3%)
    pub fee_rate: u32,

    /// Tick spacing pools at this fee use
    pub tick_spacing: i32,
}

impl FeeTier {
    pub const ALL: [FeeTier; 4] = [
        FeeTier {
            fee_rate: FEE_TIER_100,
            tick_spacing: TICK_SPACING_100,
        },
        FeeTier {
            fee_rate: FEE_TIER_500,
            tick_spacing: TICK_SPACING_500,
        },
        FeeTier {
            fee_rate: FEE_TIER_3000,
            tick_spacing: TICK_SPACING_3000,
        },
        FeeTier {
            fee_rate: FEE_TIER_10000,
            tick_spacing: TICK_SPACING_10000,
        },
    ];

    pub fn from_fee(fee_rate: u32) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tier| tier.fee_rate == fee_rate)
            .ok_or(RangeMathError::UnknownFeeTier(fee_rate))
    }

    /// Fee as a fraction of the input (3000 -> 0.003)
    pub fn fee_fraction(&self) -> f64 {
        self.fee_rate as f64 / FEE_RATE_DENOMINATOR as f64
    }

    /// Fee taken from a raw input amount
    /// fee = amount * fee_rate / 1_000_000
    pub fn calculate_fee(&self, amount: u128) -> Result<u128> {
        let fee = amount
            .checked_mul(self.fee_rate as u128)
            .ok_or(RangeMathError::MathOverflow)?;
        Ok(fee / FEE_RATE_DENOMINATOR as u128)
    }
}
