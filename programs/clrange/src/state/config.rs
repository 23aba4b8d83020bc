use crate::constants::defaults;
use crate::errors::{RangeMathError, Result};
use crate::state::fee_tier::FeeTier;

/// Defaults the position-creation flow applies when the user leaves a field empty
///
/// Passed explicitly into the planner; nothing in this crate reads a global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionDefaults {
    /// Tolerance applied to desired amounts to get mint minimums, in percent
    pub slippage_tolerance_percent: f64,

    /// Minutes from now until the mint transaction expires
    pub deadline_minutes: u64,

    /// Fee tier used when the request does not name one
    pub fee_rate: u32,
}

impl Default for PositionDefaults {
    fn default() -> Self {
        Self {
            slippage_tolerance_percent: defaults::SLIPPAGE_TOLERANCE_PERCENT,
            deadline_minutes: defaults::TRANSACTION_DEADLINE_MINUTES,
            fee_rate: defaults::FEE_TIER,
        }
    }
}

impl PositionDefaults {
    pub fn with_slippage_tolerance(mut self, percent: f64) -> Self {
        self.slippage_tolerance_percent = percent;
        self
    }

    pub fn with_deadline_minutes(mut self, minutes: u64) -> Self {
        self.deadline_minutes = minutes;
        self
    }

    pub fn with_fee_rate(mut self, fee_rate: u32) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    pub fn fee_tier(&self) -> Result<FeeTier> {
        FeeTier::from_fee(self.fee_rate)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..100.0).contains(&self.slippage_tolerance_percent) {
            return Err(RangeMathError::InvalidInput(
                "slippage tolerance must be in [0, 100)",
            ));
        }
        if self.deadline_minutes == 0 {
            return Err(RangeMathError::InvalidInput("deadline must be at least one minute"));
        }
        self.fee_tier()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let defaults = PositionDefaults::default();
        assert_eq!(defaults.slippage_tolerance_percent, 0.5);
        assert_eq!(defaults.deadline_minutes, 30);
        assert_eq!(defaults.fee_tier().unwrap().tick_spacing, 60);
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let defaults = PositionDefaults::default()
            .with_slippage_tolerance(1.0)
            .with_deadline_minutes(10)
            .with_fee_rate(500);
        assert_eq!(defaults.fee_tier().unwrap().tick_spacing, 10);
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(PositionDefaults::default().with_slippage_tolerance(100.0).validate().is_err());
        assert!(PositionDefaults::default().with_slippage_tolerance(-0.1).validate().is_err());
        assert!(PositionDefaults::default().with_deadline_minutes(0).validate().is_err());
        assert_eq!(
            PositionDefaults::default().with_fee_rate(1).validate(),
            Err(RangeMathError::UnknownFeeTier(1))
        );
    }
}
