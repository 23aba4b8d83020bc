// Range math constants
// Tick bounds follow the Uniswap v4 pool manager (int24 ticks, uint160 sqrt prices)

/// Minimum tick index (p(i) = 1.0001^i, this gives price ~= 0)
pub const MIN_TICK: i32 = -887272;

/// Maximum tick index
pub const MAX_TICK: i32 = 887272;

/// Price ratio between two adjacent ticks
pub const TICK_BASE: f64 = 1.0001;

/// Q96 exponent used by sqrtPriceX96 values
pub const Q96_RESOLUTION: usize = 96;

/// Hundredths of a basis point (1_000_000 = 100%)
pub const FEE_RATE_DENOMINATOR: u32 = 1_000_000;

/// Standard fee tiers
pub mod fee_tiers {
    /// 0.01% fee (tick spacing 1) - for very stable pairs
    pub const FEE_TIER_100: u32 = 100;
    pub const TICK_SPACING_100: i32 = 1;

    /// 0.05% fee (tick spacing 10) - for stable pairs
    pub const FEE_TIER_500: u32 = 500;
    pub const TICK_SPACING_500: i32 = 10;

    /// 0.30% fee (tick spacing 60) - for most pairs
    pub const FEE_TIER_3000: u32 = 3000;
    pub const TICK_SPACING_3000: i32 = 60;

    /// 1.00% fee (tick spacing 200) - for exotic pairs
    pub const FEE_TIER_10000: u32 = 10000;
    pub const TICK_SPACING_10000: i32 = 200;
}

/// Defaults the position-creation flow falls back to
pub mod defaults {
    /// 0.5% slippage tolerance
    pub const SLIPPAGE_TOLERANCE_PERCENT: f64 = 0.5;

    /// Transaction deadline in minutes
    pub const TRANSACTION_DEADLINE_MINUTES: u64 = 30;

    /// 0.3% pool
    pub const FEE_TIER: u32 = super::fee_tiers::FEE_TIER_3000;
}

/// Symmetric price bands (lower multiplier, upper multiplier) per strategy
pub mod strategy_bands {
    pub const WIDE: (f64, f64) = (0.70, 1.30); // ±30%
    pub const MEDIUM: (f64, f64) = (0.85, 1.15); // ±15%
    pub const NARROW: (f64, f64) = (0.95, 1.05); // ±5%
    pub const SPOT: (f64, f64) = (0.99, 1.01); // ±1%
}
