use thiserror::Error;

/// Range math error codes
///
/// Every error is a rejected computation. Nothing here is fatal to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RangeMathError {
    // ═══════════════════════════════════════════════════════════════════════
    // INPUT ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    /// A price, amount, percentage or spacing is outside its domain
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    /// Fee is not one of the known fee tiers
    #[error("Unknown fee tier {0}")]
    UnknownFeeTier(u32),

    // ═══════════════════════════════════════════════════════════════════════
    // RANGE ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Tick alignment collapsed the range or pushed it out of bounds
    #[error("Invalid tick range [{tick_lower}, {tick_upper}]")]
    InvalidRange { tick_lower: i32, tick_upper: i32 },

    // ═══════════════════════════════════════════════════════════════════════
    // MATH ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Arithmetic overflow in checked operation
    #[error("Math overflow")]
    MathOverflow,
}

pub type Result<T> = core::result::Result<T, RangeMathError>;
