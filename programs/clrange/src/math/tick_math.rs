//! Tick Math
//!
//! Converts between tick indices and prices, and aligns ticks to a pool's
//! tick spacing.
//!
//! tick = floor(log(price) / log(1.0001))
//! price = 1.0001^tick
//!
//! Conversions use `f64` (`ln`, `powf`) rather than the Q64.96 fixed-point
//! tables a pool contract uses. Results can drift by one tick from the
//! on-chain value near tick boundaries, and `tick_to_price` loses relative
//! precision at the extremes of the tick domain.

use crate::constants::{MAX_TICK, MIN_TICK, TICK_BASE};
use crate::errors::{RangeMathError, Result};
use crate::utils::ensure_positive;

/// Convert a price to the tick at or below it
///
/// # Errors
/// * `InvalidInput` if `price` is not a positive finite number, or if the
///   resulting tick lies outside `[MIN_TICK, MAX_TICK]`
pub fn price_to_tick(price: f64) -> Result<i32> {
    let price = ensure_positive(price, "price must be positive and finite")?;

    let tick = (price.ln() / TICK_BASE.ln()).floor();
    if tick < MIN_TICK as f64 || tick > MAX_TICK as f64 {
        return Err(RangeMathError::InvalidInput("price is outside the tick domain"));
    }

    Ok(tick as i32)
}

/// Convert a tick index to a price
pub fn tick_to_price(tick: i32) -> f64 {
    TICK_BASE.powf(tick as f64)
}

/// Reject non-positive tick spacings
pub fn validate_tick_spacing(tick_spacing: i32) -> Result<i32> {
    if tick_spacing <= 0 {
        return Err(RangeMathError::InvalidInput("tick spacing must be positive"));
    }
    Ok(tick_spacing)
}

/// Round a tick down to the nearest multiple of `tick_spacing`
pub fn align_tick_down(tick: i32, tick_spacing: i32) -> Result<i32> {
    let spacing = validate_tick_spacing(tick_spacing)?;
    tick.div_euclid(spacing)
        .checked_mul(spacing)
        .ok_or(RangeMathError::MathOverflow)
}

/// Round a tick up to the nearest multiple of `tick_spacing`
pub fn align_tick_up(tick: i32, tick_spacing: i32) -> Result<i32> {
    let spacing = validate_tick_spacing(tick_spacing)?;
    let compressed = tick.div_euclid(spacing);
    if tick.rem_euclid(spacing) == 0 {
        Ok(compressed * spacing)
    } else {
        (compressed + 1)
            .checked_mul(spacing)
            .ok_or(RangeMathError::MathOverflow)
    }
}

/// Lowest tick a position can use for the given spacing
pub fn min_usable_tick(tick_spacing: i32) -> Result<i32> {
    align_tick_up(MIN_TICK, tick_spacing)
}

/// Highest tick a position can use for the given spacing
pub fn max_usable_tick(tick_spacing: i32) -> Result<i32> {
    align_tick_down(MAX_TICK, tick_spacing)
}

pub fn is_valid_tick(tick: i32, tick_spacing: i32) -> bool {
    tick_spacing > 0 && (MIN_TICK..=MAX_TICK).contains(&tick) && tick % tick_spacing == 0
}
