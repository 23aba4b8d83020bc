//! Utility functions for range math

use num_traits::Float;

use crate::errors::{RangeMathError, Result};
use crate::state::AmountPair;

/// Pass `value` through if it is finite and strictly positive
pub(crate) fn ensure_positive<T: Float>(value: T, reason: &'static str) -> Result<T> {
    if value.is_finite() && value > T::zero() {
        Ok(value)
    } else {
        Err(RangeMathError::InvalidInput(reason))
    }
}

/// Pass `value` through if it is finite and not negative
pub(crate) fn ensure_non_negative<T: Float>(value: T, reason: &'static str) -> Result<T> {
    if value.is_finite() && value >= T::zero() {
        Ok(value)
    } else {
        Err(RangeMathError::InvalidInput(reason))
    }
}

fn validate_slippage(slippage_percent: f64) -> Result<f64> {
    if !(0.0..100.0).contains(&slippage_percent) {
        return Err(RangeMathError::InvalidInput(
            "slippage tolerance must be in [0, 100)",
        ));
    }
    Ok(slippage_percent)
}

/// Minimum acceptable amount after slippage
/// min = amount * (1 - slippage / 100)
pub fn apply_slippage(amount: f64, slippage_percent: f64) -> Result<f64> {
    let amount = ensure_non_negative(amount, "amount must be non-negative")?;
    let slippage = validate_slippage(slippage_percent)?;
    Ok(amount * (1.0 - slippage / 100.0))
}

/// Minimum amounts for a mint, applying the same tolerance to both tokens
pub fn min_amounts(amounts: AmountPair, slippage_percent: f64) -> Result<AmountPair> {
    Ok(AmountPair {
        amount0: apply_slippage(amounts.amount0, slippage_percent)?,
        amount1: apply_slippage(amounts.amount1, slippage_percent)?,
    })
}

/// Minimum output for a swap in raw token units
/// min = amount * floor((100 - slippage) * 100) / 10000
pub fn minimum_amount_out(amount_raw: u128, slippage_percent: f64) -> Result<u128> {
    let slippage = validate_slippage(slippage_percent)?;
    let keep_bps = ((100.0 - slippage) * 100.0).floor() as u128;

    let numerator = amount_raw
        .checked_mul(keep_bps)
        .ok_or(RangeMathError::MathOverflow)?;

    Ok(numerator / 10_000)
}

/// Unix deadline `minutes` after `now_unix_secs`
pub fn deadline_from(now_unix_secs: u64, minutes: u64) -> Result<u64> {
    minutes
        .checked_mul(60)
        .and_then(|secs| now_unix_secs.checked_add(secs))
        .ok_or(RangeMathError::MathOverflow)
}

/// Order two token addresses the way a pool key does
/// Returns (token0, token1, reversed) where `reversed` means `b` sorted first
pub fn sort_tokens(a: [u8; 20], b: [u8; 20]) -> ([u8; 20], [u8; 20], bool) {
    if a <= b {
        (a, b, false)
    } else {
        (b, a, true)
    }
}
