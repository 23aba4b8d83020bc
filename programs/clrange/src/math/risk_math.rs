//! Risk Math
//!
//! Closed-form impermanent loss and price impact estimates for display.
//!
//! Price impact assumes a constant-product (x * y = k) pool. Concentrated
//! liquidity pools price along ticks instead, so the figure is an
//! approximation of the real pool's curve, not a quote.

use crate::errors::{RangeMathError, Result};
use crate::utils::{ensure_non_negative, ensure_positive};

/// Impermanent loss of a full-range two-asset position, in percent
///
/// ratio = current_price / initial_price
/// IL    = (2 * sqrt(ratio) / (1 + ratio) - 1) * 100
///
/// The result is zero when the price has not moved and negative otherwise.
pub fn estimate_impermanent_loss(initial_price: f64, current_price: f64) -> Result<f64> {
    let initial_price =
        ensure_positive(initial_price, "initial price must be positive and finite")?;
    let current_price =
        ensure_positive(current_price, "current price must be positive and finite")?;

    let ratio = current_price / initial_price;
    let impermanent_loss = 2.0 * ratio.sqrt() / (1.0 + ratio) - 1.0;

    Ok(impermanent_loss * 100.0)
}

/// Price impact of swapping `amount_in` against constant-product reserves, in percent
///
/// k                = reserve_in * reserve_out
/// new_reserve_in   = reserve_in + amount_in
/// new_reserve_out  = k / new_reserve_in
/// impact           = (spot - new_spot) / spot * 100, spot = reserve_out / reserve_in
pub fn calculate_price_impact(amount_in: f64, reserve_in: f64, reserve_out: f64) -> Result<f64> {
    let amount_in = ensure_non_negative(amount_in, "amount in must be non-negative")?;
    let reserve_in = ensure_positive(reserve_in, "reserve in must be positive and finite")?;
    let reserve_out = ensure_positive(reserve_out, "reserve out must be positive and finite")?;

    let k = reserve_in * reserve_out;
    if !k.is_finite() {
        return Err(RangeMathError::MathOverflow);
    }

    let new_reserve_in = reserve_in + amount_in;
    let new_reserve_out = k / new_reserve_in;

    let current_price = reserve_out / reserve_in;
    let new_price = new_reserve_out / new_reserve_in;

    Ok((current_price - new_price) / current_price * 100.0)
}
