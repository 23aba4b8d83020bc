//! Liquidity Math
//!
//! Estimates the token0/token1 split for a new position from a total value.
//!
//! L       = total_value / (2 * sqrt(price))
//! amount0 = L * (sqrt(price_upper) - sqrt(price)) / (sqrt(price) * sqrt(price_upper))
//! amount1 = L * (sqrt(price) - sqrt(price_lower))
//!
//! `L` is a proxy, not the exact liquidity of the position. The exact
//! per-token deltas are the same shape as `get_amount_a_delta` and
//! `get_amount_b_delta` in a pool contract, evaluated with this proxy.

use crate::errors::{RangeMathError, Result};
use crate::math::tick_math::tick_to_price;
use crate::state::{AmountPair, PositionRange, PricePosition};
use crate::utils::{ensure_non_negative, ensure_positive};

struct SqrtBounds {
    sqrt_price: f64,
    sqrt_price_lower: f64,
    sqrt_price_upper: f64,
    liquidity: f64,
}

fn sqrt_bounds(
    price: f64,
    tick_lower: i32,
    tick_upper: i32,
    total_value: f64,
) -> Result<SqrtBounds> {
    let price = ensure_positive(price, "price must be positive and finite")?;
    if tick_lower >= tick_upper {
        return Err(RangeMathError::InvalidInput("lower tick must be below upper tick"));
    }
    let total_value = ensure_non_negative(total_value, "total value must be non-negative")?;

    let sqrt_price = price.sqrt();
    Ok(SqrtBounds {
        sqrt_price,
        sqrt_price_lower: tick_to_price(tick_lower).sqrt(),
        sqrt_price_upper: tick_to_price(tick_upper).sqrt(),
        liquidity: total_value / (2.0 * sqrt_price),
    })
}

fn amounts_at(bounds: &SqrtBounds, sqrt_price: f64) -> AmountPair {
    let SqrtBounds {
        sqrt_price_lower,
        sqrt_price_upper,
        liquidity,
        ..
    } = *bounds;
    AmountPair {
        amount0: liquidity * (sqrt_price_upper - sqrt_price) / (sqrt_price * sqrt_price_upper),
        amount1: liquidity * (sqrt_price - sqrt_price_lower),
    }
}

/// Token split for a new position worth `total_value`
///
/// The formula is not clamped: when `price` is below the range `amount1`
/// comes out negative, and when it is above the range `amount0` does.
/// Use [`calculate_optimal_amounts_clamped`] to get deposit-ready amounts.
///
/// # Errors
/// * `InvalidInput` if `price <= 0`, `tick_lower >= tick_upper` or
///   `total_value < 0`
pub fn calculate_optimal_amounts(
    price: f64,
    tick_lower: i32,
    tick_upper: i32,
    total_value: f64,
) -> Result<AmountPair> {
    let bounds = sqrt_bounds(price, tick_lower, tick_upper, total_value)?;
    Ok(amounts_at(&bounds, bounds.sqrt_price))
}

/// Token split with the current sqrt price clamped into the range
///
/// Below range: amount0 = L * (1/sqrt_price_lower - 1/sqrt_price_upper), amount1 = 0
/// Above range: amount0 = 0, amount1 = L * (sqrt_price_upper - sqrt_price_lower)
/// In range: identical to [`calculate_optimal_amounts`]
pub fn calculate_optimal_amounts_clamped(
    price: f64,
    tick_lower: i32,
    tick_upper: i32,
    total_value: f64,
) -> Result<AmountPair> {
    let bounds = sqrt_bounds(price, tick_lower, tick_upper, total_value)?;
    let clamped = bounds
        .sqrt_price
        .clamp(bounds.sqrt_price_lower, bounds.sqrt_price_upper);
    Ok(amounts_at(&bounds, clamped))
}

/// Where `price` sits relative to the range's bounding prices
pub fn price_position(price: f64, range: &PositionRange) -> Result<PricePosition> {
    let price = ensure_positive(price, "price must be positive and finite")?;
    let (price_lower, price_upper) = range.price_bounds();

    Ok(if price < price_lower {
        PricePosition::BelowRange
    } else if price < price_upper {
        PricePosition::InRange
    } else {
        PricePosition::AboveRange
    })
}
