//! Position planning
//!
//! Composes the range, amount and slippage math into the values a
//! position-manager mint call needs. The caller supplies the current
//! price (read from the pool) and submits the plan itself.

use log::debug;

use crate::errors::Result;
use crate::math::liquidity_math::{calculate_optimal_amounts, price_position};
use crate::state::{
    calculate_tick_range, AmountPair, FeeTier, PositionDefaults, PositionRange, PricePosition,
    RangeStrategy,
};
use crate::utils::{deadline_from, min_amounts};

/// Inputs from the position-creation form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRequest {
    /// Decimal-adjusted pool price (token1 per token0)
    pub current_price: f64,
    pub strategy: RangeStrategy,
    /// Falls back to `PositionDefaults::fee_rate` when `None`
    pub fee_rate: Option<u32>,
    /// Value to deposit, in token0 terms
    pub total_value: f64,
    pub now_unix_secs: u64,
}

/// Everything a mint call needs, computed from one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionPlan {
    pub fee_tier: FeeTier,
    pub range: PositionRange,
    pub price_lower: f64,
    pub price_upper: f64,
    pub price_position: PricePosition,
    pub desired: AmountPair,
    pub minimum: AmountPair,
    pub deadline: u64,
}

pub fn plan_position(
    request: &PositionRequest,
    defaults: &PositionDefaults,
) -> Result<PositionPlan> {
    defaults.validate()?;

    let fee_tier = match request.fee_rate {
        Some(fee_rate) => FeeTier::from_fee(fee_rate)?,
        None => defaults.fee_tier()?,
    };

    let range =
        calculate_tick_range(request.current_price, request.strategy, fee_tier.tick_spacing)?;
    let (price_lower, price_upper) = range.price_bounds();
    let position = price_position(request.current_price, &range)?;

    let desired = calculate_optimal_amounts(
        request.current_price,
        range.tick_lower,
        range.tick_upper,
        request.total_value,
    )?;
    let minimum = min_amounts(desired, defaults.slippage_tolerance_percent)?;
    let deadline = deadline_from(request.now_unix_secs, defaults.deadline_minutes)?;

    debug!("Position planned");
    debug!("Fee tier: {} (spacing {})", fee_tier.fee_rate, fee_tier.tick_spacing);
    debug!("Tick range: [{}, {}]", range.tick_lower, range.tick_upper);
    debug!("Desired amounts: {} / {}", desired.amount0, desired.amount1);

    Ok(PositionPlan {
        fee_tier,
        range,
        price_lower,
        price_upper,
        price_position: position,
        desired,
        minimum,
        deadline,
    })
}
