//! clrange - Concentrated-Liquidity Range Math
//!
//! Off-chain helpers a Uniswap-v4-style front end uses when building
//! liquidity positions and showing risk figures.
//!
//! ## Architecture
//!
//! - **Tick Math**: price <-> tick conversion and tick-spacing alignment
//! - **Range Strategies**: Wide / Medium / Narrow / Spot / Custom bands around the current price
//! - **Amount Allocation**: token0/token1 split for a position of a given value
//! - **Risk Estimates**: impermanent loss and constant-product price impact
//! - **Sqrt Price**: slot0 `sqrtPriceX96` to decimal-adjusted price and back
//! - **Planner**: composes the above into the inputs of a mint call
//!
//! ## Numerics
//!
//! - Tick and amount math use `f64`, not Q64.96 fixed point; ticks may
//!   differ from the pool contract by one near boundaries
//! - Every function is pure and holds no shared state, so it is safe to
//!   call from any thread
//! - Invalid input is rejected with [`RangeMathError`], never clamped silently

pub mod constants;
pub mod errors;
pub mod math;
pub mod planner;
pub mod state;
pub mod utils;

pub use errors::{RangeMathError, Result};
pub use math::{
    calculate_optimal_amounts, calculate_optimal_amounts_clamped, calculate_price_impact,
    estimate_impermanent_loss, price_position, price_to_sqrt_price_x96, price_to_tick,
    sqrt_price_x96_to_price, tick_to_price, U256,
};
pub use planner::{plan_position, PositionPlan, PositionRequest};
pub use state::{
    calculate_tick_range, AmountPair, FeeTier, PositionDefaults, PositionRange, PricePosition,
    RangeStrategy,
};
