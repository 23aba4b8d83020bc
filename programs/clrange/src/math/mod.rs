pub mod liquidity_math;
pub mod risk_math;
pub mod sqrt_price_math;
pub mod tick_math;

pub use liquidity_math::*;
pub use risk_math::*;
pub use sqrt_price_math::*;
pub use tick_math::*;
