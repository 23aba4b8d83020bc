pub mod config;
pub mod fee_tier;
pub mod position;
pub mod range;

pub use config::*;
pub use fee_tier::*;
pub use position::*;
pub use range::*;
