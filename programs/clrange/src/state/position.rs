/// Token quantities in each token's native units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AmountPair {
    pub amount0: f64,
    pub amount1: f64,
}

impl AmountPair {
    pub fn new(amount0: f64, amount1: f64) -> Self {
        Self { amount0, amount1 }
    }

    /// Swap token order, for UIs that list the pool's token1 first
    pub fn reversed(self) -> Self {
        Self {
            amount0: self.amount1,
            amount1: self.amount0,
        }
    }

    /// Value of both legs in token1 terms at `price` (token1 per token0)
    pub fn value_in_token1(&self, price: f64) -> f64 {
        self.amount0 * price + self.amount1
    }
}

/// Where the current price sits relative to a position's range
///
/// Below range: position is 100% token0
/// In range: position holds both tokens
/// Above range: position is 100% token1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePosition {
    BelowRange,
    InRange,
    AboveRange,
}
