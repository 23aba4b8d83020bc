use log::{debug, trace};

use crate::constants::{strategy_bands, MAX_TICK, MIN_TICK};
use crate::errors::{RangeMathError, Result};
use crate::math::tick_math::{
    align_tick_down, align_tick_up, is_valid_tick, max_usable_tick, min_usable_tick,
    price_to_tick, tick_to_price, validate_tick_spacing,
};
use crate::utils::ensure_positive;

/// Named policy mapping to a symmetric band around the current price
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeStrategy {
    /// ±30%, lower risk, lower fees
    Wide,
    /// ±15%, balanced
    Medium,
    /// ±5%, higher risk, higher fees
    Narrow,
    /// ±1% around the current price
    Spot,
    /// ±p% for a caller-supplied p in (0, 100)
    Custom(f64),
}

impl RangeStrategy {
    /// (lower multiplier, upper multiplier) applied to the current price
    pub fn multipliers(&self) -> Result<(f64, f64)> {
        match *self {
            RangeStrategy::Wide => Ok(strategy_bands::WIDE),
            RangeStrategy::Medium => Ok(strategy_bands::MEDIUM),
            RangeStrategy::Narrow => Ok(strategy_bands::NARROW),
            RangeStrategy::Spot => Ok(strategy_bands::SPOT),
            RangeStrategy::Custom(percent) => {
                if !(percent > 0.0 && percent < 100.0) {
                    return Err(RangeMathError::InvalidInput(
                        "custom range percent must be in (0, 100)",
                    ));
                }
                let factor = percent / 100.0;
                Ok((1.0 - factor, 1.0 + factor))
            }
        }
    }
}

/// Tick bounds of a liquidity position
/// Invariant: tick_lower < tick_upper, both multiples of the pool's tick spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl PositionRange {
    /// Validated constructor
    ///
    /// # Errors
    /// * `InvalidInput` if `tick_spacing <= 0`
    /// * `InvalidRange` if the ticks are inverted, unaligned or out of bounds
    pub fn new(tick_lower: i32, tick_upper: i32, tick_spacing: i32) -> Result<Self> {
        validate_tick_spacing(tick_spacing)?;

        if tick_lower >= tick_upper
            || !is_valid_tick(tick_lower, tick_spacing)
            || !is_valid_tick(tick_upper, tick_spacing)
        {
            return Err(RangeMathError::InvalidRange {
                tick_lower,
                tick_upper,
            });
        }

        Ok(Self {
            tick_lower,
            tick_upper,
        })
    }

    /// Range covering every usable tick for the spacing
    pub fn full_range(tick_spacing: i32) -> Result<Self> {
        Self::new(min_usable_tick(tick_spacing)?, max_usable_tick(tick_spacing)?, tick_spacing)
    }

    /// Range from explicit user price bounds
    ///
    /// `reversed` means the prices are quoted in the UI's token order, which
    /// is the inverse of the pool's sorted order; the ticks are then negated
    /// and swapped. Both bounds are aligned down to the tick spacing.
    pub fn from_price_bounds(
        min_price: f64,
        max_price: f64,
        tick_spacing: i32,
        reversed: bool,
    ) -> Result<Self> {
        validate_tick_spacing(tick_spacing)?;
        let min_price = ensure_positive(min_price, "min price must be positive and finite")?;
        let max_price = ensure_positive(max_price, "max price must be positive and finite")?;
        if min_price >= max_price {
            return Err(RangeMathError::InvalidInput("min price must be below max price"));
        }

        let mut lower = price_to_tick(min_price)?;
        let mut upper = price_to_tick(max_price)?;
        if reversed {
            (lower, upper) = (-upper, -lower);
        }

        Self::new(
            align_tick_down(lower, tick_spacing)?,
            align_tick_down(upper, tick_spacing)?,
            tick_spacing,
        )
    }

    /// (lower price, upper price) at the range's ticks
    pub fn price_bounds(&self) -> (f64, f64) {
        (tick_to_price(self.tick_lower), tick_to_price(self.tick_upper))
    }

    pub fn width(&self) -> i32 {
        self.tick_upper - self.tick_lower
    }

    /// Lower bound inclusive, upper bound exclusive, as a pool treats them
    pub fn contains_tick(&self, tick: i32) -> bool {
        tick >= self.tick_lower && tick < self.tick_upper
    }
}

/// Tick of a band edge, one past the domain bound when the edge leaves it
fn band_edge_tick(price: f64) -> i32 {
    match price_to_tick(price) {
        Ok(tick) => tick,
        Err(_) if price < 1.0 => MIN_TICK - 1,
        Err(_) => MAX_TICK + 1,
    }
}

/// Aligned tick range for a strategy around the current price
///
/// The lower tick is aligned down and the upper tick up, so the aligned
/// range always covers the strategy's price band.
///
/// # Errors
/// * `InvalidInput` if `current_price` is not positive or has no tick,
///   `tick_spacing <= 0`, or a custom percent is outside (0, 100)
/// * `InvalidRange` if alignment collapses the range or a band edge lands
///   past the usable tick bounds
pub fn calculate_tick_range(
    current_price: f64,
    strategy: RangeStrategy,
    tick_spacing: i32,
) -> Result<PositionRange> {
    let current_price =
        ensure_positive(current_price, "current price must be positive and finite")?;
    price_to_tick(current_price)?;
    validate_tick_spacing(tick_spacing)?;
    let (lower_multiplier, upper_multiplier) = strategy.multipliers()?;

    let lower_price = current_price * lower_multiplier;
    let upper_price = current_price * upper_multiplier;
    trace!("strategy {:?} price band [{}, {}]", strategy, lower_price, upper_price);

    let tick_lower = align_tick_down(band_edge_tick(lower_price), tick_spacing)?;
    let tick_upper = align_tick_up(band_edge_tick(upper_price), tick_spacing)?;

    let range = PositionRange::new(tick_lower, tick_upper, tick_spacing)?;
    debug!(
        "Tick range for {:?} at price {}: [{}, {}]",
        strategy, current_price, range.tick_lower, range.tick_upper
    );

    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_medium_range_at_2000() {
        let range = calculate_tick_range(2000.0, RangeStrategy::Medium, 60).unwrap();
        assert_eq!(
            range,
            PositionRange {
                tick_lower: 74340,
                tick_upper: 77460,
            }
        );

        // Aligned ticks bracket the unaligned band
        assert!(range.tick_lower <= price_to_tick(1700.0).unwrap());
        assert!(range.tick_upper >= price_to_tick(2300.0).unwrap());

        let (lower_price, upper_price) = range.price_bounds();
        assert!(lower_price <= 1700.0 && lower_price > 1690.0);
        assert!(upper_price >= 2300.0 && upper_price < 2315.0);
    }

    #[test]
    fn test_strategies_at_2000() {
        let cases = [
            (RangeStrategy::Wide, 72420, 78660),
            (RangeStrategy::Narrow, 75480, 76500),
            (RangeStrategy::Spot, 75900, 76140),
        ];
        for (strategy, lower, upper) in cases {
            let range = calculate_tick_range(2000.0, strategy, 60).unwrap();
            assert_eq!((range.tick_lower, range.tick_upper), (lower, upper), "{strategy:?}");
        }
    }

    #[test]
    fn test_custom_matches_named_band() {
        let custom = calculate_tick_range(2000.0, RangeStrategy::Custom(15.0), 60).unwrap();
        let medium = calculate_tick_range(2000.0, RangeStrategy::Medium, 60).unwrap();
        assert_eq!(custom, medium);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            calculate_tick_range(0.0, RangeStrategy::Medium, 60),
            Err(RangeMathError::InvalidInput(_))
        ));
        assert!(calculate_tick_range(-5.0, RangeStrategy::Wide, 60).is_err());
        assert!(calculate_tick_range(2000.0, RangeStrategy::Medium, 0).is_err());
        assert!(calculate_tick_range(2000.0, RangeStrategy::Medium, -60).is_err());
        assert!(calculate_tick_range(2000.0, RangeStrategy::Custom(0.0), 60).is_err());
        assert!(calculate_tick_range(2000.0, RangeStrategy::Custom(100.0), 60).is_err());
        assert!(calculate_tick_range(2000.0, RangeStrategy::Custom(f64::NAN), 60).is_err());
    }

    #[test]
    fn test_collapsed_range_is_rejected() {
        // Both band edges floor to tick 0, which is already aligned
        assert_eq!(
            calculate_tick_range(1.00005, RangeStrategy::Custom(1e-9), 60),
            Err(RangeMathError::InvalidRange {
                tick_lower: 0,
                tick_upper: 0,
            })
        );
    }

    #[test]
    fn test_range_past_max_tick_is_rejected() {
        // upper band edge leaves the tick domain
        let near_max = tick_to_price(MAX_TICK - 10);
        assert!(matches!(
            calculate_tick_range(near_max, RangeStrategy::Narrow, 60),
            Err(RangeMathError::InvalidRange {
                tick_upper: 887280,
                ..
            })
        ));
        assert!(matches!(
            calculate_tick_range(near_max, RangeStrategy::Custom(0.5), 60),
            Err(RangeMathError::InvalidRange {
                tick_upper: 887280,
                ..
            })
        ));

        // upper band edge stays in the domain but aligns past the usable bound
        let inside = tick_to_price(MAX_TICK - 80);
        assert!(matches!(
            calculate_tick_range(inside, RangeStrategy::Custom(0.5), 60),
            Err(RangeMathError::InvalidRange {
                tick_upper: 887280,
                ..
            })
        ));
    }

    #[test]
    fn test_range_past_min_tick_is_rejected() {
        let near_min = tick_to_price(MIN_TICK + 10);
        assert!(matches!(
            calculate_tick_range(near_min, RangeStrategy::Narrow, 60),
            Err(RangeMathError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_current_price_outside_domain_is_invalid_input() {
        assert_eq!(
            calculate_tick_range(1e300, RangeStrategy::Spot, 60),
            Err(RangeMathError::InvalidInput("price is outside the tick domain"))
        );
        assert_eq!(
            calculate_tick_range(1e-300, RangeStrategy::Spot, 60),
            Err(RangeMathError::InvalidInput("price is outside the tick domain"))
        );
    }

    #[test]
    fn test_position_range_new() {
        assert!(PositionRange::new(-120, 120, 60).is_ok());
        assert_eq!(
            PositionRange::new(120, 120, 60),
            Err(RangeMathError::InvalidRange {
                tick_lower: 120,
                tick_upper: 120,
            })
        );
        assert!(PositionRange::new(120, -120, 60).is_err());
        assert!(PositionRange::new(-100, 120, 60).is_err());
        assert!(PositionRange::new(-120, 120, 0).is_err());
    }

    #[test]
    fn test_full_range() {
        let range = PositionRange::full_range(60).unwrap();
        assert_eq!(
            range,
            PositionRange {
                tick_lower: -887220,
                tick_upper: 887220,
            }
        );
        assert!(range.contains_tick(0));
        assert!(!range.contains_tick(887220));
    }

    #[test]
    fn test_from_price_bounds() {
        let range = PositionRange::from_price_bounds(1700.0, 2300.0, 60, false).unwrap();
        assert_eq!(
            range,
            PositionRange {
                tick_lower: 74340,
                tick_upper: 77400,
            }
        );
        assert_eq!(range.width(), 3060);
    }

    #[test]
    fn test_from_price_bounds_reversed() {
        let range = PositionRange::from_price_bounds(1700.0, 2300.0, 60, true).unwrap();
        // -77410 and -74387 aligned down
        assert_eq!(
            range,
            PositionRange {
                tick_lower: -77460,
                tick_upper: -74400,
            }
        );
    }

    #[test]
    fn test_from_price_bounds_rejects_bad_input() {
        assert!(PositionRange::from_price_bounds(2300.0, 1700.0, 60, false).is_err());
        assert!(PositionRange::from_price_bounds(0.0, 1700.0, 60, false).is_err());
        // both bounds fall into the same spacing bucket
        assert!(matches!(
            PositionRange::from_price_bounds(2000.0, 2000.5, 60, false),
            Err(RangeMathError::InvalidRange { .. })
        ));
    }

    fn strategy_strategy() -> impl Strategy<Value = RangeStrategy> {
        prop_oneof![
            Just(RangeStrategy::Wide),
            Just(RangeStrategy::Medium),
            Just(RangeStrategy::Narrow),
            Just(RangeStrategy::Spot),
            (0.5f64..99.0).prop_map(RangeStrategy::Custom),
        ]
    }

    proptest! {
        #[test]
        fn prop_range_is_ordered_and_aligned(
            price in 1e-6f64..1e9,
            strategy in strategy_strategy(),
            spacing in prop::sample::select(vec![1, 10, 60, 200]),
        ) {
            let range = calculate_tick_range(price, strategy, spacing).unwrap();
            prop_assert!(range.tick_lower < range.tick_upper);
            prop_assert_eq!(range.tick_lower % spacing, 0);
            prop_assert_eq!(range.tick_upper % spacing, 0);
        }

        #[test]
        fn prop_range_is_idempotent(price in 1e-3f64..1e6, spacing in 1i32..=200) {
            let first = calculate_tick_range(price, RangeStrategy::Narrow, spacing);
            let second = calculate_tick_range(price, RangeStrategy::Narrow, spacing);
            prop_assert_eq!(first, second);
        }
    }
}
