//! Sqrt Price Math
//!
//! Converts a pool's `sqrtPriceX96` (Q64.96 fixed point, as read from slot0)
//! into a decimal-adjusted price and back.
//!
//! price_raw = (sqrtPriceX96 / 2^96)^2          (token1 base units per token0 base unit)
//! price     = price_raw * 10^(decimals0 - decimals1)

use uint::construct_uint;

use crate::constants::Q96_RESOLUTION;
use crate::errors::RangeMathError;
use crate::utils::ensure_positive;

// The expansion names `Result` unqualified, so the crate's one-parameter
// alias must not be imported into this module.
construct_uint! {
    /// 256-bit unsigned integer for uint160 sqrt prices
    pub struct U256(4);
}

/// Minimum sqrt price a pool can hold (sqrt price at MIN_TICK)
pub const MIN_SQRT_PRICE_X96: U256 = U256([0x1_0002_76a3, 0, 0, 0]);

/// Maximum sqrt price a pool can hold (sqrt price at MAX_TICK)
pub const MAX_SQRT_PRICE_X96: U256 =
    U256([0x5d95_1d52_6398_8d26, 0xefd1_fc6a_5064_8849, 0xfffd_8963, 0]);

fn q96() -> f64 {
    2f64.powi(Q96_RESOLUTION as i32)
}

fn decimal_scale(decimals0: u8, decimals1: u8) -> f64 {
    10f64.powi(decimals0 as i32 - decimals1 as i32)
}

/// Lossy conversion, keeps the top 128 significant bits
fn u256_to_f64(value: U256) -> f64 {
    let bits = value.bits();
    if bits <= 128 {
        return value.low_u128() as f64;
    }
    let shift = bits - 128;
    (value >> shift).low_u128() as f64 * 2f64.powi(shift as i32)
}

/// Caller guarantees `0 <= value < 2^160`
fn f64_to_u256(value: f64) -> U256 {
    if value < 2f64.powi(126) {
        return U256::from(value as u128);
    }
    // value / 2^shift lands in [2^126, 2^127), exact because 2^shift is a power of two
    let shift = value.log2().floor() as i32 - 126;
    let scaled = (value / 2f64.powi(shift)) as u128;
    U256::from(scaled) << (shift as usize)
}

/// Decimal-adjusted price (token1 per token0) from a pool's sqrtPriceX96
///
/// # Errors
/// * `InvalidInput` if `sqrt_price_x96` is outside
///   `[MIN_SQRT_PRICE_X96, MAX_SQRT_PRICE_X96]`
pub fn sqrt_price_x96_to_price(
    sqrt_price_x96: U256,
    decimals0: u8,
    decimals1: u8,
) -> crate::errors::Result<f64> {
    if sqrt_price_x96 < MIN_SQRT_PRICE_X96 || sqrt_price_x96 > MAX_SQRT_PRICE_X96 {
        return Err(RangeMathError::InvalidInput("sqrt price is outside the pool domain"));
    }

    let sqrt_price = u256_to_f64(sqrt_price_x96) / q96();
    let price = sqrt_price * sqrt_price * decimal_scale(decimals0, decimals1);

    ensure_positive(price, "price is not representable as f64")
}

/// sqrtPriceX96 for a decimal-adjusted price (token1 per token0)
///
/// # Errors
/// * `InvalidInput` if `price` is not positive and finite, or maps outside
///   the pool's sqrt price domain
pub fn price_to_sqrt_price_x96(
    price: f64,
    decimals0: u8,
    decimals1: u8,
) -> crate::errors::Result<U256> {
    let price = ensure_positive(price, "price must be positive and finite")?;

    let raw_price = price / decimal_scale(decimals0, decimals1);
    let sqrt_price_x96 = raw_price.sqrt() * q96();
    if !sqrt_price_x96.is_finite() || sqrt_price_x96 >= 2f64.powi(160) {
        return Err(RangeMathError::InvalidInput("price is outside the sqrt price domain"));
    }

    let result = f64_to_u256(sqrt_price_x96);
    if result < MIN_SQRT_PRICE_X96 || result > MAX_SQRT_PRICE_X96 {
        return Err(RangeMathError::InvalidInput("price is outside the sqrt price domain"));
    }

    Ok(result)
}

/// Price quoted the other way round (token0 per token1)
/// Used when the UI token order is reversed relative to the pool's sorted order
pub fn invert_price(price: f64) -> crate::errors::Result<f64> {
    let price = ensure_positive(price, "price must be positive and finite")?;
    ensure_positive(1.0 / price, "inverted price is not representable")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q96_is_price_one() {
        let one = U256::one() << 96usize;
        assert_eq!(sqrt_price_x96_to_price(one, 18, 18).unwrap(), 1.0);
    }

    #[test]
    fn test_decimal_adjustment() {
        // WETH (18) / USDC (6) pool at 2000 USDC per WETH
        let sqrt_price = U256::from(3_543_191_142_285_914_327_220_224u128);
        let price = sqrt_price_x96_to_price(sqrt_price, 18, 6).unwrap();
        assert!((price - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_large_sqrt_price() {
        // sqrt(2000) * 2^96 exceeds 128 bits once squared but not as a sqrt price
        let sqrt_price = U256::from_dec_str("3543191142285914378072636784640").unwrap();
        let price = sqrt_price_x96_to_price(sqrt_price, 18, 18).unwrap();
        assert!((price - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_sqrt_price_bounds() {
        assert!(sqrt_price_x96_to_price(MIN_SQRT_PRICE_X96, 18, 18).is_ok());
        assert!(sqrt_price_x96_to_price(MAX_SQRT_PRICE_X96, 18, 18).is_ok());
        assert!(sqrt_price_x96_to_price(U256::zero(), 18, 18).is_err());
        assert!(sqrt_price_x96_to_price(MIN_SQRT_PRICE_X96 - U256::one(), 18, 18).is_err());
        assert!(sqrt_price_x96_to_price(MAX_SQRT_PRICE_X96 + U256::one(), 18, 18).is_err());
    }

    #[test]
    fn test_price_to_sqrt_price_round_trip() {
        let cases = [
            (1.0, 18, 18),
            (2000.0, 18, 6),
            (0.0005, 6, 18),
            (61_234.5, 8, 6),
            (1e30, 18, 18),
        ];
        for (price, d0, d1) in cases {
            let sqrt_price = price_to_sqrt_price_x96(price, d0, d1).unwrap();
            let back = sqrt_price_x96_to_price(sqrt_price, d0, d1).unwrap();
            assert!(((back - price) / price).abs() < 1e-9, "{price} -> {back}");
        }
    }

    #[test]
    fn test_price_to_sqrt_price_rejects_bad_input() {
        assert!(price_to_sqrt_price_x96(0.0, 18, 18).is_err());
        assert!(price_to_sqrt_price_x96(1e300, 18, 18).is_err());
    }

    #[test]
    fn test_u256_parses_and_orders() {
        let parsed =
            U256::from_dec_str("1461446703485210103287273052203988822378723970342").unwrap();
        assert_eq!(parsed, MAX_SQRT_PRICE_X96);
        assert_eq!(U256::from_dec_str("4295128739").unwrap(), MIN_SQRT_PRICE_X96);
        assert!(MIN_SQRT_PRICE_X96 < MAX_SQRT_PRICE_X96);
        assert_eq!(MAX_SQRT_PRICE_X96.bits(), 160);
    }

    #[test]
    fn test_invert_price() {
        assert_eq!(invert_price(4.0).unwrap(), 0.25);
        assert!(invert_price(0.0).is_err());
    }
}
