//! 18-decimal fixed-point helpers over 256-bit integers.
//!
//! Rates are stored as `rate × 10^18`; applying one is a multiply followed
//! by a floor division by [`WAD`]. No helper in this module rounds up.

use alloy_primitives::U256;

use crate::domain::Amount;
use crate::error::{ExchangeError, Result};

/// Internal fixed-point precision in decimal places.
pub const INTERNAL_DECIMALS: u8 = 18;

/// `10^18`, the fixed-point unit.
pub const WAD: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Returns `10^exp`, or `None` if it exceeds 256 bits (`exp > 77`).
#[must_use]
pub fn pow10(exp: u8) -> Option<U256> {
    let ten = U256::from(10u8);
    let mut acc = U256::from(1u8);
    for _ in 0..exp {
        acc = acc.checked_mul(ten)?;
    }
    Some(acc)
}

/// Computes `floor(a × b / denominator)`.
///
/// # Errors
///
/// - [`ExchangeError::Overflow`] if `a × b` exceeds 256 bits.
/// - [`ExchangeError::DivisionByZero`] if `denominator` is zero.
pub fn mul_div_floor(a: Amount, b: Amount, denominator: Amount) -> Result<Amount> {
    let product = a
        .checked_mul(&b)
        .ok_or(ExchangeError::Overflow("fixed-point multiplication"))?;
    product
        .checked_div(&denominator)
        .ok_or(ExchangeError::DivisionByZero)
}

/// Applies an 18-decimal rate: `floor(amount × rate / 10^18)`.
///
/// # Errors
///
/// Returns [`ExchangeError::Overflow`] if `amount × rate` exceeds 256 bits.
pub fn apply_rate(amount: Amount, rate: Amount) -> Result<Amount> {
    mul_div_floor(amount, rate, Amount::new(WAD))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn wad(n: u128) -> Amount {
        Amount::from_u128(n * 1_000_000_000_000_000_000)
    }

    #[test]
    fn wad_constant() {
        assert_eq!(Some(WAD), pow10(18));
    }

    #[test]
    fn pow10_edges() {
        assert_eq!(pow10(0), Some(U256::from(1u8)));
        assert!(pow10(77).is_some());
        assert_eq!(pow10(78), None);
    }

    #[test]
    fn apply_unit_rate_is_identity() {
        let Ok(out) = apply_rate(wad(7), wad(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(out, wad(7));
    }

    #[test]
    fn apply_double_rate() {
        let Ok(out) = apply_rate(wad(10), wad(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(out, wad(20));
    }

    #[test]
    fn apply_rate_truncates() {
        // 3 wei at 0.5 = 1.5 wei -> 1
        let half = Amount::from_u128(500_000_000_000_000_000);
        let Ok(out) = apply_rate(Amount::from_u128(3), half) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::from_u128(1));
    }

    #[test]
    fn smallest_rate_can_round_to_zero() {
        let Ok(out) = apply_rate(Amount::from_u128(999), Amount::from_u128(1)) else {
            panic!("expected Ok");
        };
        assert!(out.is_zero());
    }

    #[test]
    fn overflow_is_reported() {
        let Err(e) = apply_rate(Amount::MAX, wad(2)) else {
            panic!("expected Err");
        };
        assert_eq!(e, ExchangeError::Overflow("fixed-point multiplication"));
    }

    #[test]
    fn zero_denominator() {
        let r = mul_div_floor(wad(1), wad(1), Amount::ZERO);
        assert_eq!(r, Err(ExchangeError::DivisionByZero));
    }
}
