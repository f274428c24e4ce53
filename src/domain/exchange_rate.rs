//! Operator-set fixed exchange rate.

use core::fmt;

use alloy_primitives::U256;
use serde::Serialize;

use super::Amount;
use crate::error::{ExchangeError, Result};
use crate::math;

/// Upper bound on any rate: `10^30` (one trillion units per unit at 18 decimals).
pub const MAX_RATE_THRESHOLD: U256 = U256::from_limbs([0x4674_edea_4000_0000, 0xc_9f2c_9cd0, 0, 0]);

/// A directional exchange rate in 18-decimal fixed point.
///
/// A rate of `2 × 10^18` means one unit of the input token buys two units
/// of the output token. Valid rates lie in `[1, MAX_RATE_THRESHOLD]`.
///
/// # Examples
///
/// ```
/// use rate_exchange::domain::{Amount, ExchangeRate};
///
/// let two = ExchangeRate::new(Amount::from_u128(2_000_000_000_000_000_000)).expect("in range");
/// let out = two.apply(Amount::from_u128(10)).expect("fits");
/// assert_eq!(out, Amount::from_u128(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ExchangeRate(Amount);

impl ExchangeRate {
    /// The smallest valid rate (one fixed-point unit, `10^-18`).
    pub const MIN: Self = Self(Amount::new(U256::from_limbs([1, 0, 0, 0])));

    /// The largest valid rate ([`MAX_RATE_THRESHOLD`]).
    pub const MAX: Self = Self(Amount::new(MAX_RATE_THRESHOLD));

    /// Validates and wraps a raw 18-decimal rate.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::IncorrectExchangeRate`] if `rate` is zero
    /// or exceeds [`MAX_RATE_THRESHOLD`].
    pub fn new(rate: Amount) -> Result<Self> {
        if rate.is_zero() || rate.get() > MAX_RATE_THRESHOLD {
            return Err(ExchangeError::IncorrectExchangeRate { rate });
        }
        Ok(Self(rate))
    }

    /// Returns the raw 18-decimal value.
    pub const fn get(&self) -> Amount {
        self.0
    }

    /// Converts `amount_in` to the output side: `floor(amount_in × rate / 10^18)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Overflow`] if the product exceeds 256 bits.
    pub fn apply(&self, amount_in: Amount) -> Result<Amount> {
        math::apply_rate(amount_in, self.0)
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_ten_to_thirty() {
        assert_eq!(Some(MAX_RATE_THRESHOLD), math::pow10(30));
    }

    #[test]
    fn accepts_bounds() {
        assert_eq!(ExchangeRate::new(Amount::from_u128(1)), Ok(ExchangeRate::MIN));
        assert_eq!(
            ExchangeRate::new(Amount::new(MAX_RATE_THRESHOLD)),
            Ok(ExchangeRate::MAX)
        );
    }

    #[test]
    fn rejects_zero() {
        let Err(e) = ExchangeRate::new(Amount::ZERO) else {
            panic!("expected Err");
        };
        assert_eq!(e, ExchangeError::IncorrectExchangeRate { rate: Amount::ZERO });
    }

    #[test]
    fn rejects_above_threshold() {
        let over = Amount::new(MAX_RATE_THRESHOLD + U256::from(1u8));
        let Err(e) = ExchangeRate::new(over) else {
            panic!("expected Err");
        };
        assert_eq!(e, ExchangeError::IncorrectExchangeRate { rate: over });
    }

    #[test]
    fn apply_half() {
        let Ok(half) = ExchangeRate::new(Amount::from_u128(500_000_000_000_000_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(
            half.apply(Amount::from_u128(10_000_000_000_000_000_000)),
            Ok(Amount::from_u128(5_000_000_000_000_000_000))
        );
    }
}
