//! Token decimal places.

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::{ExchangeError, Result};
use crate::math;

/// Largest decimal count whose power of ten fits in 256 bits (`10^77`).
const MAX_DECIMALS: u8 = 77;

/// Number of decimal places a token uses for its native amounts.
///
/// Valid range is `0..=77`. Unlike the exchange's internal precision
/// (always 18), tokens may use more than 18 decimals.
///
/// # Examples
///
/// ```
/// use rate_exchange::domain::{Amount, Decimals};
///
/// let usdc = Decimals::new(6).expect("6 is valid");
/// let one = Amount::from_u128(1_000_000_000_000_000_000);
/// assert_eq!(usdc.to_raw_amount(one).expect("fits"), Amount::from_u128(1_000_000));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// The exchange's internal precision (18).
    pub const INTERNAL: Self = Self(math::INTERNAL_DECIMALS);

    /// Maximum supported decimal places (77).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidPrecision`] if `value` exceeds 77.
    pub const fn new(value: u8) -> Result<Self> {
        if value > MAX_DECIMALS {
            return Err(ExchangeError::InvalidPrecision { decimals: value });
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts an 18-decimal amount into this token's native units.
    ///
    /// Scaling down truncates toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Overflow`] if scaling up exceeds 256 bits.
    pub fn to_raw_amount(&self, scaled: Amount) -> Result<Amount> {
        math::to_raw_amount(scaled, *self)
    }
}

impl TryFrom<u8> for Decimals {
    type Error = ExchangeError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_range_edges() {
        let (Ok(lo), Ok(hi)) = (Decimals::new(0), Decimals::new(77)) else {
            panic!("expected Ok");
        };
        assert_eq!(lo, Decimals::ZERO);
        assert_eq!(hi, Decimals::MAX);
    }

    #[test]
    fn invalid_seventy_eight() {
        let Err(e) = Decimals::new(78) else {
            panic!("expected Err");
        };
        assert_eq!(e, ExchangeError::InvalidPrecision { decimals: 78 });
    }

    #[test]
    fn internal_is_eighteen() {
        assert_eq!(Decimals::INTERNAL.get(), 18);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Decimals::default(), Decimals::ZERO);
    }

    #[test]
    fn ordering() {
        let (Ok(d6), Ok(d24)) = (Decimals::new(6), Decimals::new(24)) else {
            panic!("expected Ok");
        };
        assert!(d6 < Decimals::INTERNAL);
        assert!(Decimals::INTERNAL < d24);
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Decimals>("6").is_ok());
        assert!(serde_json::from_str::<Decimals>("200").is_err());
    }
}
