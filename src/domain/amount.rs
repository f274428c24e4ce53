//! 256-bit token amount with checked arithmetic.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// A token quantity held in 256 bits.
///
/// `Amount` never interprets decimals: the same type carries amounts in
/// the exchange's internal 18-decimal precision and raw amounts in a
/// token's native precision. Which one a value holds is given by the
/// context it flows through.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking.
///
/// # Examples
///
/// ```
/// use rate_exchange::domain::Amount;
///
/// let a = Amount::from_u128(100);
/// let b = Amount::from_u128(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::from_u128(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::from_u128(100)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Maximum representable amount.
    pub const MAX: Self = Self(U256::MAX);

    /// Wraps a raw `U256` value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Builds an amount from a `u128`.
    pub fn from_u128(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == U256::ZERO
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Floor division. Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.0.checked_div(divisor.0).map(Self)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<Amount> for U256 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn from_u128_and_get() {
        let a = Amount::from_u128(42);
        assert_eq!(a.get(), U256::from(42u64));
    }

    #[test]
    fn constants() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::MAX.get(), U256::MAX);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn is_zero_false() {
        assert!(!Amount::from_u128(1).is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::from_u128(1_000_000)), "1000000");
    }

    #[test]
    fn ordering() {
        assert!(Amount::from_u128(1) < Amount::from_u128(2));
        assert_eq!(Amount::from_u128(5), Amount::from_u128(5));
    }

    // -- Checked arithmetic -------------------------------------------------

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::from_u128(1)), None);
    }

    #[test]
    fn sub_underflow() {
        let a = Amount::from_u128(1);
        let b = Amount::from_u128(2);
        assert_eq!(a.checked_sub(&b), None);
    }

    #[test]
    fn mul_beyond_u128() {
        let a = Amount::from_u128(u128::MAX);
        let Some(product) = a.checked_mul(&Amount::from_u128(2)) else {
            panic!("256-bit product fits");
        };
        assert!(product > a);
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::from_u128(2)), None);
    }

    #[test]
    fn div_truncates() {
        let a = Amount::from_u128(10);
        assert_eq!(a.checked_div(&Amount::from_u128(3)), Some(Amount::from_u128(3)));
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(Amount::from_u128(10).checked_div(&Amount::ZERO), None);
    }

    #[test]
    fn serde_is_transparent() {
        let a = Amount::from_u128(255);
        let Ok(json) = serde_json::to_string(&a) else {
            panic!("serialize");
        };
        let Ok(back) = serde_json::from_str::<Amount>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, a);
    }
}
