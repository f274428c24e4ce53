//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait turns the `Option`-returning checked
//! operations on [`Amount`] into [`ExchangeError`] results, so callers can
//! propagate with `?`.
//!
//! # Examples
//!
//! ```
//! use rate_exchange::domain::Amount;
//! use rate_exchange::math::CheckedArithmetic;
//!
//! let a = Amount::from_u128(100);
//! let b = Amount::from_u128(200);
//! assert!(a.safe_add(&b).is_ok());
//! assert!(a.safe_sub(&b).is_err());
//! ```

use crate::domain::Amount;
use crate::error::ExchangeError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Overflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, ExchangeError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, ExchangeError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Overflow`] on overflow.
    fn safe_mul(&self, other: &Self) -> Result<Self, ExchangeError>;

    /// Floor division.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self) -> Result<Self, ExchangeError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, ExchangeError> {
        self.checked_add(other)
            .ok_or(ExchangeError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, ExchangeError> {
        self.checked_sub(other)
            .ok_or(ExchangeError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, ExchangeError> {
        self.checked_mul(other)
            .ok_or(ExchangeError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self) -> Result<Self, ExchangeError> {
        self.checked_div(other).ok_or(ExchangeError::DivisionByZero)
    }
}
