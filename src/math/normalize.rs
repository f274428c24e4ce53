//! Conversion from internal 18-decimal amounts to token-native amounts.
//!
//! | Token decimals | Operation |
//! |----------------|-----------|
//! | `== 18` | identity |
//! | `< 18` | floor-divide by `10^(18 − d)` |
//! | `> 18` | multiply by `10^(d − 18)` |
//!
//! Precision loss always rounds toward zero; there is no rounding-up path.

use core::cmp::Ordering;

use super::fixed_point::{pow10, INTERNAL_DECIMALS};
use crate::domain::{Amount, Decimals};
use crate::error::{ExchangeError, Result};

/// Converts `scaled` (18 decimals) into a raw amount with `decimals` places.
///
/// # Examples
///
/// ```
/// use rate_exchange::domain::{Amount, Decimals};
/// use rate_exchange::math::to_raw_amount;
///
/// let one = Amount::from_u128(1_000_000_000_000_000_000);
/// let six = Decimals::new(6).expect("valid");
/// assert_eq!(to_raw_amount(one, six).expect("fits"), Amount::from_u128(1_000_000));
/// ```
///
/// # Errors
///
/// Returns [`ExchangeError::Overflow`] if scaling up exceeds 256 bits.
pub fn to_raw_amount(scaled: Amount, decimals: Decimals) -> Result<Amount> {
    let d = decimals.get();
    match d.cmp(&INTERNAL_DECIMALS) {
        Ordering::Equal => Ok(scaled),
        Ordering::Less => {
            let factor = pow10(INTERNAL_DECIMALS - d)
                .ok_or(ExchangeError::Overflow("decimal scale factor"))?;
            scaled
                .checked_div(&Amount::new(factor))
                .ok_or(ExchangeError::DivisionByZero)
        }
        Ordering::Greater => {
            let factor = pow10(d - INTERNAL_DECIMALS)
                .ok_or(ExchangeError::Overflow("decimal scale factor"))?;
            scaled
                .checked_mul(&Amount::new(factor))
                .ok_or(ExchangeError::Overflow("decimal scale-up"))
        }
    }
}
