//! Mapping caller-oriented rates onto the canonical pair orientation.

use serde::Serialize;

use super::{Amount, ExchangeRate, TokenAddress, TokenPair};
use crate::error::Result;

/// Both directional rates of a pool, in canonical orientation.
///
/// The two rates are always set together; there is no way to change one
/// without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DirectionalRates {
    zeroth_to_first: ExchangeRate,
    first_to_zeroth: ExchangeRate,
}

impl DirectionalRates {
    /// Resolves "A → B" / "B → A" rates against the canonical pair.
    ///
    /// If `token_a` is the pair's zeroth token, `rate_a_to_b` becomes the
    /// zeroth→first rate; otherwise the two are swapped.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::IncorrectExchangeRate`](crate::error::ExchangeError::IncorrectExchangeRate)
    /// if either resolved rate is outside `[1, MAX_RATE_THRESHOLD]`.
    pub fn resolve(
        token_a: TokenAddress,
        pair: &TokenPair,
        rate_a_to_b: Amount,
        rate_b_to_a: Amount,
    ) -> Result<Self> {
        let (rate_zeroth_to_first, rate_first_to_zeroth) =
            resolve_rates(token_a, pair.zeroth(), rate_a_to_b, rate_b_to_a)?;
        Ok(Self {
            zeroth_to_first: rate_zeroth_to_first,
            first_to_zeroth: rate_first_to_zeroth,
        })
    }

    /// Rate for selling the zeroth token.
    #[must_use]
    pub const fn zeroth_to_first(&self) -> ExchangeRate {
        self.zeroth_to_first
    }

    /// Rate for selling the first token.
    #[must_use]
    pub const fn first_to_zeroth(&self) -> ExchangeRate {
        self.first_to_zeroth
    }
}

/// Orients `(rate_a_to_b, rate_b_to_a)` as `(zeroth→first, first→zeroth)`.
///
/// # Errors
///
/// Returns [`ExchangeError::IncorrectExchangeRate`](crate::error::ExchangeError::IncorrectExchangeRate)
/// if either rate is outside `[1, MAX_RATE_THRESHOLD]`.
pub fn resolve_rates(
    token_a: TokenAddress,
    token_zeroth: TokenAddress,
    rate_a_to_b: Amount,
    rate_b_to_a: Amount,
) -> Result<(ExchangeRate, ExchangeRate)> {
    let (zeroth_to_first, first_to_zeroth) = if token_a == token_zeroth {
        (rate_a_to_b, rate_b_to_a)
    } else {
        (rate_b_to_a, rate_a_to_b)
    };
    Ok((
        ExchangeRate::new(zeroth_to_first)?,
        ExchangeRate::new(first_to_zeroth)?,
    ))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::MAX_RATE_THRESHOLD;
    use crate::error::ExchangeError;

    const TWO: u128 = 2_000_000_000_000_000_000;
    const HALF: u128 = 500_000_000_000_000_000;

    fn pair() -> TokenPair {
        let Ok(p) = TokenPair::new(TokenAddress::repeat_byte(0xAA), TokenAddress::repeat_byte(0xBB))
        else {
            panic!("valid pair");
        };
        p
    }

    #[test]
    fn token_a_is_zeroth_keeps_orientation() {
        let Ok(rates) = DirectionalRates::resolve(
            TokenAddress::repeat_byte(0xAA),
            &pair(),
            Amount::from_u128(TWO),
            Amount::from_u128(HALF),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(rates.zeroth_to_first().get(), Amount::from_u128(TWO));
        assert_eq!(rates.first_to_zeroth().get(), Amount::from_u128(HALF));
    }

    #[test]
    fn token_a_is_first_swaps_orientation() {
        let Ok(rates) = DirectionalRates::resolve(
            TokenAddress::repeat_byte(0xBB),
            &pair(),
            Amount::from_u128(TWO),
            Amount::from_u128(HALF),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(rates.zeroth_to_first().get(), Amount::from_u128(HALF));
        assert_eq!(rates.first_to_zeroth().get(), Amount::from_u128(TWO));
    }

    #[test]
    fn rejects_rate_over_threshold_on_either_side() {
        let over = Amount::new(MAX_RATE_THRESHOLD + alloy_primitives::U256::from(1u8));
        let a = TokenAddress::repeat_byte(0xAA);
        let z = pair().zeroth();
        assert_eq!(
            resolve_rates(a, z, over, Amount::from_u128(1)),
            Err(ExchangeError::IncorrectExchangeRate { rate: over })
        );
        assert_eq!(
            resolve_rates(a, z, Amount::from_u128(1), over),
            Err(ExchangeError::IncorrectExchangeRate { rate: over })
        );
    }

    #[test]
    fn rejects_zero_rate() {
        let a = TokenAddress::repeat_byte(0xAA);
        let r = resolve_rates(a, a, Amount::from_u128(TWO), Amount::ZERO);
        assert_eq!(r, Err(ExchangeError::IncorrectExchangeRate { rate: Amount::ZERO }));
    }
}
