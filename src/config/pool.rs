//! Configuration for a single fixed-rate pool.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, DirectionalRates, TokenAddress, TokenPair};
use crate::error::Result;

/// Blueprint for one pool, in the caller's "A → B" orientation.
///
/// # Validation
///
/// - The two tokens must be distinct and non-zero.
/// - Both rates must lie in `[1, MAX_RATE_THRESHOLD]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    token_a: TokenAddress,
    token_b: TokenAddress,
    rate_a_to_b: Amount,
    rate_b_to_a: Amount,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns the canonicalization or rate error that
    /// [`validate`](Self::validate) reports.
    pub fn new(
        token_a: TokenAddress,
        token_b: TokenAddress,
        rate_a_to_b: Amount,
        rate_b_to_a: Amount,
    ) -> Result<Self> {
        let config = Self {
            token_a,
            token_b,
            rate_a_to_b,
            rate_b_to_a,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the pair and both rates, returning the canonical pair.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::TokensIdentical`](crate::error::ExchangeError::TokensIdentical)
    ///   or [`ExchangeError::ZeroAddress`](crate::error::ExchangeError::ZeroAddress).
    /// - [`ExchangeError::IncorrectExchangeRate`](crate::error::ExchangeError::IncorrectExchangeRate).
    pub fn validate(&self) -> Result<TokenPair> {
        let pair = TokenPair::new(self.token_a, self.token_b)?;
        DirectionalRates::resolve(self.token_a, &pair, self.rate_a_to_b, self.rate_b_to_a)?;
        Ok(pair)
    }

    /// Token the rates are expressed from.
    #[must_use]
    pub const fn token_a(&self) -> TokenAddress {
        self.token_a
    }

    /// Counterpart token.
    #[must_use]
    pub const fn token_b(&self) -> TokenAddress {
        self.token_b
    }

    /// Rate for selling `token_a`.
    pub const fn rate_a_to_b(&self) -> Amount {
        self.rate_a_to_b
    }

    /// Rate for selling `token_b`.
    pub const fn rate_b_to_a(&self) -> Amount {
        self.rate_b_to_a
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ExchangeError;

    #[test]
    fn valid_config() {
        let cfg = PoolConfig::new(
            TokenAddress::repeat_byte(0xBB),
            TokenAddress::repeat_byte(0xAA),
            Amount::from_u128(1),
            Amount::from_u128(2),
        );
        let Ok(cfg) = cfg else {
            panic!("expected Ok");
        };
        let Ok(pair) = cfg.validate() else {
            panic!("expected Ok");
        };
        assert_eq!(pair.zeroth(), TokenAddress::repeat_byte(0xAA));
    }

    #[test]
    fn zero_rate_rejected() {
        let cfg = PoolConfig::new(
            TokenAddress::repeat_byte(0xAA),
            TokenAddress::repeat_byte(0xBB),
            Amount::ZERO,
            Amount::from_u128(2),
        );
        assert_eq!(cfg, Err(ExchangeError::IncorrectExchangeRate { rate: Amount::ZERO }));
    }

    #[test]
    fn identical_tokens_rejected() {
        let t = TokenAddress::repeat_byte(0xAA);
        let cfg = PoolConfig::new(t, t, Amount::from_u128(1), Amount::from_u128(1));
        assert_eq!(cfg, Err(ExchangeError::TokensIdentical { token: t }));
    }
}
