//! A registered fixed-rate trading pair.

use serde::Serialize;

use super::{DirectionalRates, ExchangeRate, PairId, TokenAddress, TokenPair};
use crate::error::Result;

/// Pool state: the canonical pair and its two directional rates.
///
/// Pools are created and mutated only by the
/// [`PoolRegistry`](crate::registry::PoolRegistry); everyone else sees
/// copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pool {
    pair: TokenPair,
    rates: DirectionalRates,
}

impl Pool {
    pub(crate) const fn new(pair: TokenPair, rates: DirectionalRates) -> Self {
        Self { pair, rates }
    }

    pub(crate) fn set_rates(&mut self, rates: DirectionalRates) {
        self.rates = rates;
    }

    /// Registry key.
    #[must_use]
    pub const fn pair_id(&self) -> PairId {
        self.pair.id()
    }

    /// The canonical pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Lower-addressed token.
    #[must_use]
    pub const fn token_zeroth(&self) -> TokenAddress {
        self.pair.zeroth()
    }

    /// Higher-addressed token.
    #[must_use]
    pub const fn token_first(&self) -> TokenAddress {
        self.pair.first()
    }

    /// Both rates in canonical orientation.
    #[must_use]
    pub const fn rates(&self) -> DirectionalRates {
        self.rates
    }

    /// Rate to apply when selling `token_in`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::TokenNotInPool`](crate::error::ExchangeError::TokenNotInPool)
    /// if `token_in` is not one of the pool's tokens.
    pub fn rate_for(&self, token_in: &TokenAddress) -> Result<ExchangeRate> {
        // validates membership
        self.pair.other(token_in)?;
        if *token_in == self.pair.zeroth() {
            Ok(self.rates.zeroth_to_first())
        } else {
            Ok(self.rates.first_to_zeroth())
        }
    }
}
