//! Pool store keyed by canonical pair id.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::access::OwnerCap;
use crate::domain::{Amount, DirectionalRates, PairId, Pool, TokenAddress, TokenPair};
use crate::error::{ExchangeError, Result};

/// Sole owner of all [`Pool`] records.
///
/// Constructed once, mutated only through [`add_pool`](Self::add_pool) and
/// [`update_rate`](Self::update_rate), never reset. Pools are never
/// removed. Both mutators demand an [`OwnerCap`].
#[derive(Debug, Clone, Default)]
pub struct PoolRegistry {
    pools: HashMap<PairId, Pool>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new pool for the unordered pair `(token_a, token_b)`.
    ///
    /// `rate_a_to_b` prices selling `token_a`, `rate_b_to_a` prices
    /// selling `token_b`; both are re-oriented onto the canonical pair.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::TokensIdentical`] / [`ExchangeError::ZeroAddress`]
    ///   for malformed pairs.
    /// - [`ExchangeError::PoolAlreadyExists`] if the pair is registered.
    /// - [`ExchangeError::IncorrectExchangeRate`] for out-of-range rates.
    pub fn add_pool(
        &mut self,
        cap: &OwnerCap,
        token_a: TokenAddress,
        token_b: TokenAddress,
        rate_a_to_b: Amount,
        rate_b_to_a: Amount,
    ) -> Result<Pool> {
        let pair = TokenPair::new(token_a, token_b)?;
        if self.pools.contains_key(&pair.id()) {
            return Err(ExchangeError::PoolAlreadyExists { pair_id: pair.id() });
        }
        let rates = DirectionalRates::resolve(token_a, &pair, rate_a_to_b, rate_b_to_a)?;

        let pool = Pool::new(pair, rates);
        self.pools.insert(pair.id(), pool);
        info!(
            pair_id = %pair.id(),
            zeroth = %pair.zeroth(),
            first = %pair.first(),
            by = %cap.caller(),
            "pool added"
        );
        Ok(pool)
    }

    /// Overwrites both rates of an existing pool.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::TokensIdentical`] / [`ExchangeError::ZeroAddress`]
    ///   for malformed pairs.
    /// - [`ExchangeError::PoolNotFound`] if the pair is not registered.
    /// - [`ExchangeError::IncorrectExchangeRate`] for out-of-range rates.
    pub fn update_rate(
        &mut self,
        cap: &OwnerCap,
        token_a: TokenAddress,
        token_b: TokenAddress,
        rate_a_to_b: Amount,
        rate_b_to_a: Amount,
    ) -> Result<Pool> {
        let pair = TokenPair::new(token_a, token_b)?;
        let pool = self
            .pools
            .get_mut(&pair.id())
            .ok_or(ExchangeError::PoolNotFound { pair_id: pair.id() })?;
        let rates = DirectionalRates::resolve(token_a, &pair, rate_a_to_b, rate_b_to_a)?;

        pool.set_rates(rates);
        info!(
            pair_id = %pair.id(),
            zeroth_to_first = %rates.zeroth_to_first(),
            first_to_zeroth = %rates.first_to_zeroth(),
            by = %cap.caller(),
            "pool rates updated"
        );
        Ok(*pool)
    }

    /// Looks up a pool by id.
    #[must_use]
    pub fn get_pool(&self, pair_id: &PairId) -> Option<Pool> {
        let pool = self.pools.get(pair_id).copied();
        if pool.is_none() {
            debug!(%pair_id, "pool lookup miss");
        }
        pool
    }

    /// Looks up the pool for an unordered token pair.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::TokensIdentical`] / [`ExchangeError::ZeroAddress`]
    ///   for malformed pairs.
    /// - [`ExchangeError::PoolNotFound`] if the pair is not registered.
    pub fn find(&self, token_a: TokenAddress, token_b: TokenAddress) -> Result<Pool> {
        let pair = TokenPair::new(token_a, token_b)?;
        self.get_pool(&pair.id())
            .ok_or(ExchangeError::PoolNotFound { pair_id: pair.id() })
    }

    /// Ids of every registered pool, in ascending order.
    #[must_use]
    pub fn pool_ids(&self) -> Vec<PairId> {
        let mut ids: Vec<PairId> = self.pools.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use alloy_primitives::Address;

    use super::*;
    use crate::access::OwnerGate;
    use crate::domain::MAX_RATE_THRESHOLD;

    const OWNER: Address = Address::repeat_byte(0x01);
    const TWO: u128 = 2_000_000_000_000_000_000;
    const HALF: u128 = 500_000_000_000_000_000;

    fn cap() -> OwnerCap {
        let Ok(gate) = OwnerGate::new(OWNER) else {
            panic!("valid owner");
        };
        let Ok(cap) = gate.require_owner(&OWNER) else {
            panic!("owner cap");
        };
        cap
    }

    fn aa() -> TokenAddress {
        TokenAddress::repeat_byte(0xAA)
    }

    fn bb() -> TokenAddress {
        TokenAddress::repeat_byte(0xBB)
    }

    fn seeded() -> PoolRegistry {
        let mut reg = PoolRegistry::new();
        let Ok(_) = reg.add_pool(&cap(), aa(), bb(), Amount::from_u128(TWO), Amount::from_u128(HALF))
        else {
            panic!("add pool");
        };
        reg
    }

    #[test]
    fn add_then_lookup() {
        let reg = seeded();
        assert_eq!(reg.len(), 1);
        let Ok(pool) = reg.find(bb(), aa()) else {
            panic!("expected pool");
        };
        assert_eq!(pool.token_zeroth(), aa());
        assert_eq!(pool.rates().zeroth_to_first().get(), Amount::from_u128(TWO));
        assert_eq!(reg.get_pool(&pool.pair_id()), Some(pool));
    }

    #[test]
    fn add_twice_in_either_order_fails() {
        let mut reg = seeded();
        let Err(e) = reg.add_pool(&cap(), bb(), aa(), Amount::from_u128(1), Amount::from_u128(1))
        else {
            panic!("expected Err");
        };
        let Ok(pair) = TokenPair::new(aa(), bb()) else {
            panic!("valid pair");
        };
        assert_eq!(e, ExchangeError::PoolAlreadyExists { pair_id: pair.id() });
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn update_missing_pool_fails() {
        let mut reg = PoolRegistry::new();
        let Err(ExchangeError::PoolNotFound { .. }) =
            reg.update_rate(&cap(), aa(), bb(), Amount::from_u128(1), Amount::from_u128(1))
        else {
            panic!("expected PoolNotFound");
        };
        assert!(reg.is_empty());
    }

    #[test]
    fn update_reorients_rates() {
        let mut reg = seeded();
        // caller names the first token as A this time
        let Ok(pool) =
            reg.update_rate(&cap(), bb(), aa(), Amount::from_u128(7), Amount::from_u128(9))
        else {
            panic!("expected Ok");
        };
        assert_eq!(pool.rates().zeroth_to_first().get(), Amount::from_u128(9));
        assert_eq!(pool.rates().first_to_zeroth().get(), Amount::from_u128(7));
    }

    #[test]
    fn invalid_rate_leaves_registry_untouched() {
        let mut reg = seeded();
        let over = Amount::new(MAX_RATE_THRESHOLD + alloy_primitives::U256::from(1u8));
        assert!(reg.update_rate(&cap(), aa(), bb(), over, Amount::from_u128(1)).is_err());
        let Ok(pool) = reg.find(aa(), bb()) else {
            panic!("expected pool");
        };
        assert_eq!(pool.rates().zeroth_to_first().get(), Amount::from_u128(TWO));

        let cc = TokenAddress::repeat_byte(0xCC);
        assert!(reg.add_pool(&cap(), aa(), cc, over, Amount::from_u128(1)).is_err());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn pool_ids_sorted() {
        let mut reg = seeded();
        let cc = TokenAddress::repeat_byte(0xCC);
        let Ok(_) = reg.add_pool(&cap(), aa(), cc, Amount::from_u128(1), Amount::from_u128(1))
        else {
            panic!("add pool");
        };
        let ids = reg.pool_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids[0] < ids[1]);
    }
}
