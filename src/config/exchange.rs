//! Deployment configuration for an [`Exchange`](crate::engine::Exchange).

use std::collections::HashSet;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::PoolConfig;
use crate::error::{ExchangeError, Result};

/// Everything needed to bring an exchange up.
///
/// # Fields
///
/// - `owner`: the single identity allowed to administer the exchange.
/// - `custody`: the exchange's own account, holding pooled liquidity and
///   acting as `transfer_from` spender.
/// - `paused`: whether the exchange starts paused.
/// - `pools`: pools registered at start-up.
///
/// # Validation
///
/// - `owner` and `custody` must be non-zero.
/// - Every pool config must be valid, and no unordered pair may repeat.
///
/// # Examples
///
/// ```
/// use rate_exchange::config::ExchangeConfig;
///
/// let json = r#"{
///     "owner": "0x0101010101010101010101010101010101010101",
///     "custody": "0x0202020202020202020202020202020202020202",
///     "pools": [{
///         "token_a": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
///         "token_b": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
///         "rate_a_to_b": "0x1bc16d674ec80000",
///         "rate_b_to_a": "0x6f05b59d3b20000"
///     }]
/// }"#;
/// let config: ExchangeConfig = serde_json::from_str(json).expect("well-formed");
/// config.validate().expect("valid");
/// assert!(!config.paused());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    owner: Address,
    custody: Address,
    #[serde(default)]
    paused: bool,
    #[serde(default)]
    pools: Vec<PoolConfig>,
}

impl ExchangeConfig {
    /// Creates a validated, unpaused configuration without pools.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::ZeroAddress`] if either address is zero.
    pub fn new(owner: Address, custody: Address) -> Result<Self> {
        let config = Self {
            owner,
            custody,
            paused: false,
            pools: Vec::new(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Adds a start-up pool.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::PoolAlreadyExists`] if the pair repeats.
    pub fn with_pool(mut self, pool: PoolConfig) -> Result<Self> {
        self.pools.push(pool);
        self.validate()?;
        Ok(self)
    }

    /// Sets the initial pause flag.
    #[must_use]
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::ZeroAddress`] for a zero owner or custody.
    /// - Any [`PoolConfig::validate`] error.
    /// - [`ExchangeError::PoolAlreadyExists`] for a repeated pair.
    pub fn validate(&self) -> Result<()> {
        if self.owner == Address::ZERO || self.custody == Address::ZERO {
            return Err(ExchangeError::ZeroAddress);
        }
        let mut seen = HashSet::with_capacity(self.pools.len());
        for pool in &self.pools {
            let pair = pool.validate()?;
            if !seen.insert(pair.id()) {
                return Err(ExchangeError::PoolAlreadyExists { pair_id: pair.id() });
            }
        }
        Ok(())
    }

    /// The administering owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// The exchange's custody account.
    #[must_use]
    pub const fn custody(&self) -> Address {
        self.custody
    }

    /// Whether the exchange starts paused.
    #[must_use]
    pub const fn paused(&self) -> bool {
        self.paused
    }

    /// Start-up pools.
    #[must_use]
    pub fn pools(&self) -> &[PoolConfig] {
        &self.pools
    }
}
