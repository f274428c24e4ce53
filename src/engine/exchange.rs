//! The fixed-rate exchange: registry, access gate and settlement together.

use alloy_primitives::Address;
use tracing::{debug, info, warn};

use crate::access::{OwnerGate, ReentrancyGuard};
use crate::config::ExchangeConfig;
use crate::domain::{resolve_pair_id, Amount, Decimals, PairId, Pool, TokenAddress};
use crate::error::{ExchangeError, Result};
use crate::events::{EventLog, ExchangeEvent};
use crate::registry::PoolRegistry;
use crate::traits::{AccessControl, TokenLedger};

use super::SettlementPlan;

/// A multi-pool, constant-rate token exchange.
///
/// Liquidity sits in the `custody` account of the ledger `L`. Traders sell
/// one side of a registered pair at the owner-set directional rate; the
/// owner registers pools, updates rates, withdraws custody funds and
/// toggles the global pause.
///
/// Every mutating call is all-or-nothing: on error the registry, gate,
/// ledger and event log are left exactly as they were.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use rate_exchange::prelude::*;
///
/// let owner = Address::repeat_byte(0x01);
/// let custody = Address::repeat_byte(0x02);
/// let trader = Address::repeat_byte(0x03);
/// let (aa, bb) = (TokenAddress::repeat_byte(0xAA), TokenAddress::repeat_byte(0xBB));
/// let one = 1_000_000_000_000_000_000u128;
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.register_token(aa, 18).expect("listed");
/// ledger.register_token(bb, 18).expect("listed");
/// ledger.mint(&aa, &trader, Amount::from_u128(10 * one)).expect("minted");
/// ledger.mint(&bb, &custody, Amount::from_u128(100 * one)).expect("minted");
/// ledger.approve(&aa, &trader, &custody, Amount::MAX).expect("approved");
///
/// let config = ExchangeConfig::new(owner, custody).expect("valid config");
/// let mut exchange = Exchange::new(&config, ledger).expect("exchange");
/// exchange
///     .add_pool(&owner, aa, bb, Amount::from_u128(2 * one), Amount::from_u128(one / 2))
///     .expect("pool");
///
/// let plan = exchange.swap(&trader, aa, bb, Amount::from_u128(10 * one)).expect("swap");
/// assert_eq!(plan.amount_out(), Amount::from_u128(20 * one));
/// ```
#[derive(Debug)]
pub struct Exchange<L> {
    custody: Address,
    registry: PoolRegistry,
    gate: OwnerGate,
    guard: ReentrancyGuard,
    events: EventLog,
    ledger: L,
}

impl<L: TokenLedger> Exchange<L> {
    /// Builds an exchange from a validated configuration, registering its
    /// start-up pools and then applying its initial pause flag.
    ///
    /// # Errors
    ///
    /// Any [`ExchangeConfig::validate`] error.
    pub fn new(config: &ExchangeConfig, ledger: L) -> Result<Self> {
        config.validate()?;
        let mut exchange = Self {
            custody: config.custody(),
            registry: PoolRegistry::new(),
            gate: OwnerGate::new(config.owner())?,
            guard: ReentrancyGuard::new(),
            events: EventLog::new(),
            ledger,
        };

        let cap = exchange.gate.require_owner(&config.owner())?;
        for pool in config.pools() {
            let pool = exchange.registry.add_pool(
                &cap,
                pool.token_a(),
                pool.token_b(),
                pool.rate_a_to_b(),
                pool.rate_b_to_a(),
            )?;
            exchange.emit_pool_added(&pool);
        }
        if config.paused() {
            exchange.gate.set_paused(true);
        }

        info!(
            owner = %config.owner(),
            custody = %config.custody(),
            pools = exchange.registry.len(),
            paused = config.paused(),
            "exchange initialized"
        );
        Ok(exchange)
    }

    // -- Administration -------------------------------------------------------

    /// Registers a pool for the unordered pair `(token_a, token_b)`.
    ///
    /// Emits [`ExchangeEvent::PoolAdded`] then [`ExchangeEvent::RateUpdated`].
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::Unauthorized`] / [`ExchangeError::Paused`].
    /// - [`ExchangeError::TokensIdentical`] / [`ExchangeError::ZeroAddress`].
    /// - [`ExchangeError::PoolAlreadyExists`].
    /// - [`ExchangeError::IncorrectExchangeRate`].
    pub fn add_pool(
        &mut self,
        caller: &Address,
        token_a: TokenAddress,
        token_b: TokenAddress,
        rate_a_to_b: Amount,
        rate_b_to_a: Amount,
    ) -> Result<PairId> {
        let cap = self.gate.authorize_admin(caller)?;
        let pool = self
            .registry
            .add_pool(&cap, token_a, token_b, rate_a_to_b, rate_b_to_a)?;
        self.emit_pool_added(&pool);
        Ok(pool.pair_id())
    }

    /// Overwrites both rates of an existing pool.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::Unauthorized`] / [`ExchangeError::Paused`].
    /// - [`ExchangeError::TokensIdentical`] / [`ExchangeError::ZeroAddress`].
    /// - [`ExchangeError::PoolNotFound`].
    /// - [`ExchangeError::IncorrectExchangeRate`].
    pub fn update_rate(
        &mut self,
        caller: &Address,
        token_a: TokenAddress,
        token_b: TokenAddress,
        rate_a_to_b: Amount,
        rate_b_to_a: Amount,
    ) -> Result<()> {
        let cap = self.gate.authorize_admin(caller)?;
        let pool = self
            .registry
            .update_rate(&cap, token_a, token_b, rate_a_to_b, rate_b_to_a)?;
        self.emit_rate_updated(&pool);
        Ok(())
    }

    /// Sends `amount` raw units of `token` from custody to the owner.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::ReentrantCall`] during an in-flight settlement.
    /// - [`ExchangeError::Unauthorized`] / [`ExchangeError::Paused`].
    /// - [`ExchangeError::ZeroAddress`] / [`ExchangeError::ZeroAmount`].
    /// - [`ExchangeError::InsufficientBalance`] if custody holds less.
    /// - Any ledger fault, after rolling the ledger back.
    pub fn withdraw(&mut self, caller: &Address, token: TokenAddress, amount: Amount) -> Result<()> {
        let _entered = self.guard.enter()?;
        let cap = self.gate.authorize_admin(caller)?;
        if token.is_zero() {
            return Err(ExchangeError::ZeroAddress);
        }
        if amount.is_zero() {
            return Err(ExchangeError::ZeroAmount);
        }
        self.require_balance(&token, &self.custody, amount)?;

        let to = cap.caller();
        let checkpoint = self.ledger.checkpoint();
        if let Err(e) = self.ledger.transfer(&token, &self.custody, &to, amount) {
            self.ledger.revert_to(checkpoint);
            warn!(%token, %amount, error = %e, "withdrawal rolled back");
            return Err(e);
        }
        self.ledger.commit(checkpoint);

        info!(%token, %to, %amount, "custody withdrawal");
        self.events.push(ExchangeEvent::Withdrawn { token, to, amount });
        Ok(())
    }

    /// Halts swaps and administrative mutations.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::Unauthorized`], or [`ExchangeError::Paused`] if
    /// already paused.
    pub fn pause(&mut self, caller: &Address) -> Result<()> {
        let cap = self.gate.require_owner(caller)?;
        self.gate.pause(&cap)?;
        self.events.push(ExchangeEvent::Paused { by: cap.caller() });
        Ok(())
    }

    /// Resumes a paused exchange.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::Unauthorized`], or [`ExchangeError::NotPaused`] if
    /// not paused.
    pub fn unpause(&mut self, caller: &Address) -> Result<()> {
        let cap = self.gate.require_owner(caller)?;
        self.gate.unpause(&cap)?;
        self.events.push(ExchangeEvent::Unpaused { by: cap.caller() });
        Ok(())
    }

    /// Hands the owner role to `new_owner`. Allowed while paused.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::Unauthorized`] or [`ExchangeError::ZeroAddress`].
    pub fn transfer_ownership(&mut self, caller: &Address, new_owner: Address) -> Result<()> {
        let cap = self.gate.require_owner(caller)?;
        let previous = self.gate.transfer_ownership(&cap, new_owner)?;
        self.events
            .push(ExchangeEvent::OwnershipTransferred { previous, new_owner });
        Ok(())
    }

    // -- Trading ---------------------------------------------------------------

    /// Sells `amount_in` (18-decimal units) of `token_in` for `token_out`.
    ///
    /// The custody account releases `raw_amount_out` of `token_out` to
    /// `caller`, then pulls `raw_amount_in` of `token_in` from `caller`
    /// using the allowance `caller` granted to custody. Either leg failing
    /// rolls both back.
    ///
    /// # Errors
    ///
    /// In check order:
    ///
    /// 1. [`ExchangeError::ReentrantCall`]
    /// 2. [`ExchangeError::Paused`]
    /// 3. [`ExchangeError::TokensIdentical`] / [`ExchangeError::ZeroAddress`]
    /// 4. [`ExchangeError::PoolNotFound`]
    /// 5. [`ExchangeError::ZeroAmount`]
    /// 6. [`ExchangeError::Overflow`] / [`ExchangeError::ImpossibleOperation`]
    /// 7. [`ExchangeError::InsufficientBalance`] (trader first, then custody)
    /// 8. any ledger fault raised by the transfers
    pub fn swap(
        &mut self,
        caller: &Address,
        token_in: TokenAddress,
        token_out: TokenAddress,
        amount_in: Amount,
    ) -> Result<SettlementPlan> {
        let _entered = self.guard.enter()?;
        self.gate.require_not_paused()?;

        let plan = self.plan(token_in, token_out, amount_in)?;
        self.require_balance(&token_in, caller, plan.raw_amount_in())?;
        self.require_balance(&token_out, &self.custody, plan.raw_amount_out())?;

        let checkpoint = self.ledger.checkpoint();
        if let Err(e) = self.settle(caller, &plan) {
            self.ledger.revert_to(checkpoint);
            warn!(
                %caller,
                pair_id = %plan.pair_id(),
                error = %e,
                "swap settlement rolled back"
            );
            return Err(e);
        }
        self.ledger.commit(checkpoint);

        info!(
            %caller,
            %token_in,
            %token_out,
            amount_in = %plan.amount_in(),
            amount_out = %plan.amount_out(),
            "swap settled"
        );
        self.events.push(ExchangeEvent::Swapped {
            caller: *caller,
            token_in,
            token_out,
            amount_in: plan.amount_in(),
            amount_out: plan.amount_out(),
        });
        Ok(plan)
    }

    /// Dry-runs [`swap`](Self::swap) up to the balance checks.
    ///
    /// Works while paused; touches no state.
    ///
    /// # Errors
    ///
    /// Steps 3 to 6 of [`swap`](Self::swap), plus
    /// [`ExchangeError::UnknownToken`] for tokens the ledger does not list.
    pub fn quote(
        &self,
        token_in: TokenAddress,
        token_out: TokenAddress,
        amount_in: Amount,
    ) -> Result<SettlementPlan> {
        self.plan(token_in, token_out, amount_in)
    }

    fn plan(
        &self,
        token_in: TokenAddress,
        token_out: TokenAddress,
        amount_in: Amount,
    ) -> Result<SettlementPlan> {
        let pool = self.registry.find(token_in, token_out)?;
        if amount_in.is_zero() {
            return Err(ExchangeError::ZeroAmount);
        }
        let decimals_in = Decimals::new(self.ledger.decimals(&token_in)?)?;
        let decimals_out = Decimals::new(self.ledger.decimals(&token_out)?)?;

        let plan = SettlementPlan::compute(&pool, token_in, amount_in, decimals_in, decimals_out)?;
        debug!(
            pair_id = %plan.pair_id(),
            rate = %plan.rate(),
            raw_amount_in = %plan.raw_amount_in(),
            raw_amount_out = %plan.raw_amount_out(),
            "settlement planned"
        );
        Ok(plan)
    }

    fn settle(&mut self, caller: &Address, plan: &SettlementPlan) -> Result<()> {
        self.ledger.transfer(
            &plan.token_out(),
            &self.custody,
            caller,
            plan.raw_amount_out(),
        )?;
        self.ledger.transfer_from(
            &plan.token_in(),
            &self.custody,
            caller,
            &self.custody,
            plan.raw_amount_in(),
        )
    }

    fn require_balance(&self, token: &TokenAddress, holder: &Address, required: Amount) -> Result<()> {
        let available = self.ledger.balance_of(token, holder)?;
        if available < required {
            return Err(ExchangeError::InsufficientBalance {
                token: *token,
                holder: *holder,
                required,
                available,
            });
        }
        Ok(())
    }

    // -- Queries ---------------------------------------------------------------

    /// Canonical `(pair_id, zeroth, first)` for two tokens, whether or not a
    /// pool exists.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::TokensIdentical`] or [`ExchangeError::ZeroAddress`].
    pub fn get_pool_id(
        &self,
        token_a: TokenAddress,
        token_b: TokenAddress,
    ) -> Result<(PairId, TokenAddress, TokenAddress)> {
        resolve_pair_id(token_a, token_b)
    }

    /// Converts an 18-decimal `price` into a token's native units.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::InvalidPrecision`] or [`ExchangeError::Overflow`].
    pub fn get_raw_amount(&self, price: Amount, decimals: u8) -> Result<Amount> {
        Decimals::new(decimals)?.to_raw_amount(price)
    }

    /// Snapshot of a registered pool.
    #[must_use]
    pub fn get_pool(&self, pair_id: &PairId) -> Option<Pool> {
        self.registry.get_pool(pair_id)
    }

    /// Ids of every registered pool, ascending.
    #[must_use]
    pub fn pool_ids(&self) -> Vec<PairId> {
        self.registry.pool_ids()
    }

    /// Whether the exchange is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    /// The current owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.gate.owner()
    }

    /// The custody account holding pooled liquidity.
    #[must_use]
    pub const fn custody(&self) -> Address {
        self.custody
    }

    /// Committed events, oldest first.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The underlying ledger.
    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable access to the ledger, e.g. for funding accounts.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// A handle sharing this exchange's in-flight flag.
    #[must_use]
    pub fn reentrancy_guard(&self) -> ReentrancyGuard {
        self.guard.clone()
    }

    fn emit_pool_added(&mut self, pool: &Pool) {
        self.events.push(ExchangeEvent::PoolAdded {
            pair_id: pool.pair_id(),
            token_zeroth: pool.token_zeroth(),
            token_first: pool.token_first(),
        });
        self.emit_rate_updated(pool);
    }

    fn emit_rate_updated(&mut self, pool: &Pool) {
        self.events.push(ExchangeEvent::RateUpdated {
            pair_id: pool.pair_id(),
            zeroth_to_first: pool.rates().zeroth_to_first(),
            first_to_zeroth: pool.rates().first_to_zeroth(),
        });
    }
}
