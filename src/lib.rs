//! # Rate Exchange
//!
//! Constant-rate, multi-pool token exchange: a registry of trading pairs,
//! each priced by two owner-set directional rates, settled against
//! liquidity held in the exchange's own custody account.
//!
//! There is no bonding curve and no LP accounting: a swap of `amount_in`
//! returns `floor(amount_in × rate / 10^18)`, normalized to each token's
//! native decimals, or fails without side effects.
//!
//! # Quick Start
//!
//! ```rust
//! use alloy_primitives::Address;
//! use rate_exchange::prelude::*;
//!
//! let owner = Address::repeat_byte(0x01);
//! let custody = Address::repeat_byte(0x02);
//! let trader = Address::repeat_byte(0x03);
//! let usdc = TokenAddress::repeat_byte(0xAA);
//! let dai = TokenAddress::repeat_byte(0xBB);
//!
//! // 1. A ledger with a 6-decimal and an 18-decimal token
//! let mut ledger = InMemoryLedger::new();
//! ledger.register_token(usdc, 6).expect("listed");
//! ledger.register_token(dai, 18).expect("listed");
//! ledger.mint(&usdc, &trader, Amount::from_u128(50_000_000)).expect("minted");
//! ledger
//!     .mint(&dai, &custody, Amount::from_u128(1_000_000_000_000_000_000_000))
//!     .expect("minted");
//! ledger.approve(&usdc, &trader, &custody, Amount::MAX).expect("approved");
//!
//! // 2. An exchange with a 1:1 pool
//! let config = ExchangeConfig::new(owner, custody).expect("valid config");
//! let mut exchange = Exchange::new(&config, ledger).expect("exchange");
//! let one = Amount::from_u128(1_000_000_000_000_000_000);
//! exchange.add_pool(&owner, usdc, dai, one, one).expect("pool added");
//!
//! // 3. Sell 25 USDC (expressed in 18-decimal units)
//! let plan = exchange
//!     .swap(&trader, usdc, dai, Amount::from_u128(25_000_000_000_000_000_000))
//!     .expect("swap settled");
//! assert_eq!(plan.raw_amount_in(), Amount::from_u128(25_000_000));
//! assert_eq!(plan.raw_amount_out(), Amount::from_u128(25_000_000_000_000_000_000));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Exchange    │  swap / quote / withdraw / add_pool / update_rate
//! └──────┬───────┘
//!        │ OwnerGate + ReentrancyGuard
//!        ▼
//! ┌──────────────┐      ┌──────────────┐
//! │ PoolRegistry  │      │  TokenLedger  │  balances, transfers, journal
//! └──────┬───────┘      └──────────────┘
//!        │ SettlementPlan
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  TokenPair, PairId, ExchangeRate, Decimals, Amount
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`TokenPair`](domain::TokenPair), [`ExchangeRate`](domain::ExchangeRate), etc. |
//! | [`math`] | Checked fixed-point arithmetic and decimal normalization |
//! | [`traits`] | Seams: [`TokenLedger`](traits::TokenLedger), [`AccessControl`](traits::AccessControl) |
//! | [`config`] | Validated blueprints: [`ExchangeConfig`](config::ExchangeConfig), [`PoolConfig`](config::PoolConfig) |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry), the sole owner of pool records |
//! | [`access`] | [`OwnerGate`](access::OwnerGate) capabilities and the [`ReentrancyGuard`](access::ReentrancyGuard) |
//! | [`engine`] | [`Exchange`](engine::Exchange) and [`SettlementPlan`](engine::SettlementPlan) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger), a journaled token ledger |
//! | [`events`] | [`ExchangeEvent`](events::ExchangeEvent) notifications and the [`EventLog`](events::EventLog) |
//! | [`error`] | [`ExchangeError`](error::ExchangeError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod access;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod events;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod registry;
pub mod traits;
