//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use rate_exchange::prelude::*;
//! ```

pub use crate::domain::{Amount, Decimals, ExchangeRate, PairId, Pool, TokenAddress, TokenPair};

pub use crate::traits::{AccessControl, TokenLedger};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{ExchangeConfig, PoolConfig};

pub use crate::error::{ExchangeError, Result};

pub use crate::engine::{Exchange, SettlementPlan};

pub use crate::events::{EventLog, ExchangeEvent};

pub use crate::ledger::InMemoryLedger;
