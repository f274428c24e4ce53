//! Notifications emitted by committed exchange operations.
//!
//! The engine appends to an [`EventLog`] only after an operation has fully
//! succeeded, so the log never mentions a rolled-back call.

use alloy_primitives::Address;
use serde::Serialize;

use crate::domain::{Amount, ExchangeRate, PairId, TokenAddress};

/// One committed state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ExchangeEvent {
    /// A pool was registered.
    PoolAdded {
        /// Canonical id.
        pair_id: PairId,
        /// Lower-addressed token.
        token_zeroth: TokenAddress,
        /// Higher-addressed token.
        token_first: TokenAddress,
    },
    /// A pool's rates were set (on creation or update).
    RateUpdated {
        /// Canonical id.
        pair_id: PairId,
        /// Rate for selling the zeroth token.
        zeroth_to_first: ExchangeRate,
        /// Rate for selling the first token.
        first_to_zeroth: ExchangeRate,
    },
    /// A swap settled. Amounts are in 18-decimal internal units.
    Swapped {
        /// Trader.
        caller: Address,
        /// Token sold.
        token_in: TokenAddress,
        /// Token bought.
        token_out: TokenAddress,
        /// Scaled input amount.
        amount_in: Amount,
        /// Scaled output amount.
        amount_out: Amount,
    },
    /// The owner withdrew custody funds. Amount is raw.
    Withdrawn {
        /// Token withdrawn.
        token: TokenAddress,
        /// Recipient (the owner).
        to: Address,
        /// Raw amount.
        amount: Amount,
    },
    /// The exchange was paused.
    Paused {
        /// Owner that paused.
        by: Address,
    },
    /// The exchange was resumed.
    Unpaused {
        /// Owner that resumed.
        by: Address,
    },
    /// Ownership moved to a new address.
    OwnershipTransferred {
        /// Former owner.
        previous: Address,
        /// New owner.
        new_owner: Address,
    },
}

/// Append-only record of [`ExchangeEvent`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<ExchangeEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: ExchangeEvent) {
        self.entries.push(event);
    }

    /// All events in emission order.
    #[must_use]
    pub fn as_slice(&self) -> &[ExchangeEvent] {
        &self.entries
    }

    /// The most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&ExchangeEvent> {
        self.entries.last()
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over events in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &ExchangeEvent> {
        self.entries.iter()
    }
}
