//! Core trait abstractions at the exchange's external seams.
//!
//! The engine never talks to tokens or to the ownership/pause scaffolding
//! directly: it goes through [`TokenLedger`] for balances and transfers,
//! and [`AccessControl`] for capability checks.

mod access_control;
mod token_ledger;

pub use access_control::AccessControl;
pub use token_ledger::{Checkpoint, TokenLedger};
