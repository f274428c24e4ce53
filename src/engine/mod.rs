//! Swap settlement: the [`Exchange`] facade and its pure [`SettlementPlan`].
//!
//! A swap flows through pair resolution, pool lookup, rate application and
//! decimal normalization (all captured in a [`SettlementPlan`]), then the
//! solvency checks and the two-legged ledger transfer.

mod exchange;
mod settlement;

#[cfg(test)]
mod proptest_properties;

pub use exchange::Exchange;
pub use settlement::SettlementPlan;
