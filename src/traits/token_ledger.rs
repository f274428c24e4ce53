//! Token asset interface consumed by the settlement engine.
//!
//! [`TokenLedger`] models every token the exchange touches as one
//! journaled ledger: it answers balance and decimals queries and executes
//! `transfer` / `transfer_from`. Any error it returns aborts the calling
//! operation.
//!
//! # Atomicity
//!
//! The engine brackets every multi-transfer operation with
//! [`TokenLedger::checkpoint`] and closes it with either
//! [`TokenLedger::commit`] on success or [`TokenLedger::revert_to`] on
//! failure. Implementations must restore every balance and allowance
//! written since the checkpoint on revert, so a failed settlement leaves no
//! partial transfer behind. Once the outermost checkpoint is closed the
//! journal behind it can be discarded.
//!
//! A failing `transfer` or `transfer_from` must not write anything itself.

use alloy_primitives::Address;

use crate::domain::{Amount, TokenAddress};
use crate::error::ExchangeError;

/// Opaque journal position returned by [`TokenLedger::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checkpoint(usize);

impl Checkpoint {
    /// Wraps a journal length.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the journal length this checkpoint refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.0
    }
}

/// Balances, decimals and transfers for a set of tokens.
///
/// All amounts are raw amounts in each token's native precision.
///
/// # Errors
///
/// Methods that can fail return [`ExchangeError`]. Common variants:
///
/// - [`ExchangeError::UnknownToken`] for tokens the ledger does not know
/// - [`ExchangeError::InsufficientBalance`] when the sender is short
/// - [`ExchangeError::InsufficientAllowance`] when `transfer_from` exceeds
///   the approval
/// - [`ExchangeError::TransferFailed`] when the token refuses the transfer
pub trait TokenLedger {
    /// Returns the decimal places of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::UnknownToken`] if `token` is not listed.
    fn decimals(&self, token: &TokenAddress) -> Result<u8, ExchangeError>;

    /// Returns the raw balance of `holder` in `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::UnknownToken`] if `token` is not listed.
    fn balance_of(&self, token: &TokenAddress, holder: &Address) -> Result<Amount, ExchangeError>;

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// See the trait-level list.
    fn transfer(
        &mut self,
        token: &TokenAddress,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), ExchangeError>;

    /// Moves `amount` of `token` from `holder` to `to` on behalf of
    /// `spender`, consuming `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// See the trait-level list.
    fn transfer_from(
        &mut self,
        token: &TokenAddress,
        spender: &Address,
        holder: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), ExchangeError>;

    /// Marks the current journal position.
    fn checkpoint(&mut self) -> Checkpoint;

    /// Undoes every write made since `checkpoint` and closes it.
    fn revert_to(&mut self, checkpoint: Checkpoint);

    /// Keeps every write made since `checkpoint` and closes it.
    fn commit(&mut self, checkpoint: Checkpoint);
}
