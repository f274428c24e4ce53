//! Unified error types for the exchange.
//!
//! Every fallible operation in the crate returns [`ExchangeError`], so a
//! caller sees validation, registry, economic, authorization and ledger
//! faults through a single enum. Each variant carries the addresses or
//! amounts needed to diagnose the failure.

use alloy_primitives::Address;

use crate::domain::{Amount, PairId, TokenAddress};

/// Convenience alias used throughout the crate.
pub type Result<T, E = ExchangeError> = core::result::Result<T, E>;

/// All faults the exchange can report.
///
/// Faults are synchronous and abort the whole operation: no state change
/// survives a returned error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    // -- Validation ---------------------------------------------------------
    /// Both sides of a pair are the same token.
    #[error("tokens are identical: {token}")]
    TokensIdentical {
        /// The duplicated token.
        token: TokenAddress,
    },

    /// A token or account argument is the zero address.
    #[error("zero address")]
    ZeroAddress,

    /// An amount argument is zero.
    #[error("amount must be non-zero")]
    ZeroAmount,

    /// A rate lies outside `[1, MAX_RATE_THRESHOLD]`.
    #[error("incorrect exchange rate: {rate}")]
    IncorrectExchangeRate {
        /// The rejected rate.
        rate: Amount,
    },

    /// A token reports more decimals than 256-bit arithmetic can scale.
    #[error("unsupported token precision: {decimals} decimals")]
    InvalidPrecision {
        /// The rejected decimal count.
        decimals: u8,
    },

    // -- Registry state -----------------------------------------------------
    /// A pool for this unordered pair is already registered.
    #[error("pool already exists: {pair_id}")]
    PoolAlreadyExists {
        /// Canonical id of the pair.
        pair_id: PairId,
    },

    /// No pool is registered for this unordered pair.
    #[error("pool not found: {pair_id}")]
    PoolNotFound {
        /// Canonical id of the pair.
        pair_id: PairId,
    },

    /// A token was used against a pool it does not belong to.
    #[error("token {token} is not part of pool {pair_id}")]
    TokenNotInPool {
        /// The foreign token.
        token: TokenAddress,
        /// The pool it was used against.
        pair_id: PairId,
    },

    // -- Economic -----------------------------------------------------------
    /// One leg of the trade normalizes to zero raw units (dust).
    #[error("impossible operation: raw amount in {raw_amount_in}, raw amount out {raw_amount_out}")]
    ImpossibleOperation {
        /// Input leg in the input token's native decimals.
        raw_amount_in: Amount,
        /// Output leg in the output token's native decimals.
        raw_amount_out: Amount,
    },

    /// A party cannot cover its leg of the trade.
    #[error("insufficient balance of {token} for {holder}: required {required}, available {available}")]
    InsufficientBalance {
        /// Token being checked.
        token: TokenAddress,
        /// Account whose balance is short.
        holder: Address,
        /// Raw amount needed.
        required: Amount,
        /// Raw amount held.
        available: Amount,
    },

    // -- Authorization ------------------------------------------------------
    /// The caller is not the owner.
    #[error("unauthorized caller: {caller}")]
    Unauthorized {
        /// The rejected caller.
        caller: Address,
    },

    /// The exchange is paused.
    #[error("exchange is paused")]
    Paused,

    /// The exchange is not paused.
    #[error("exchange is not paused")]
    NotPaused,

    /// A settlement was entered while another is in flight.
    #[error("reentrant call")]
    ReentrantCall,

    // -- Arithmetic ---------------------------------------------------------
    /// An intermediate result exceeds 256 bits.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// An intermediate result would go negative.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    // -- Token ledger -------------------------------------------------------
    /// The ledger has no record of this token.
    #[error("unknown token: {token}")]
    UnknownToken {
        /// The unregistered token.
        token: TokenAddress,
    },

    /// `transfer_from` exceeds the allowance granted by the holder.
    #[error("insufficient allowance of {token} from {holder} to {spender}: required {required}, available {available}")]
    InsufficientAllowance {
        /// Token being pulled.
        token: TokenAddress,
        /// Account whose tokens are pulled.
        holder: Address,
        /// Account pulling the tokens.
        spender: Address,
        /// Raw amount needed.
        required: Amount,
        /// Raw amount approved.
        available: Amount,
    },

    /// The token rejected a transfer.
    #[error("transfer of {token} failed: {reason}")]
    TransferFailed {
        /// Token that failed.
        token: TokenAddress,
        /// Why the token refused.
        reason: &'static str,
    },
}
