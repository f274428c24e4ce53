//! Pure swap computation: rate selection, rate application, normalization.
//!
//! # Algorithm (selling `token_in`)
//!
//! 1. `amount_in == 0` → `ZeroAmount`
//! 2. `rate = zeroth→first` if `token_in` is the zeroth token, else `first→zeroth`
//! 3. `amount_out = floor(amount_in × rate / 10^18)`
//! 4. `raw_amount_in = to_raw(amount_in, decimals_in)`,
//!    `raw_amount_out = to_raw(amount_out, decimals_out)`
//! 5. either raw amount `== 0` → `ImpossibleOperation`
//!
//! Every step truncates; nothing rounds up.

use serde::Serialize;

use crate::domain::{Amount, Decimals, ExchangeRate, PairId, Pool, TokenAddress};
use crate::error::{ExchangeError, Result};

/// The fully computed legs of one swap, before any balance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettlementPlan {
    pair_id: PairId,
    token_in: TokenAddress,
    token_out: TokenAddress,
    rate: ExchangeRate,
    amount_in: Amount,
    amount_out: Amount,
    raw_amount_in: Amount,
    raw_amount_out: Amount,
}

impl SettlementPlan {
    /// Computes both legs of selling `amount_in` (18 decimals) of
    /// `token_in` into `pool`.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::ZeroAmount`] if `amount_in` is zero.
    /// - [`ExchangeError::TokenNotInPool`] if `token_in` is foreign to `pool`.
    /// - [`ExchangeError::Overflow`] if an intermediate exceeds 256 bits.
    /// - [`ExchangeError::ImpossibleOperation`] if either leg is dust.
    pub fn compute(
        pool: &Pool,
        token_in: TokenAddress,
        amount_in: Amount,
        decimals_in: Decimals,
        decimals_out: Decimals,
    ) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(ExchangeError::ZeroAmount);
        }
        let token_out = pool.pair().other(&token_in)?;
        let rate = pool.rate_for(&token_in)?;

        let amount_out = rate.apply(amount_in)?;
        let raw_amount_in = decimals_in.to_raw_amount(amount_in)?;
        let raw_amount_out = decimals_out.to_raw_amount(amount_out)?;

        if raw_amount_in.is_zero() || raw_amount_out.is_zero() {
            return Err(ExchangeError::ImpossibleOperation {
                raw_amount_in,
                raw_amount_out,
            });
        }

        Ok(Self {
            pair_id: pool.pair_id(),
            token_in,
            token_out,
            rate,
            amount_in,
            amount_out,
            raw_amount_in,
            raw_amount_out,
        })
    }

    /// Pool the swap settles against.
    #[must_use]
    pub const fn pair_id(&self) -> PairId {
        self.pair_id
    }

    /// Token sold.
    #[must_use]
    pub const fn token_in(&self) -> TokenAddress {
        self.token_in
    }

    /// Token bought.
    #[must_use]
    pub const fn token_out(&self) -> TokenAddress {
        self.token_out
    }

    /// Directional rate applied.
    #[must_use]
    pub const fn rate(&self) -> ExchangeRate {
        self.rate
    }

    /// Input in 18-decimal units.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output in 18-decimal units.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Input in `token_in`'s native units; pulled from the trader.
    #[must_use]
    pub const fn raw_amount_in(&self) -> Amount {
        self.raw_amount_in
    }

    /// Output in `token_out`'s native units; released from custody.
    #[must_use]
    pub const fn raw_amount_out(&self) -> Amount {
        self.raw_amount_out
    }
}
