//! Journaled in-memory token ledger.

use std::collections::{HashMap, HashSet};

use alloy_primitives::Address;
use tracing::trace;

use crate::domain::{Amount, Decimals, TokenAddress};
use crate::error::{ExchangeError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::{Checkpoint, TokenLedger};

type BalanceKey = (TokenAddress, Address);
type AllowanceKey = (TokenAddress, Address, Address);

/// Previous value of one written slot.
#[derive(Debug, Clone, Copy)]
enum JournalEntry {
    Balance { key: BalanceKey, previous: Amount },
    Allowance { key: AllowanceKey, previous: Amount },
}

/// Balances, allowances and decimals for any number of tokens.
///
/// While a [`checkpoint`](TokenLedger::checkpoint) is open, every balance
/// or allowance write is journaled so
/// [`revert_to`](TokenLedger::revert_to) can undo it. Writes made with no
/// checkpoint open are not journaled, and the journal is dropped once the
/// outermost checkpoint is committed or reverted.
///
/// Transfers validate every precondition before writing, so a failed
/// `transfer` or `transfer_from` leaves the ledger untouched.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use rate_exchange::domain::{Amount, TokenAddress};
/// use rate_exchange::ledger::InMemoryLedger;
/// use rate_exchange::traits::TokenLedger;
///
/// let usdc = TokenAddress::repeat_byte(0xAA);
/// let alice = Address::repeat_byte(1);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.register_token(usdc, 6).expect("valid decimals");
/// ledger.mint(&usdc, &alice, Amount::from_u128(5_000_000)).expect("minted");
/// assert_eq!(ledger.balance_of(&usdc, &alice).expect("known"), Amount::from_u128(5_000_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    decimals: HashMap<TokenAddress, Decimals>,
    balances: HashMap<BalanceKey, Amount>,
    allowances: HashMap<AllowanceKey, Amount>,
    frozen: HashSet<TokenAddress>,
    journal: Vec<JournalEntry>,
    open_checkpoints: usize,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists `token` with the given decimals.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidPrecision`] above 77 decimals.
    pub fn register_token(&mut self, token: TokenAddress, decimals: u8) -> Result<()> {
        self.decimals.insert(token, Decimals::new(decimals)?);
        Ok(())
    }

    /// Credits `amount` of `token` to `holder` out of thin air.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::UnknownToken`] or [`ExchangeError::Overflow`].
    pub fn mint(&mut self, token: &TokenAddress, holder: &Address, amount: Amount) -> Result<()> {
        self.ensure_known(token)?;
        let balance = self.balance(token, holder).safe_add(&amount)?;
        self.write_balance((*token, *holder), balance);
        Ok(())
    }

    /// Sets `spender`'s allowance over `holder`'s `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::UnknownToken`] if `token` is not listed.
    pub fn approve(
        &mut self,
        token: &TokenAddress,
        holder: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<()> {
        self.ensure_known(token)?;
        self.write_allowance((*token, *holder, *spender), amount);
        Ok(())
    }

    /// Current allowance of `spender` over `holder`'s `token`.
    #[must_use]
    pub fn allowance(&self, token: &TokenAddress, holder: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*token, *holder, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Makes every transfer of `token` fail while `frozen` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::UnknownToken`] if `token` is not listed.
    pub fn set_frozen(&mut self, token: &TokenAddress, frozen: bool) -> Result<()> {
        self.ensure_known(token)?;
        if frozen {
            self.frozen.insert(*token);
        } else {
            self.frozen.remove(token);
        }
        Ok(())
    }

    /// Number of journaled writes still revertible.
    #[must_use]
    pub fn journal_len(&self) -> usize {
        self.journal.len()
    }

    fn ensure_known(&self, token: &TokenAddress) -> Result<()> {
        if self.decimals.contains_key(token) {
            Ok(())
        } else {
            Err(ExchangeError::UnknownToken { token: *token })
        }
    }

    fn balance(&self, token: &TokenAddress, holder: &Address) -> Amount {
        self.balances
            .get(&(*token, *holder))
            .copied()
            .unwrap_or_default()
    }

    /// Checks a transfer without writing anything.
    ///
    /// Returns the new `(from, to)` balances, or `None` for a self-transfer,
    /// which moves nothing.
    fn plan_transfer(
        &self,
        token: &TokenAddress,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<Option<(Amount, Amount)>> {
        self.ensure_known(token)?;
        if self.frozen.contains(token) {
            return Err(ExchangeError::TransferFailed {
                token: *token,
                reason: "token is frozen",
            });
        }

        let available = self.balance(token, from);
        if available < amount {
            return Err(ExchangeError::InsufficientBalance {
                token: *token,
                holder: *from,
                required: amount,
                available,
            });
        }
        if from == to {
            return Ok(None);
        }
        let debited = available.safe_sub(&amount)?;
        let credited = self.balance(token, to).safe_add(&amount)?;
        Ok(Some((debited, credited)))
    }

    fn apply_transfer(
        &mut self,
        token: &TokenAddress,
        from: &Address,
        to: &Address,
        balances: Option<(Amount, Amount)>,
    ) {
        if let Some((debited, credited)) = balances {
            self.write_balance((*token, *from), debited);
            self.write_balance((*token, *to), credited);
        }
    }

    fn write_balance(&mut self, key: BalanceKey, value: Amount) {
        let previous = self.balances.insert(key, value).unwrap_or_default();
        if self.open_checkpoints > 0 {
            self.journal.push(JournalEntry::Balance { key, previous });
        }
    }

    fn write_allowance(&mut self, key: AllowanceKey, value: Amount) {
        let previous = self.allowances.insert(key, value).unwrap_or_default();
        if self.open_checkpoints > 0 {
            self.journal.push(JournalEntry::Allowance { key, previous });
        }
    }

    fn close_checkpoint(&mut self) {
        self.open_checkpoints = self.open_checkpoints.saturating_sub(1);
        if self.open_checkpoints == 0 {
            self.journal.clear();
        }
    }
}

impl TokenLedger for InMemoryLedger {
    fn decimals(&self, token: &TokenAddress) -> Result<u8> {
        self.decimals
            .get(token)
            .map(Decimals::get)
            .ok_or(ExchangeError::UnknownToken { token: *token })
    }

    fn balance_of(&self, token: &TokenAddress, holder: &Address) -> Result<Amount> {
        self.ensure_known(token)?;
        Ok(self.balance(token, holder))
    }

    fn transfer(
        &mut self,
        token: &TokenAddress,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<()> {
        let balances = self.plan_transfer(token, from, to, amount)?;
        self.apply_transfer(token, from, to, balances);

        trace!(%token, %from, %to, %amount, "ledger transfer");
        Ok(())
    }

    fn transfer_from(
        &mut self,
        token: &TokenAddress,
        spender: &Address,
        holder: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<()> {
        self.ensure_known(token)?;
        let allowed = self.allowance(token, holder, spender);
        if allowed < amount {
            return Err(ExchangeError::InsufficientAllowance {
                token: *token,
                holder: *holder,
                spender: *spender,
                required: amount,
                available: allowed,
            });
        }
        let remaining = allowed.safe_sub(&amount)?;
        let balances = self.plan_transfer(token, holder, to, amount)?;

        self.write_allowance((*token, *holder, *spender), remaining);
        self.apply_transfer(token, holder, to, balances);

        trace!(%token, %spender, %holder, %to, %amount, "ledger transfer_from");
        Ok(())
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.open_checkpoints += 1;
        Checkpoint::new(self.journal.len())
    }

    fn revert_to(&mut self, checkpoint: Checkpoint) {
        while self.journal.len() > checkpoint.position() {
            match self.journal.pop() {
                Some(JournalEntry::Balance { key, previous }) => {
                    self.balances.insert(key, previous);
                }
                Some(JournalEntry::Allowance { key, previous }) => {
                    self.allowances.insert(key, previous);
                }
                None => break,
            }
        }
        self.close_checkpoint();
    }

    fn commit(&mut self, _checkpoint: Checkpoint) {
        self.close_checkpoint();
    }
}
