//! Single-owner, pausable capability gate.

use alloy_primitives::Address;
use tracing::info;

use crate::error::{ExchangeError, Result};
use crate::traits::AccessControl;

/// Proof that the owner check passed for a caller.
///
/// Only [`OwnerGate`] can mint one, and registry mutations demand a
/// reference to it, so privileged paths cannot skip the check.
#[derive(Debug, PartialEq, Eq)]
pub struct OwnerCap {
    caller: Address,
}

impl OwnerCap {
    /// The owner that presented this capability.
    #[must_use]
    pub const fn caller(&self) -> Address {
        self.caller
    }
}

/// Owner identity plus the global pause flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerGate {
    owner: Address,
    paused: bool,
}

impl OwnerGate {
    /// Creates an unpaused gate owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::ZeroAddress`] if `owner` is zero.
    pub fn new(owner: Address) -> Result<Self> {
        if owner == Address::ZERO {
            return Err(ExchangeError::ZeroAddress);
        }
        Ok(Self {
            owner,
            paused: false,
        })
    }

    /// The current owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Checks that `caller` is the owner.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Unauthorized`] otherwise.
    pub fn require_owner(&self, caller: &Address) -> Result<OwnerCap> {
        if !self.is_owner(caller) {
            return Err(ExchangeError::Unauthorized { caller: *caller });
        }
        Ok(OwnerCap { caller: *caller })
    }

    /// Checks that the exchange is not paused.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Paused`] while paused.
    pub fn require_not_paused(&self) -> Result<()> {
        if self.paused {
            return Err(ExchangeError::Paused);
        }
        Ok(())
    }

    /// Owner check followed by the pause check, for administrative mutations.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::Unauthorized`] or [`ExchangeError::Paused`].
    pub fn authorize_admin(&self, caller: &Address) -> Result<OwnerCap> {
        let cap = self.require_owner(caller)?;
        self.require_not_paused()?;
        Ok(cap)
    }

    /// Pauses the exchange.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Paused`] if already paused.
    pub fn pause(&mut self, cap: &OwnerCap) -> Result<()> {
        self.require_not_paused()?;
        self.set_paused(true);
        info!(by = %cap.caller(), "exchange paused");
        Ok(())
    }

    /// Resumes the exchange.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::NotPaused`] if not paused.
    pub fn unpause(&mut self, cap: &OwnerCap) -> Result<()> {
        if !self.paused {
            return Err(ExchangeError::NotPaused);
        }
        self.set_paused(false);
        info!(by = %cap.caller(), "exchange unpaused");
        Ok(())
    }

    /// Hands ownership to `new_owner` and returns the previous owner.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::ZeroAddress`] if `new_owner` is zero.
    pub fn transfer_ownership(&mut self, cap: &OwnerCap, new_owner: Address) -> Result<Address> {
        if new_owner == Address::ZERO {
            return Err(ExchangeError::ZeroAddress);
        }
        let previous = core::mem::replace(&mut self.owner, new_owner);
        info!(%previous, %new_owner, by = %cap.caller(), "ownership transferred");
        Ok(previous)
    }
}

impl AccessControl for OwnerGate {
    fn is_owner(&self, caller: &Address) -> bool {
        self.owner == *caller
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
