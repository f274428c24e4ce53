//! Ownership and pause capability checks.

use alloy_primitives::Address;

/// Access-control gate consulted before privileged or pausable entry points.
///
/// Exactly one identity is the owner at any time. The pause flag halts
/// swaps and administrative mutations but never pause-state queries.
pub trait AccessControl {
    /// Returns `true` if `caller` is the current owner.
    #[must_use]
    fn is_owner(&self, caller: &Address) -> bool;

    /// Returns `true` while the exchange is paused.
    #[must_use]
    fn is_paused(&self) -> bool;

    /// Sets the pause flag.
    fn set_paused(&mut self, paused: bool);
}
