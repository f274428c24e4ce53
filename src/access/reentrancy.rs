//! In-flight flag that refuses nested settlement.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{ExchangeError, Result};

/// Shared "busy" flag for the settlement engine.
///
/// Clones share the same flag, so a token hook holding a clone observes
/// the engine's in-flight state.
#[derive(Debug, Clone, Default)]
pub struct ReentrancyGuard {
    entered: Arc<AtomicBool>,
}

impl ReentrancyGuard {
    /// Creates an idle guard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the engine busy until the returned token is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::ReentrantCall`] if already entered.
    pub fn enter(&self) -> Result<GuardToken> {
        self.entered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ExchangeError::ReentrantCall)?;
        Ok(GuardToken {
            entered: Arc::clone(&self.entered),
        })
    }

    /// Returns `true` while a settlement is in flight.
    #[must_use]
    pub fn is_entered(&self) -> bool {
        self.entered.load(Ordering::Acquire)
    }
}

/// Clears the guard when dropped, on success and error paths alike.
#[derive(Debug)]
#[must_use = "the guard is released as soon as the token is dropped"]
pub struct GuardToken {
    entered: Arc<AtomicBool>,
}

impl Drop for GuardToken {
    fn drop(&mut self) {
        self.entered.store(false, Ordering::Release);
    }
}
