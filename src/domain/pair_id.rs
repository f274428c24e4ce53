//! Deterministic identifier of an unordered token pair.

use core::fmt;

use alloy_primitives::{keccak256, B256};
use serde::{Deserialize, Serialize};

use super::TokenAddress;

/// Registry key of a pool: `keccak256(zeroth ++ first)` over the packed
/// 20-byte addresses of the canonically ordered pair.
///
/// Obtain one through [`TokenPair::id`](super::TokenPair::id), which
/// guarantees the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairId(B256);

impl PairId {
    /// Hashes an already-ordered pair.
    ///
    /// Callers must pass `zeroth < first`; [`TokenPair`](super::TokenPair)
    /// is the only constructor that does so.
    pub(crate) fn derive(zeroth: &TokenAddress, first: &TokenAddress) -> Self {
        let mut buf = [0u8; 40];
        buf[..20].copy_from_slice(zeroth.as_slice());
        buf[20..].copy_from_slice(first.as_slice());
        Self(keccak256(buf))
    }

    /// Returns the 32-byte hash.
    #[must_use]
    pub const fn as_b256(&self) -> B256 {
        self.0
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
