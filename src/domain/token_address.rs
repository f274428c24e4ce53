//! EVM token address.

use core::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// The 20-byte address of a token contract.
///
/// Ordering is byte-wise ascending, which matches numeric ordering of the
/// address; pair canonicalization relies on it.
///
/// # Examples
///
/// ```
/// use rate_exchange::domain::TokenAddress;
///
/// let lo = TokenAddress::repeat_byte(0xAA);
/// let hi = TokenAddress::repeat_byte(0xBB);
/// assert!(lo < hi);
/// assert!(!lo.is_zero());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenAddress(Address);

impl TokenAddress {
    /// Wraps an [`Address`].
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }

    /// Returns an address with every byte set to `byte`.
    #[must_use]
    pub const fn repeat_byte(byte: u8) -> Self {
        Self::from_bytes([byte; 20])
    }

    /// Returns the all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Address::ZERO)
    }

    /// Returns `true` for the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Address::ZERO
    }

    /// Returns the wrapped [`Address`].
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }

    /// Returns the 20 address bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<Address> for TokenAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
