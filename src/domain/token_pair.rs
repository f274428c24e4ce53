//! Canonically ordered pair of distinct tokens.

use serde::Serialize;

use super::{PairId, TokenAddress};
use crate::error::{ExchangeError, Result};

/// An ordered pair of distinct, non-zero tokens with its registry key.
///
/// The canonical ordering guarantees `zeroth < first`, so `(A, B)` and
/// `(B, A)` resolve to the same pair and the same [`PairId`].
///
/// # Examples
///
/// ```
/// use rate_exchange::domain::{TokenAddress, TokenPair};
///
/// let a = TokenAddress::repeat_byte(0xAA);
/// let b = TokenAddress::repeat_byte(0xBB);
///
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.zeroth(), a);
/// assert_eq!(pair.first(), b);
/// assert_eq!(pair.id(), TokenPair::new(a, b).expect("distinct").id());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TokenPair {
    zeroth: TokenAddress,
    first: TokenAddress,
    id: PairId,
}

impl TokenPair {
    /// Canonicalizes two token addresses.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::TokensIdentical`] if `token_a == token_b`
    ///   (checked first, so it wins for two zero addresses).
    /// - [`ExchangeError::ZeroAddress`] if either token is zero.
    pub fn new(token_a: TokenAddress, token_b: TokenAddress) -> Result<Self> {
        if token_a == token_b {
            return Err(ExchangeError::TokensIdentical { token: token_a });
        }
        if token_a.is_zero() || token_b.is_zero() {
            return Err(ExchangeError::ZeroAddress);
        }

        let (zeroth, first) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        Ok(Self {
            zeroth,
            first,
            id: PairId::derive(&zeroth, &first),
        })
    }

    /// Returns the lower-addressed token.
    #[must_use]
    pub const fn zeroth(&self) -> TokenAddress {
        self.zeroth
    }

    /// Returns the higher-addressed token.
    #[must_use]
    pub const fn first(&self) -> TokenAddress {
        self.first
    }

    /// Returns the registry key of the pair.
    #[must_use]
    pub const fn id(&self) -> PairId {
        self.id
    }

    /// Returns `true` if `token` is one side of the pair.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.zeroth == *token || self.first == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::TokenNotInPool`] if `token` is foreign.
    pub fn other(&self, token: &TokenAddress) -> Result<TokenAddress> {
        if *token == self.zeroth {
            Ok(self.first)
        } else if *token == self.first {
            Ok(self.zeroth)
        } else {
            Err(ExchangeError::TokenNotInPool {
                token: *token,
                pair_id: self.id,
            })
        }
    }
}

/// Resolves `(pair_id, zeroth, first)` for any two tokens.
///
/// Free-function form of [`TokenPair::new`]; callable by anyone, no side
/// effects.
///
/// # Errors
///
/// Same as [`TokenPair::new`].
pub fn resolve_pair_id(
    token_a: TokenAddress,
    token_b: TokenAddress,
) -> Result<(PairId, TokenAddress, TokenAddress)> {
    let pair = TokenPair::new(token_a, token_b)?;
    Ok((pair.id(), pair.zeroth(), pair.first()))
}
