//! Fundamental domain value types used throughout the exchange.
//!
//! Token addresses, canonical pairs and their ids, amounts, decimals,
//! rates and pool records. All types use newtypes with validated
//! constructors to enforce invariants.

mod amount;
mod decimals;
mod exchange_rate;
mod pair_id;
mod pool;
mod rates;
mod token_address;
mod token_pair;

pub use amount::Amount;
pub use decimals::Decimals;
pub use exchange_rate::{ExchangeRate, MAX_RATE_THRESHOLD};
pub use pair_id::PairId;
pub use pool::Pool;
pub use rates::{resolve_rates, DirectionalRates};
pub use token_address::TokenAddress;
pub use token_pair::{resolve_pair_id, TokenPair};
