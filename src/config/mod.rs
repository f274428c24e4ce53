//! Declarative, validated blueprints for bringing an exchange up.
//!
//! [`ExchangeConfig`] names the owner, the custody account, the initial
//! pause flag and the pools to register at start-up; each pool is a
//! [`PoolConfig`]. Both deserialize from JSON via `serde`.

mod exchange;
mod pool;

pub use exchange::ExchangeConfig;
pub use pool::PoolConfig;
