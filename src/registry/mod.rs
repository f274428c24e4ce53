//! Registry of fixed-rate pools keyed by canonical pair id.

mod pool_registry;

pub use pool_registry::PoolRegistry;
