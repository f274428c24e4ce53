//! [`TokenLedger`](crate::traits::TokenLedger) implementations.

mod in_memory;

pub use in_memory::InMemoryLedger;
