//! Capability gates composed in front of the exchange's entry points.
//!
//! - [`OwnerGate`]: single-owner check and global pause flag; mints an
//!   [`OwnerCap`] that registry mutations require.
//! - [`ReentrancyGuard`]: in-flight flag refusing nested settlement.

mod gate;
mod reentrancy;

pub use gate::{OwnerCap, OwnerGate};
pub use reentrancy::{GuardToken, ReentrancyGuard};
