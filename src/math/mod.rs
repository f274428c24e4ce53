//! Arithmetic and precision utilities for settlement calculations.
//!
//! Everything here works on 256-bit integers and truncates toward zero:
//! [`apply_rate`] for 18-decimal rate application, [`to_raw_amount`] for
//! decimal normalization, and [`CheckedArithmetic`] for `?`-friendly
//! overflow handling.

mod checked;
mod fixed_point;
mod normalize;

pub use checked::CheckedArithmetic;
pub use fixed_point::{apply_rate, mul_div_floor, pow10, INTERNAL_DECIMALS, WAD};
pub use normalize::to_raw_amount;
