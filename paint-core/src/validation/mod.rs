//! Input validation for paint calculation.

mod validate;

pub use validate::*;
