//! Area and paint volume calculation.

mod paint;
mod recommend;

pub use paint::*;
pub use recommend::*;
