//! Data model types for paint calculation.

mod dimensions;
mod opening;
mod result;

pub use dimensions::{DimensionField, RoomDimensions};
pub use opening::{Opening, OpeningField, OpeningId};
pub use result::CalculationResult;
