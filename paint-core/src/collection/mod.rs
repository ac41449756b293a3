//! Ordered door and window collections.

mod ids;
mod openings;

pub use ids::{generate_id, IdGenerator, ProcessIds, SequentialIds};
pub use openings::{parse_field_value, OpeningCollection};
