//! paint-core - Core library for wall area and paint quantity calculation.
//!
//! This library computes the wall area of a rectangular room, subtracts door
//! and window openings, and derives the liters of paint needed for a given
//! coverage rate and number of coats. All measurements are entered in feet and
//! reported in square meters and liters.
//!
//! # Example
//!
//! ```
//! use paint_core::{OpeningKind, SequentialIds, Session};
//!
//! let mut ids = SequentialIds::default();
//! let (session, _outcome) = Session::new()
//!     .push_opening(OpeningKind::Door, 3.0, 7.0, &mut ids)
//!     .trigger();
//!
//! let result = session.result.unwrap();
//! assert!((result.paint_needed - 7.637).abs() < 0.001);
//! ```

pub mod calculator;
pub mod collection;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod session;
pub mod validation;

// Re-exports for convenience
pub use calculator::{calculate_paint_needed, recommend_coats};
pub use collection::{IdGenerator, OpeningCollection, ProcessIds, SequentialIds};
pub use config::CalculatorConfig;
pub use error::{ErrorCode, PaintError, Result};
pub use generator::{chart_data, generate_report, ChartData};
pub use model::{CalculationResult, DimensionField, Opening, OpeningField, OpeningId, RoomDimensions};
pub use parser::{parse_job_file, parse_numeric_field, parse_opening_spec};
pub use session::{OpeningKind, Session, TriggerOutcome};
pub use validation::{validate_session, ValidationResult};

/// Load a job file and run the calculation.
///
/// This is the main high-level function:
/// 1. Parse the job file into a session
/// 2. Validate and trigger the calculation
/// 3. Log validation warnings
///
/// The returned session holds the result when the validation gate passed.
pub fn estimate_from_file(path: &std::path::Path) -> Result<(Session, TriggerOutcome)> {
    let session = parse_job_file(path, &mut ProcessIds)?;
    let (session, outcome) = session.trigger();

    for warning in &outcome.validation().warnings {
        tracing::warn!("{}", warning);
    }

    Ok((session, outcome))
}
