//! JSON job files describing one room.
//!
//! ```json
//! {
//!   "dimensions": { "height": 8, "width": 12, "length": 15 },
//!   "doors": [{ "width": 3, "height": 7 }],
//!   "windows": [],
//!   "coverage": 10,
//!   "coats": 2
//! }
//! ```
//!
//! Every key is optional and falls back to the session defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::collection::IdGenerator;
use crate::error::{PaintError, Result};
use crate::model::{DimensionField, RoomDimensions};
use crate::session::{OpeningKind, Session};

/// Opening size in a job file. Identifiers are assigned on load.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobOpening {
    pub width: f64,
    pub height: f64,
}

/// Parsed job file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobFile {
    pub dimensions: Option<RoomDimensions>,
    pub doors: Vec<JobOpening>,
    pub windows: Vec<JobOpening>,
    pub coverage: Option<f64>,
    /// Falls back to `dimensions.coats`.
    pub coats: Option<f64>,
}

impl JobFile {
    /// Reject values the input fields could never have produced.
    fn check_non_negative(&self) -> Result<()> {
        let negative = |field: &str, value: f64| -> Result<()> {
            if value < 0.0 {
                return Err(PaintError::NegativeValue {
                    field: field.to_string(),
                    value,
                });
            }
            Ok(())
        };

        if let Some(dims) = &self.dimensions {
            for field in [
                DimensionField::Height,
                DimensionField::Width,
                DimensionField::Length,
                DimensionField::Coats,
            ] {
                negative(field.name(), dims.get(field))?;
            }
        }
        for opening in self.doors.iter().chain(self.windows.iter()) {
            negative("width", opening.width)?;
            negative("height", opening.height)?;
        }
        if let Some(coverage) = self.coverage {
            negative("coverage", coverage)?;
        }
        if let Some(coats) = self.coats {
            negative("coats", coats)?;
        }
        Ok(())
    }

    /// Build a session, giving every opening a fresh identifier.
    pub fn into_session(self, ids: &mut impl IdGenerator) -> Session {
        let defaults = Session::default();
        let dimensions = self.dimensions.unwrap_or(defaults.dimensions);
        let coats = self.coats.unwrap_or(dimensions.coats);

        let mut session = Session {
            dimensions,
            coverage: self.coverage.unwrap_or(defaults.coverage),
            coats,
            ..defaults
        };

        for door in &self.doors {
            session = session.push_opening(OpeningKind::Door, door.width, door.height, ids);
        }
        for window in &self.windows {
            session = session.push_opening(OpeningKind::Window, window.width, window.height, ids);
        }
        session
    }
}

/// Parse job file content into a session.
pub fn parse_job_str(content: &str, ids: &mut impl IdGenerator) -> Result<Session> {
    let job: JobFile = serde_json::from_str(content)?;
    job.check_non_negative()?;
    Ok(job.into_session(ids))
}

/// Read and parse a job file.
pub fn parse_job_file(path: &Path, ids: &mut impl IdGenerator) -> Result<Session> {
    if !path.exists() {
        return Err(PaintError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(PaintError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_job_str(&content, ids)
}
