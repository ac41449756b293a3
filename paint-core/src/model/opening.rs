//! Door and window openings subtracted from the wall area.

use serde::{Deserialize, Serialize};

use crate::config::units::feet_to_meters;

/// Opaque identifier of an opening, unique for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningId(u64);

impl OpeningId {
    /// Wrap a raw identifier value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw identifier value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OpeningId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable field of an [`Opening`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningField {
    Width,
    Height,
}

impl OpeningField {
    pub fn name(&self) -> &'static str {
        match self {
            OpeningField::Width => "width",
            OpeningField::Height => "height",
        }
    }
}

/// A single door or window, modeled as a rectangle in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: OpeningId,
    /// Width in feet.
    pub width: f64,
    /// Height in feet.
    pub height: f64,
}

impl Opening {
    /// Create an empty opening (0 x 0 ft).
    pub fn new(id: OpeningId) -> Self {
        Self {
            id,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Set one field.
    pub fn set(&mut self, field: OpeningField, value: f64) {
        match field {
            OpeningField::Width => self.width = value,
            OpeningField::Height => self.height = value,
        }
    }

    /// Area in square meters, each side converted independently.
    pub fn area_m2(&self) -> f64 {
        feet_to_meters(self.width) * feet_to_meters(self.height)
    }
}
