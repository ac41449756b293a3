//! Room envelope measured in feet.

use serde::{Deserialize, Serialize};

use crate::config::{
    units::feet_to_meters, DEFAULT_COATS, DEFAULT_HEIGHT_FT, DEFAULT_LENGTH_FT, DEFAULT_WIDTH_FT,
};

/// Editable field of [`RoomDimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionField {
    Height,
    Width,
    Length,
    Coats,
}

impl DimensionField {
    /// Field name as shown on the room form.
    pub fn name(&self) -> &'static str {
        match self {
            DimensionField::Height => "height",
            DimensionField::Width => "width",
            DimensionField::Length => "length",
            DimensionField::Coats => "coats",
        }
    }
}

impl std::fmt::Display for DimensionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Interior envelope of one rectangular room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoomDimensions {
    /// Wall height in feet.
    pub height: f64,
    /// Room width in feet.
    pub width: f64,
    /// Room length in feet.
    pub length: f64,
    /// Number of coats.
    pub coats: f64,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT_FT,
            width: DEFAULT_WIDTH_FT,
            length: DEFAULT_LENGTH_FT,
            coats: DEFAULT_COATS,
        }
    }
}

impl RoomDimensions {
    /// Create new room dimensions.
    pub fn new(height: f64, width: f64, length: f64, coats: f64) -> Self {
        Self {
            height,
            width,
            length,
            coats,
        }
    }

    /// Return a copy with `field` replaced by `value`.
    pub fn with_field(self, field: DimensionField, value: f64) -> Self {
        let mut dims = self;
        match field {
            DimensionField::Height => dims.height = value,
            DimensionField::Width => dims.width = value,
            DimensionField::Length => dims.length = value,
            DimensionField::Coats => dims.coats = value,
        }
        dims
    }

    /// Return a copy using a different coat count.
    pub fn with_coats(self, coats: f64) -> Self {
        self.with_field(DimensionField::Coats, coats)
    }

    /// Read a field by name.
    pub fn get(&self, field: DimensionField) -> f64 {
        match field {
            DimensionField::Height => self.height,
            DimensionField::Width => self.width,
            DimensionField::Length => self.length,
            DimensionField::Coats => self.coats,
        }
    }

    /// Height converted to meters.
    pub fn height_m(&self) -> f64 {
        feet_to_meters(self.height)
    }

    /// Width converted to meters.
    pub fn width_m(&self) -> f64 {
        feet_to_meters(self.width)
    }

    /// Length converted to meters.
    pub fn length_m(&self) -> f64 {
        feet_to_meters(self.length)
    }
}
