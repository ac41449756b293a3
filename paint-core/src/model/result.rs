//! Output record of a paint calculation.

use serde::{Deserialize, Serialize};

/// Computed areas and paint volume for one room.
///
/// Areas are in square meters, `paint_needed` in liters and `coverage` in
/// square meters per liter. A result is never edited after it is produced;
/// a new calculation replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Area of the four walls, ceiling and floor excluded.
    pub wall_area: f64,
    /// Combined area of every door and window.
    pub door_window_area: f64,
    /// Wall area minus openings. Negative when openings exceed the walls.
    pub paintable_area: f64,
    /// Liters of paint for all coats. Infinite or NaN for a zero coverage.
    #[serde(with = "non_finite")]
    pub paint_needed: f64,
    /// Coverage rate the result was computed with.
    pub coverage: f64,
}

impl CalculationResult {
    /// Check if the openings exceed the wall area.
    pub fn is_over_subtracted(&self) -> bool {
        self.paintable_area < 0.0
    }

    /// Check if the paint volume is a usable finite number.
    pub fn has_finite_paint(&self) -> bool {
        self.paint_needed.is_finite()
    }
}

/// JSON has no infinity or NaN; those are written as `"inf"`, `"-inf"` and
/// `"NaN"` and read back from the same strings.
mod non_finite {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if *value == f64::INFINITY {
            serializer.serialize_str("inf")
        } else if *value == f64::NEG_INFINITY {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!(
                    "expected a number, \"inf\", \"-inf\" or \"NaN\", got \"{}\"",
                    other
                ))),
            },
        }
    }
}
