//! Configuration constants and settings for the calculator.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Conversion factor: feet to meters.
pub const FEET_TO_METERS: f64 = 0.3048;

/// Default paint coverage in square meters per liter.
pub const DEFAULT_COVERAGE: f64 = 10.0;

/// Default number of coats.
pub const DEFAULT_COATS: f64 = 2.0;

/// Default room height in feet.
pub const DEFAULT_HEIGHT_FT: f64 = 8.0;

/// Default room width in feet.
pub const DEFAULT_WIDTH_FT: f64 = 12.0;

/// Default room length in feet.
pub const DEFAULT_LENGTH_FT: f64 = 15.0;

/// Wall area (m²) above which three coats are recommended.
pub const RECOMMEND_THREE_COATS_ABOVE: f64 = 50.0;

/// Wall area (m²) above which two coats are recommended.
pub const RECOMMEND_TWO_COATS_ABOVE: f64 = 30.0;

/// Coats recommended when nothing has been calculated yet.
pub const RECOMMEND_DEFAULT_COATS: u32 = 2;

/// Calculator settings that are not part of the room geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorConfig {
    /// Square meters covered by one liter of paint.
    pub coverage_per_liter: f64,
    /// Number of full applications.
    pub coats: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            coverage_per_liter: DEFAULT_COVERAGE,
            coats: DEFAULT_COATS,
        }
    }
}

impl CalculatorConfig {
    /// Create a new calculator configuration.
    pub fn new(coverage_per_liter: f64, coats: f64) -> Self {
        Self {
            coverage_per_liter,
            coats,
        }
    }

    /// Check if the coverage rate yields a finite, positive paint volume.
    pub fn has_usable_coverage(&self) -> bool {
        self.coverage_per_liter > 0.0
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}

/// Length conversions.
pub mod units {
    use super::FEET_TO_METERS;

    /// Convert a length in feet to meters.
    #[inline]
    pub fn feet_to_meters(feet: f64) -> f64 {
        feet * FEET_TO_METERS
    }
}
