//! Validation gate deciding whether a calculation may run.

use crate::calculator::{opening_area_m2, wall_area_m2};
use crate::collection::OpeningCollection;
use crate::model::{DimensionField, RoomDimensions};
use crate::session::{OpeningKind, Session};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Check the gate condition: every room dimension and the coat count positive.
///
/// Coverage is not part of the gate.
pub fn can_calculate(dimensions: &RoomDimensions, coats: f64) -> bool {
    dimensions.height > 0.0 && dimensions.width > 0.0 && dimensions.length > 0.0 && coats > 0.0
}

/// Validate room dimensions and coat count.
pub fn validate_dimensions(dimensions: &RoomDimensions, coats: f64) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for field in [
        DimensionField::Height,
        DimensionField::Width,
        DimensionField::Length,
    ] {
        let value = dimensions.get(field);
        if value <= 0.0 || value.is_nan() {
            result.add_error(format!("Room {} must be positive (got {})", field, value));
        }
    }

    if coats <= 0.0 || coats.is_nan() {
        result.add_error(format!("Number of coats must be positive (got {})", coats));
    }

    result
}

/// Validate one opening collection. Only ever warns.
pub fn validate_openings(kind: OpeningKind, openings: &OpeningCollection) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, opening) in openings.iter().enumerate() {
        if opening.width <= 0.0 || opening.height <= 0.0 {
            result.add_warning(format!(
                "{} #{}: Zero-sized opening ({}x{} ft) subtracts nothing",
                kind,
                idx + 1,
                opening.width,
                opening.height
            ));
        }
    }

    result
}

/// Validate a full session snapshot.
///
/// Errors block the calculation. Non-positive coverage and openings larger
/// than the walls are accepted and only reported as warnings.
pub fn validate_session(session: &Session) -> ValidationResult {
    let mut result = validate_dimensions(&session.dimensions, session.coats);

    if !session.config().has_usable_coverage() {
        result.add_warning(format!(
            "Coverage per liter is not positive ({}); paint needed will be degenerate",
            session.coverage
        ));
    }

    result.merge(validate_openings(OpeningKind::Door, &session.doors));
    result.merge(validate_openings(OpeningKind::Window, &session.windows));

    if result.passed {
        let wall = wall_area_m2(&session.dimensions);
        let openings = opening_area_m2(&session.doors, &session.windows);
        if openings > wall {
            result.add_warning(format!(
                "Doors and windows ({:.2} m²) exceed the wall area ({:.2} m²)",
                openings, wall
            ));
        }
    }

    result
}
