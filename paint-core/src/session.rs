//! Calculator session: the form snapshot and its transitions.
//!
//! A [`Session`] is a plain value. Every transition takes the current session
//! and returns the next one, so the owner replaces its single instance in one
//! assignment and a triggered calculation always reads a consistent snapshot.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculator::calculate_paint_needed;
use crate::collection::{parse_field_value, IdGenerator, OpeningCollection};
use crate::config::{CalculatorConfig, DEFAULT_COATS, DEFAULT_COVERAGE};
use crate::model::{CalculationResult, DimensionField, OpeningField, OpeningId, RoomDimensions};
use crate::validation::{can_calculate, validate_session, ValidationResult};

/// Which opening list an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

impl std::fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpeningKind::Door => write!(f, "Door"),
            OpeningKind::Window => write!(f, "Window"),
        }
    }
}

/// Everything the calculator form holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub dimensions: RoomDimensions,
    pub doors: OpeningCollection,
    pub windows: OpeningCollection,
    /// Square meters per liter.
    pub coverage: f64,
    /// Coat count used for calculation. Takes precedence over `dimensions.coats`.
    pub coats: f64,
    /// Last successful calculation.
    pub result: Option<CalculationResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            dimensions: RoomDimensions::default(),
            doors: OpeningCollection::new(),
            windows: OpeningCollection::new(),
            coverage: DEFAULT_COVERAGE,
            coats: DEFAULT_COATS,
            result: None,
        }
    }
}

/// Outcome of pressing "calculate".
#[derive(Debug)]
pub enum TriggerOutcome {
    /// The gate passed; the held result was replaced.
    Calculated {
        result: CalculationResult,
        validation: ValidationResult,
    },
    /// The gate refused; the held result is unchanged.
    Suppressed { validation: ValidationResult },
}

impl TriggerOutcome {
    pub fn is_calculated(&self) -> bool {
        matches!(self, TriggerOutcome::Calculated { .. })
    }

    pub fn validation(&self) -> &ValidationResult {
        match self {
            TriggerOutcome::Calculated { validation, .. } => validation,
            TriggerOutcome::Suppressed { validation } => validation,
        }
    }
}

impl Session {
    /// Create a session with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its default and clear the result.
    pub fn reset(self) -> Self {
        debug!("resetting session");
        Self::default()
    }

    /// Set a room dimension from input text.
    pub fn set_dimension(self, field: DimensionField, raw_value: &str) -> Self {
        let value = parse_field_value(field.name(), raw_value);
        Self {
            dimensions: self.dimensions.with_field(field, value),
            ..self
        }
    }

    /// Set the coverage rate from input text.
    pub fn set_coverage(self, raw_value: &str) -> Self {
        Self {
            coverage: parse_field_value("coverage", raw_value),
            ..self
        }
    }

    /// Set the calculation coat count from input text.
    pub fn set_coats(self, raw_value: &str) -> Self {
        Self {
            coats: parse_field_value("coats", raw_value),
            ..self
        }
    }

    pub fn openings(&self, kind: OpeningKind) -> &OpeningCollection {
        match kind {
            OpeningKind::Door => &self.doors,
            OpeningKind::Window => &self.windows,
        }
    }

    fn with_openings(self, kind: OpeningKind, openings: OpeningCollection) -> Self {
        match kind {
            OpeningKind::Door => Self {
                doors: openings,
                ..self
            },
            OpeningKind::Window => Self {
                windows: openings,
                ..self
            },
        }
    }

    /// Append an empty opening to one list.
    pub fn add_opening(self, kind: OpeningKind, ids: &mut impl IdGenerator) -> Self {
        let openings = self.openings(kind).add(ids);
        self.with_openings(kind, openings)
    }

    /// Edit one field of an opening from input text.
    pub fn update_opening(
        self,
        kind: OpeningKind,
        id: OpeningId,
        field: OpeningField,
        raw_value: &str,
    ) -> Self {
        let openings = self.openings(kind).update(id, field, raw_value);
        self.with_openings(kind, openings)
    }

    /// Remove an opening. Unknown identifiers are ignored.
    pub fn remove_opening(self, kind: OpeningKind, id: OpeningId) -> Self {
        let openings = self.openings(kind).remove(id);
        self.with_openings(kind, openings)
    }

    /// Append an opening with a known size in feet.
    pub fn push_opening(
        self,
        kind: OpeningKind,
        width: f64,
        height: f64,
        ids: &mut impl IdGenerator,
    ) -> Self {
        let added = self.openings(kind).add(ids);
        let openings = match added.last_id() {
            Some(id) => added
                .update_value(id, OpeningField::Width, width)
                .update_value(id, OpeningField::Height, height),
            None => added,
        };
        self.with_openings(kind, openings)
    }

    /// Coverage and coat count as a config value.
    pub fn config(&self) -> CalculatorConfig {
        CalculatorConfig::new(self.coverage, self.coats)
    }

    /// Dimensions as handed to the calculator, with the session coat count.
    pub fn calculation_dimensions(&self) -> RoomDimensions {
        self.dimensions.with_coats(self.coats)
    }

    /// Run the calculation if the gate allows it.
    ///
    /// On success the held result is replaced. When suppressed the previous
    /// result, if any, stays in place.
    pub fn trigger(self) -> (Self, TriggerOutcome) {
        let validation = validate_session(&self);
        let config = self.config();

        if !can_calculate(&self.dimensions, config.coats) {
            info!(
                errors = validation.errors.len(),
                "calculation suppressed by validation gate"
            );
            return (self, TriggerOutcome::Suppressed { validation });
        }

        let result = calculate_paint_needed(
            &self.calculation_dimensions(),
            &self.doors,
            &self.windows,
            config.coverage_per_liter,
        );
        let session = Self {
            result: Some(result),
            ..self
        };
        (session, TriggerOutcome::Calculated { result, validation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::SequentialIds;
    use pretty_assertions::assert_eq;

    fn default_snapshot() -> Session {
        Session {
            dimensions: RoomDimensions::new(8.0, 12.0, 15.0, 2.0),
            doors: OpeningCollection::new(),
            windows: OpeningCollection::new(),
            coverage: 10.0,
            coats: 2.0,
            result: None,
        }
    }

    #[test]
    fn test_default_session() {
        assert_eq!(Session::new(), default_snapshot());
    }

    #[test]
    fn test_reset_restores_defaults_from_any_state() {
        let mut ids = SequentialIds::default();
        let (session, _) = Session::new()
            .set_dimension(DimensionField::Height, "10")
            .set_dimension(DimensionField::Coats, "3")
            .set_coverage("7.5")
            .set_coats("4")
            .push_opening(OpeningKind::Door, 3.0, 7.0, &mut ids)
            .push_opening(OpeningKind::Window, 4.0, 3.0, &mut ids)
            .trigger();
        assert!(session.result.is_some());

        assert_eq!(session.reset(), default_snapshot());
    }

    #[test]
    fn test_trigger_stores_result() {
        let (session, outcome) = Session::new().trigger();
        assert!(outcome.is_calculated());
        let result = session.result.unwrap();
        assert!((result.paint_needed - 8.027).abs() < 0.001);
    }

    #[test]
    fn test_trigger_uses_session_coats() {
        let (session, _) = Session::new()
            .set_dimension(DimensionField::Coats, "5")
            .set_coats("1")
            .trigger();
        let result = session.result.unwrap();
        assert!((result.paint_needed - 4.0134).abs() < 0.001);
    }

    #[test]
    fn test_suppressed_trigger_keeps_previous_result() {
        let (session, _) = Session::new().trigger();
        let previous = session.result;

        let (session, outcome) = session.set_dimension(DimensionField::Width, "").trigger();
        assert!(!outcome.is_calculated());
        assert!(!outcome.validation().passed);
        assert_eq!(session.result, previous);
    }

    #[test]
    fn test_suppressed_without_previous_result() {
        let (session, outcome) = Session::new().set_coats("0").trigger();
        assert!(matches!(outcome, TriggerOutcome::Suppressed { .. }));
        assert!(session.result.is_none());
    }

    #[test]
    fn test_zero_coverage_passes_gate() {
        let (session, outcome) = Session::new().set_coverage("").trigger();
        assert!(outcome.is_calculated());
        assert!(!outcome.validation().warnings.is_empty());
        assert!(session.result.unwrap().paint_needed.is_infinite());
    }

    #[test]
    fn test_opening_edits_route_to_the_right_list() {
        let mut ids = SequentialIds::default();
        let session = Session::new().add_opening(OpeningKind::Window, &mut ids);
        let id = session.windows.last_id().unwrap();
        let session = session
            .update_opening(OpeningKind::Window, id, OpeningField::Width, "4")
            .update_opening(OpeningKind::Door, id, OpeningField::Height, "9");

        assert!(session.doors.is_empty());
        assert_eq!(session.windows.get(id).unwrap().width, 4.0);
        assert_eq!(session.windows.get(id).unwrap().height, 0.0);

        let session = session.remove_opening(OpeningKind::Window, id);
        assert!(session.windows.is_empty());
    }

    #[test]
    fn test_push_opening_sets_size() {
        let mut ids = SequentialIds::default();
        let session = Session::new().push_opening(OpeningKind::Door, 3.0, 7.0, &mut ids);
        let door = session.doors.as_slice()[0];
        assert_eq!((door.width, door.height), (3.0, 7.0));
    }

    #[test]
    fn test_config_reflects_coverage_form() {
        let session = Session::new().set_coverage("8").set_coats("3");
        assert_eq!(session.config(), CalculatorConfig::new(8.0, 3.0));

        let (session, _) = session.trigger();
        assert_eq!(session.result.unwrap().coverage, 8.0);
    }

    #[test]
    fn test_new_result_replaces_old() {
        let mut ids = SequentialIds::default();
        let (session, _) = Session::new().trigger();
        let first = session.result.unwrap();
        let (session, _) = session
            .push_opening(OpeningKind::Door, 3.0, 7.0, &mut ids)
            .trigger();
        let second = session.result.unwrap();
        assert!(second.paint_needed < first.paint_needed);
        assert_eq!(second.coverage, 10.0);
    }
}
