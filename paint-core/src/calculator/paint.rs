//! Wall area, opening subtraction and paint volume.

use tracing::debug;

use crate::collection::OpeningCollection;
use crate::config::DEFAULT_COVERAGE;
use crate::model::{CalculationResult, RoomDimensions};

/// Area of the four walls in square meters.
///
/// Two length x height walls plus two width x height walls; ceiling and floor
/// are not painted.
pub fn wall_area_m2(dimensions: &RoomDimensions) -> f64 {
    let height_m = dimensions.height_m();
    let width_m = dimensions.width_m();
    let length_m = dimensions.length_m();

    2.0 * (length_m * height_m + width_m * height_m)
}

/// Combined area of all doors and windows in square meters.
pub fn opening_area_m2(doors: &OpeningCollection, windows: &OpeningCollection) -> f64 {
    doors.total_area_m2() + windows.total_area_m2()
}

/// Compute the paint required for a room.
///
/// Paintable area is not clamped at zero and the coverage is not checked, so
/// a zero coverage yields an infinite or NaN volume.
pub fn calculate_paint_needed(
    dimensions: &RoomDimensions,
    doors: &OpeningCollection,
    windows: &OpeningCollection,
    coverage_per_liter: f64,
) -> CalculationResult {
    let wall_area = wall_area_m2(dimensions);
    let door_window_area = opening_area_m2(doors, windows);
    let paintable_area = wall_area - door_window_area;
    let paint_needed = (paintable_area * dimensions.coats) / coverage_per_liter;

    debug!(
        wall_area,
        door_window_area,
        paintable_area,
        paint_needed,
        coats = dimensions.coats,
        coverage = coverage_per_liter,
        "calculated paint requirement"
    );

    CalculationResult {
        wall_area,
        door_window_area,
        paintable_area,
        paint_needed,
        coverage: coverage_per_liter,
    }
}

/// [`calculate_paint_needed`] with the standard coverage of 10 m²/L.
pub fn calculate_with_default_coverage(
    dimensions: &RoomDimensions,
    doors: &OpeningCollection,
    windows: &OpeningCollection,
) -> CalculationResult {
    calculate_paint_needed(dimensions, doors, windows, DEFAULT_COVERAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::SequentialIds;
    use crate::config::FEET_TO_METERS;
    use crate::model::OpeningField;

    fn door(ids: &mut SequentialIds, width: &str, height: &str) -> OpeningCollection {
        let doors = OpeningCollection::new().add(ids);
        let id = doors.last_id().unwrap();
        doors
            .update(id, OpeningField::Width, width)
            .update(id, OpeningField::Height, height)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_wall_area_formula() {
        let dims = RoomDimensions::new(8.0, 12.0, 15.0, 2.0);
        let expected = 2.0 * FEET_TO_METERS * FEET_TO_METERS * (15.0 * 8.0 + 12.0 * 8.0);
        assert!(close(wall_area_m2(&dims), expected));
    }

    #[test]
    fn test_default_room_no_openings() {
        let none = OpeningCollection::new();
        let result = calculate_paint_needed(&RoomDimensions::default(), &none, &none, 10.0);

        assert!((result.wall_area - 40.134).abs() < 0.001);
        assert_eq!(result.door_window_area, 0.0);
        assert_eq!(result.paintable_area, result.wall_area);
        assert!((result.paint_needed - 8.027).abs() < 0.001);
        assert_eq!(result.coverage, 10.0);
    }

    #[test]
    fn test_default_room_with_door() {
        let mut ids = SequentialIds::default();
        let doors = door(&mut ids, "3", "7");
        let none = OpeningCollection::new();
        let result = calculate_paint_needed(&RoomDimensions::default(), &doors, &none, 10.0);

        assert!((result.door_window_area - 1.951).abs() < 0.001);
        assert!((result.paintable_area - 38.183).abs() < 0.001);
        assert!((result.paint_needed - 7.637).abs() < 0.001);
    }

    #[test]
    fn test_doors_and_windows_are_summed_alike() {
        let mut ids = SequentialIds::default();
        let openings = door(&mut ids, "3", "7");
        let none = OpeningCollection::new();
        let dims = RoomDimensions::default();

        let as_door = calculate_paint_needed(&dims, &openings, &none, 10.0);
        let as_window = calculate_paint_needed(&dims, &none, &openings, 10.0);
        assert_eq!(as_door, as_window);
    }

    #[test]
    fn test_paintable_plus_openings_is_wall() {
        let mut ids = SequentialIds::default();
        let doors = door(&mut ids, "3", "7");
        let windows = door(&mut ids, "4.5", "3.25");
        let result =
            calculate_paint_needed(&RoomDimensions::new(9.0, 11.0, 13.0, 1.0), &doors, &windows, 8.0);

        assert!(close(
            result.paintable_area + result.door_window_area,
            result.wall_area
        ));
    }

    #[test]
    fn test_doubling_coats_doubles_paint() {
        let none = OpeningCollection::new();
        let dims = RoomDimensions::default();
        let one = calculate_paint_needed(&dims.with_coats(1.0), &none, &none, 10.0);
        let two = calculate_paint_needed(&dims.with_coats(2.0), &none, &none, 10.0);
        assert!(close(two.paint_needed, 2.0 * one.paint_needed));
    }

    #[test]
    fn test_referentially_transparent() {
        let mut ids = SequentialIds::default();
        let doors = door(&mut ids, "3", "7");
        let none = OpeningCollection::new();
        let dims = RoomDimensions::default();
        assert_eq!(
            calculate_paint_needed(&dims, &doors, &none, 9.0),
            calculate_paint_needed(&dims, &doors, &none, 9.0)
        );
    }

    #[test]
    fn test_default_coverage_helper() {
        let none = OpeningCollection::new();
        let dims = RoomDimensions::default();
        assert_eq!(
            calculate_with_default_coverage(&dims, &none, &none),
            calculate_paint_needed(&dims, &none, &none, 10.0)
        );
    }

    // ==================== degenerate inputs (accepted, not rejected) ====================

    #[test]
    fn test_openings_exceeding_walls_go_negative() {
        let mut ids = SequentialIds::default();
        let huge = door(&mut ids, "100", "100");
        let none = OpeningCollection::new();
        let result = calculate_paint_needed(&RoomDimensions::default(), &huge, &none, 10.0);

        assert!(result.paintable_area < 0.0);
        assert!(result.paint_needed < 0.0);
        assert!(result.is_over_subtracted());
    }

    #[test]
    fn test_zero_coverage_is_infinite() {
        let none = OpeningCollection::new();
        let result = calculate_paint_needed(&RoomDimensions::default(), &none, &none, 0.0);
        assert!(result.paint_needed.is_infinite());
        assert!(!result.has_finite_paint());
        assert_eq!(result.coverage, 0.0);
    }

    #[test]
    fn test_negative_coverage_flips_sign() {
        let none = OpeningCollection::new();
        let result = calculate_paint_needed(&RoomDimensions::default(), &none, &none, -10.0);
        assert!(result.paint_needed < 0.0);
    }
}
