//! Coat count suggestion based on wall area.

use crate::config::{RECOMMEND_DEFAULT_COATS, RECOMMEND_THREE_COATS_ABOVE, RECOMMEND_TWO_COATS_ABOVE};
use crate::model::CalculationResult;

/// Suggest how many coats to apply.
///
/// Larger rooms get more coats; with no result the usual two coats are
/// suggested.
pub fn recommend_coats(result: Option<&CalculationResult>) -> u32 {
    match result {
        Some(r) if r.wall_area > RECOMMEND_THREE_COATS_ABOVE => 3,
        Some(r) if r.wall_area > RECOMMEND_TWO_COATS_ABOVE => 2,
        Some(_) => 1,
        None => RECOMMEND_DEFAULT_COATS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_wall(wall_area: f64) -> CalculationResult {
        CalculationResult {
            wall_area,
            door_window_area: 0.0,
            paintable_area: wall_area,
            paint_needed: 0.0,
            coverage: 10.0,
        }
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert_eq!(recommend_coats(Some(&with_wall(60.0))), 3);
        assert_eq!(recommend_coats(Some(&with_wall(50.0))), 2);
        assert_eq!(recommend_coats(Some(&with_wall(40.1))), 2);
        assert_eq!(recommend_coats(Some(&with_wall(30.0))), 1);
        assert_eq!(recommend_coats(Some(&with_wall(5.0))), 1);
    }

    #[test]
    fn test_recommendation_without_result() {
        assert_eq!(recommend_coats(None), 2);
    }
}
