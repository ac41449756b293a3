//! Chart series derived from a calculation result.
//!
//! Drawing is left to the presentation layer; this only prepares the labelled
//! values it needs.

use serde::{Deserialize, Serialize};

use crate::model::CalculationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Paintable area against openings.
    Doughnut,
    /// Wall, openings and paintable area side by side.
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    /// Square meters.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    fn new(kind: ChartKind, points: &[(&str, f64)]) -> Self {
        Self {
            kind,
            points: points
                .iter()
                .map(|(label, value)| ChartPoint {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Each point as a percentage of the series total.
    ///
    /// Empty when the total is zero.
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0.0 {
            return Vec::new();
        }
        self.points.iter().map(|p| p.value / total * 100.0).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub doughnut: ChartSeries,
    pub bar: ChartSeries,
}

impl ChartData {
    pub fn series(&self, kind: ChartKind) -> &ChartSeries {
        match kind {
            ChartKind::Doughnut => &self.doughnut,
            ChartKind::Bar => &self.bar,
        }
    }
}

/// Build both chart series for a result.
pub fn chart_data(result: &CalculationResult) -> ChartData {
    ChartData {
        doughnut: ChartSeries::new(
            ChartKind::Doughnut,
            &[
                ("Paintable Area", result.paintable_area),
                ("Doors & Windows Area", result.door_window_area),
            ],
        ),
        bar: ChartSeries::new(
            ChartKind::Bar,
            &[
                ("Wall Area", result.wall_area),
                ("Doors & Windows", result.door_window_area),
                ("Paintable Area", result.paintable_area),
            ],
        ),
    }
}
