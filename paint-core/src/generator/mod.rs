//! Report and chart data generation.

mod chart;
mod report;

pub use chart::{chart_data, ChartData, ChartKind, ChartPoint, ChartSeries};
pub use report::{format_number, generate_report};
