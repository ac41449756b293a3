//! JSON output for `--json`.

use paint_core::{chart_data, recommend_coats, ChartData, Session};
use serde::Serialize;

/// Everything a downstream tool needs to display an estimate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub session: &'a Session,
    pub recommended_coats: u32,
    pub chart: Option<ChartData>,
}

impl<'a> JsonReport<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            recommended_coats: recommend_coats(session.result.as_ref()),
            chart: session.result.as_ref().map(chart_data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_report_without_result() {
        let session = Session::default();
        let json = serde_json::to_value(JsonReport::new(&session)).unwrap();
        assert_eq!(json["recommendedCoats"], 2);
        assert!(json["chart"].is_null());
        assert!(json["session"]["result"].is_null());
    }

    #[test]
    fn test_json_report_with_result() {
        let (session, _) = Session::default().trigger();
        let json = serde_json::to_value(JsonReport::new(&session)).unwrap();
        assert_eq!(json["session"]["result"]["coverage"], 10.0);
        assert_eq!(json["chart"]["doughnut"]["points"][1]["value"], 0.0);
        assert_eq!(json["session"]["dimensions"]["height"], 8.0);
    }
}
