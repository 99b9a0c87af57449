use serde::{Deserialize, Serialize};

use crate::models::LaunchRecord;

// =========================================================
// Payload scatter types
// =========================================================

/// One point of the payload/outcome scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// x: payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// y: raw outcome class (1 = success, 0 = failure).
    pub outcome_class: u8,
    /// Color grouping: launch site of the record.
    pub site: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            outcome_class: record.outcome.class(),
            site: record.site.clone(),
        }
    }
}

/// Chart-ready point list for the payload/outcome scatter.
///
/// An empty point list is a valid chart (renders empty), not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadScatterChart {
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

/// Route function name constant for the payload scatter chart
pub const GET_PAYLOAD_SCATTER_CHART: &str = "get_payload_scatter_chart";
