//! Data Transfer Objects for the HTTP API.
//!
//! Chart DTOs are re-exported from the routes module since they already
//! derive Serialize/Deserialize; the types here cover the control-change
//! requests and composite responses.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Binding
    ChartDescription, ChartSlot, ChartUpdate,
    // Controls
    ControlRegistry, PayloadRange, RangeDomain,
    // Payload scatter
    PayloadScatterChart, ScatterPoint,
    // Site summary
    PieSlice, SiteSummaryChart,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records held in memory
    pub records: usize,
}

/// Descriptor of one control for the frontend to build its widget from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsDescriptor {
    /// Site selector options, sentinel first, in deterministic order.
    pub site_options: Vec<String>,
    /// Payload slider domain.
    pub payload_domain: RangeDomain,
    /// Currently selected site value.
    pub selected_site: String,
    /// Currently selected payload window.
    pub selected_payload: PayloadRange,
}

/// Initial-render response: the controls plus every chart slot populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub controls: ControlsDescriptor,
    pub charts: Vec<ChartUpdate>,
}

/// Request body for a site-selector change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSiteRequest {
    /// `"ALL"` or a launch-site name.
    pub value: String,
}

/// Request body for a payload-range change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPayloadRangeRequest {
    pub low: f64,
    pub high: f64,
}

/// Response to a control change: only the chart slots bound to the changed
/// control, freshly rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlChangeResponse {
    pub updates: Vec<ChartUpdate>,
}
