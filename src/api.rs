//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::binding::ChartDescription;
pub use crate::binding::ChartSlot;
pub use crate::binding::ChartUpdate;
pub use crate::controls::ControlId;
pub use crate::controls::ControlRegistry;
pub use crate::controls::ControlState;
pub use crate::controls::PayloadRange;
pub use crate::controls::RangeDomain;
pub use crate::controls::SiteSelection;
pub use crate::models::LaunchOutcome;
pub use crate::models::LaunchRecord;
pub use crate::models::PayloadBounds;
pub use crate::routes::payload_scatter::PayloadScatterChart;
pub use crate::routes::payload_scatter::ScatterPoint;
pub use crate::routes::site_summary::PieSlice;
pub use crate::routes::site_summary::SiteSummaryChart;
