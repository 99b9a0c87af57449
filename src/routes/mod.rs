//! Chart DTO types for the dashboard API, one module per chart slot.

pub mod payload_scatter;
pub mod site_summary;
