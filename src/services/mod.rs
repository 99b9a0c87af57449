//! Aggregation functions producing chart-ready data.
//!
//! Each function is pure and total over its declared inputs: given the
//! current value of one control and the record table, it computes the exact
//! summary a chart slot needs. No hidden state, so identical inputs always
//! yield identical output.

pub mod payload_scatter;
pub mod site_summary;

pub use payload_scatter::payload_outcome_scatter;
pub use site_summary::site_success_summary;
