use serde::{Deserialize, Serialize};

// =========================================================
// Site summary (pie chart) types
// =========================================================

/// One labeled slice of the success pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Chart-ready summary for the success pie.
///
/// With the "ALL" selection the slices are launch counts per site; with a
/// specific site they are success/failed counts for that site. An absent
/// category is simply not emitted; zero-count slices are never synthesized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSummaryChart {
    /// Chart title shown above the pie.
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl SiteSummaryChart {
    /// Total count across all slices.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// Route function name constant for the site summary chart
pub const GET_SITE_SUMMARY_CHART: &str = "get_site_summary_chart";
