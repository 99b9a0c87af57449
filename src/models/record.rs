//! Core data structures for a single launch event.
//!
//! A [`LaunchRecord`] replaces the loose string-keyed row access of the
//! source dataset with named, typed fields validated once at load time.

use serde::{Deserialize, Serialize};

/// Outcome of a launch, mapped from the binary `class` column.
///
/// # Examples
///
/// ```
/// use lrd_rust::models::LaunchOutcome;
///
/// assert_eq!(LaunchOutcome::from_class(1), Some(LaunchOutcome::Success));
/// assert_eq!(LaunchOutcome::from_class(0), Some(LaunchOutcome::Failure));
/// assert_eq!(LaunchOutcome::from_class(2), None);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchOutcome {
    Failure,
    Success,
}

impl LaunchOutcome {
    /// Map a raw `class` value to an outcome. Only 0 and 1 are legal.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(LaunchOutcome::Failure),
            1 => Some(LaunchOutcome::Success),
            _ => None,
        }
    }

    /// The raw class value (1 = success, 0 = failure).
    pub fn class(&self) -> u8 {
        match self {
            LaunchOutcome::Success => 1,
            LaunchOutcome::Failure => 0,
        }
    }

    /// Human-readable label used in pie-chart slices.
    pub fn label(&self) -> &'static str {
        match self {
            LaunchOutcome::Success => "success",
            LaunchOutcome::Failure => "failed",
        }
    }
}

/// One launch event row: site, payload mass, binary outcome.
///
/// Records are immutable once loaded and held as an ordered sequence for
/// the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site name, one of a finite set present in the dataset.
    pub site: String,
    /// Payload mass in kilograms. Non-negative and finite after load.
    pub payload_mass_kg: f64,
    /// Launch outcome.
    pub outcome: LaunchOutcome,
}

impl LaunchRecord {
    pub fn new(site: impl Into<String>, payload_mass_kg: f64, outcome: LaunchOutcome) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg,
            outcome,
        }
    }
}

/// Min/max payload mass over the full dataset, computed once at load.
///
/// Invariant: `min <= max`, and every record's payload lies in `[min, max]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// Compute bounds over a non-empty set of records.
    /// Returns `None` for an empty slice, where bounds are undefined.
    pub fn from_records(records: &[LaunchRecord]) -> Option<Self> {
        let mut iter = records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }
}
