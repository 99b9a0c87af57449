//! Immutable in-memory dataset store.
//!
//! The store owns the full sequence of launch records plus the scalar
//! payload bounds derived from them. It is created once at startup, shared
//! read-only (typically behind an `Arc`), and never mutated afterwards, so
//! concurrent chart recomputations need no locking.

use std::path::{Path, PathBuf};

use log::info;

use crate::models::{LaunchRecord, PayloadBounds};
use crate::parsing::csv_parser;

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, DataLoadError>;

/// Error type for dataset loading. Fatal at startup: the HTTP listener must
/// not start if the dataset cannot be loaded and validated.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The source file is missing or unreadable.
    #[error("failed to read dataset file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: polars::error::PolarsError,
    },

    /// The file was readable but not valid tabular data.
    #[error("malformed dataset: {0}")]
    Malformed(String),

    /// A required column is absent.
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A cell failed load-time validation.
    #[error("invalid value in column '{column}' at row {row}: {details}")]
    InvalidValue {
        column: &'static str,
        row: usize,
        details: String,
    },

    /// Zero records: payload bounds would be undefined.
    #[error("dataset contains no records")]
    Empty,
}

impl DataLoadError {
    pub(crate) fn read(path: &Path, source: polars::error::PolarsError) -> Self {
        DataLoadError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The immutable launch-record table and its derived payload bounds.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<LaunchRecord>,
    bounds: PayloadBounds,
    /// Distinct launch sites in first-seen order. This is the deterministic
    /// order used by both the site selector options and the "ALL" pie.
    sites: Vec<String>,
}

impl DatasetStore {
    /// Load the dataset from a CSV file. Called exactly once per process.
    pub fn load(csv_path: &Path) -> LoadResult<Self> {
        let records = csv_parser::parse_launch_csv_to_records(csv_path)?;
        let store = Self::from_records(records)?;
        info!(
            "Loaded {} launch records from {} ({} sites, payload {:.1}..{:.1} kg)",
            store.records.len(),
            csv_path.display(),
            store.sites.len(),
            store.bounds.min,
            store.bounds.max,
        );
        Ok(store)
    }

    /// Build a store from already-typed records (tests, embedding).
    pub fn from_records(records: Vec<LaunchRecord>) -> LoadResult<Self> {
        let bounds = PayloadBounds::from_records(&records).ok_or(DataLoadError::Empty)?;

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }

        Ok(Self {
            records,
            bounds,
            sites,
        })
    }

    /// The full ordered record sequence.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Min/max payload mass over all records.
    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Distinct launch sites in first-seen order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }
}
