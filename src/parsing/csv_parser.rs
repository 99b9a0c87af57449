use polars::prelude::*;
use std::path::Path;

use crate::models::{LaunchOutcome, LaunchRecord};
use crate::store::DataLoadError;

/// Column holding the launch site name.
pub const COL_LAUNCH_SITE: &str = "Launch Site";
/// Column holding the payload mass in kilograms.
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
/// Column holding the binary launch outcome (1 = success, 0 = failure).
pub const COL_CLASS: &str = "class";

/// Columns the dataset file must provide. Any other columns are ignored.
/// The names are a hard external contract with the data source.
pub const REQUIRED_COLUMNS: [&str; 3] = [COL_LAUNCH_SITE, COL_PAYLOAD_MASS, COL_CLASS];

/// Parse a launch-records CSV file into a Polars DataFrame.
///
/// Verifies the required columns are present and casts them to the expected
/// dtypes (the CSV reader may infer `class` and payload mass as integers).
pub fn parse_launch_csv(csv_path: &Path) -> Result<DataFrame, DataLoadError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))
        .map_err(|e| DataLoadError::read(csv_path, e))?
        .finish()
        .map_err(|e| DataLoadError::read(csv_path, e))?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !column_names.contains(&required.to_string()) {
            return Err(DataLoadError::MissingColumn(required));
        }
    }

    // Cast columns to expected types if they were inferred incorrectly
    let df = df
        .lazy()
        .with_column(col(COL_LAUNCH_SITE).cast(DataType::String))
        .with_column(
            when(col(COL_PAYLOAD_MASS).is_not_null())
                .then(col(COL_PAYLOAD_MASS).cast(DataType::Float64))
                .otherwise(lit(NULL).cast(DataType::Float64))
                .alias(COL_PAYLOAD_MASS),
        )
        .with_column(col(COL_CLASS).cast(DataType::Int64))
        .collect()
        .map_err(|e| DataLoadError::Malformed(format!("failed to cast columns: {}", e)))?;

    Ok(df)
}

/// Parse a CSV file and convert it to typed launch records.
pub fn parse_launch_csv_to_records(csv_path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let df = parse_launch_csv(csv_path)?;
    dataframe_to_records(&df)
}

/// Convert a Polars DataFrame to typed [`LaunchRecord`] structures.
///
/// Validation happens here, once, so that every downstream consumer can rely
/// on non-empty site names, finite non-negative payload masses, and a
/// strictly binary outcome class.
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let malformed = |e: PolarsError| DataLoadError::Malformed(e.to_string());

    let sites = df.column(COL_LAUNCH_SITE).map_err(malformed)?.str().map_err(malformed)?;
    let payloads = df.column(COL_PAYLOAD_MASS).map_err(malformed)?.f64().map_err(malformed)?;
    let classes = df.column(COL_CLASS).map_err(malformed)?.i64().map_err(malformed)?;

    let mut records = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let site = sites.get(i).ok_or_else(|| DataLoadError::InvalidValue {
            column: COL_LAUNCH_SITE,
            row: i,
            details: "missing site name".to_string(),
        })?;
        if site.is_empty() {
            return Err(DataLoadError::InvalidValue {
                column: COL_LAUNCH_SITE,
                row: i,
                details: "empty site name".to_string(),
            });
        }

        let payload_mass_kg = payloads.get(i).ok_or_else(|| DataLoadError::InvalidValue {
            column: COL_PAYLOAD_MASS,
            row: i,
            details: "missing payload mass".to_string(),
        })?;
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(DataLoadError::InvalidValue {
                column: COL_PAYLOAD_MASS,
                row: i,
                details: format!("payload mass must be a non-negative number, got {}", payload_mass_kg),
            });
        }

        let class = classes.get(i).ok_or_else(|| DataLoadError::InvalidValue {
            column: COL_CLASS,
            row: i,
            details: "missing outcome class".to_string(),
        })?;
        let outcome = LaunchOutcome::from_class(class).ok_or_else(|| DataLoadError::InvalidValue {
            column: COL_CLASS,
            row: i,
            details: format!("outcome class must be 0 or 1, got {}", class),
        })?;

        records.push(LaunchRecord {
            site: site.to_string(),
            payload_mass_kg,
            outcome,
        });
    }

    Ok(records)
}
