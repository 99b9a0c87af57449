use crate::controls::PayloadRange;
use crate::models::LaunchRecord;
use crate::parsing::csv_parser::{COL_CLASS, COL_PAYLOAD_MASS};
use crate::routes::payload_scatter::{PayloadScatterChart, ScatterPoint};

/// Compute the payload/outcome scatter chart for the current payload window.
///
/// Keeps every record whose payload mass lies inside the inclusive
/// `[low, high]` bounds and emits one point per surviving record, colored by
/// launch site. The site selector is deliberately not an input: the scatter
/// always reflects all sites within the chosen payload window, exactly as
/// the source dashboard wired it. Zero surviving records produce a valid
/// empty chart.
pub fn payload_outcome_scatter(range: &PayloadRange, records: &[LaunchRecord]) -> PayloadScatterChart {
    let points = records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .map(ScatterPoint::from)
        .collect();

    PayloadScatterChart {
        x_label: COL_PAYLOAD_MASS.to_string(),
        y_label: COL_CLASS.to_string(),
        points,
    }
}
