use crate::controls::SiteSelection;
use crate::models::{LaunchOutcome, LaunchRecord};
use crate::routes::site_summary::{PieSlice, SiteSummaryChart};

/// Title of the pie chart when every site is selected.
const ALL_SITES_TITLE: &str = "All Launch Sites";

/// Compute the success pie chart for the current site selection.
///
/// With [`SiteSelection::All`] the chart has one slice per distinct site
/// counting every launch there, success and failure combined. This mirrors
/// the source dashboard, which answers "how many launches per site" in the
/// all-sites view and "how did this site do" in the per-site view.
///
/// With a specific site the records are filtered to that site and
/// partitioned by outcome into "success" / "failed" slices. A class with no
/// occurrences is omitted, matching group-by semantics. An unknown site
/// yields an empty slice list rather than an error.
pub fn site_success_summary(selection: &SiteSelection, records: &[LaunchRecord]) -> SiteSummaryChart {
    match selection {
        SiteSelection::All => all_sites_summary(records),
        SiteSelection::Site(site) => single_site_summary(site, records),
    }
}

/// One slice per distinct site, in first-seen order. The selector options
/// are derived the same way, so chart categories and dropdown entries
/// always agree.
fn all_sites_summary(records: &[LaunchRecord]) -> SiteSummaryChart {
    let mut sites: Vec<&str> = Vec::new();
    for record in records {
        if !sites.contains(&record.site.as_str()) {
            sites.push(&record.site);
        }
    }

    let slices = sites
        .into_iter()
        .map(|site| {
            let count = records.iter().filter(|r| r.site == site).count();
            PieSlice::new(site, count)
        })
        .collect();

    SiteSummaryChart {
        title: ALL_SITES_TITLE.to_string(),
        slices,
    }
}

fn single_site_summary(site: &str, records: &[LaunchRecord]) -> SiteSummaryChart {
    let mut successes = 0usize;
    let mut failures = 0usize;
    for record in records.iter().filter(|r| r.site == site) {
        match record.outcome {
            LaunchOutcome::Success => successes += 1,
            LaunchOutcome::Failure => failures += 1,
        }
    }

    // Absent categories are not emitted; never synthesize a zero slice.
    let mut slices = Vec::with_capacity(2);
    if successes > 0 {
        slices.push(PieSlice::new(LaunchOutcome::Success.label(), successes));
    }
    if failures > 0 {
        slices.push(PieSlice::new(LaunchOutcome::Failure.label(), failures));
    }

    SiteSummaryChart {
        title: site.to_string(),
        slices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::SiteSelection;

    fn sample_records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("A", 500.0, LaunchOutcome::Success),
            LaunchRecord::new("A", 1500.0, LaunchOutcome::Failure),
            LaunchRecord::new("B", 3000.0, LaunchOutcome::Success),
        ]
    }

    #[test]
    fn test_all_sites_counts_every_launch_per_site() {
        let chart = site_success_summary(&SiteSelection::All, &sample_records());

        assert_eq!(chart.title, "All Launch Sites");
        assert_eq!(
            chart.slices,
            vec![PieSlice::new("A", 2), PieSlice::new("B", 1)]
        );
    }

    #[test]
    fn test_all_sites_order_matches_first_seen() {
        let records = vec![
            LaunchRecord::new("B", 100.0, LaunchOutcome::Success),
            LaunchRecord::new("A", 200.0, LaunchOutcome::Success),
            LaunchRecord::new("B", 300.0, LaunchOutcome::Failure),
        ];
        let chart = site_success_summary(&SiteSelection::All, &records);
        let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A"]);
    }

    #[test]
    fn test_single_site_splits_by_outcome() {
        let selection = SiteSelection::Site("A".to_string());
        let chart = site_success_summary(&selection, &sample_records());

        assert_eq!(chart.title, "A");
        assert_eq!(
            chart.slices,
            vec![PieSlice::new("success", 1), PieSlice::new("failed", 1)]
        );
    }

    #[test]
    fn test_single_site_omits_absent_class() {
        let selection = SiteSelection::Site("B".to_string());
        let chart = site_success_summary(&selection, &sample_records());

        // Site B has no failures, so no zero-count "failed" slice appears
        assert_eq!(chart.slices, vec![PieSlice::new("success", 1)]);
    }

    #[test]
    fn test_unknown_site_yields_empty_chart() {
        let selection = SiteSelection::Site("NO SUCH SITE".to_string());
        let chart = site_success_summary(&selection, &sample_records());
        assert!(chart.slices.is_empty());
    }

    #[test]
    fn test_per_site_counts_sum_to_site_total() {
        let records = sample_records();
        for site in ["A", "B"] {
            let selection = SiteSelection::Site(site.to_string());
            let chart = site_success_summary(&selection, &records);
            let site_total = records.iter().filter(|r| r.site == site).count();
            assert_eq!(chart.total(), site_total);
        }
    }

    #[test]
    fn test_empty_records_yield_empty_chart() {
        let chart = site_success_summary(&SiteSelection::All, &[]);
        assert!(chart.slices.is_empty());
    }
}
