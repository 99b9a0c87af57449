use std::sync::Arc;

use lrd_rust::api::{ChartDescription, ChartSlot, PayloadRange, PieSlice, SiteSelection};
use lrd_rust::binding::{ControlChange, Dashboard};
use lrd_rust::controls::DEFAULT_PAYLOAD_CEILING;
use lrd_rust::models::{LaunchOutcome, LaunchRecord};
use lrd_rust::store::DatasetStore;

fn record(site: &str, payload: f64, class: i64) -> LaunchRecord {
    LaunchRecord::new(site, payload, LaunchOutcome::from_class(class).unwrap())
}

/// The worked example: records {(A,500,1),(A,1500,0),(B,3000,1)}.
fn example_dashboard() -> Dashboard {
    let store = DatasetStore::from_records(vec![
        record("A", 500.0, 1),
        record("A", 1500.0, 0),
        record("B", 3000.0, 1),
    ])
    .unwrap();
    Dashboard::new(Arc::new(store), DEFAULT_PAYLOAD_CEILING)
}

#[test]
fn all_sites_pie_counts_total_launches_per_site() {
    let dashboard = example_dashboard();
    let update = dashboard.render(ChartSlot::SuccessPie);

    match update.chart {
        ChartDescription::Pie(pie) => {
            assert_eq!(pie.slices, vec![PieSlice::new("A", 2), PieSlice::new("B", 1)]);
        }
        other => panic!("Expected pie, got {:?}", other),
    }
}

#[test]
fn selected_site_pie_splits_success_and_failed() {
    let mut dashboard = example_dashboard();
    let updates = dashboard.apply(ControlChange::SiteSelector(SiteSelection::Site(
        "A".to_string(),
    )));

    assert_eq!(updates.len(), 1);
    match &updates[0].chart {
        ChartDescription::Pie(pie) => {
            assert_eq!(
                pie.slices,
                vec![PieSlice::new("success", 1), PieSlice::new("failed", 1)]
            );
        }
        other => panic!("Expected pie, got {:?}", other),
    }
}

#[test]
fn payload_window_excludes_records_outside() {
    let mut dashboard = example_dashboard();
    let updates = dashboard.apply(ControlChange::PayloadRange(PayloadRange::new(0.0, 2000.0)));

    match &updates[0].chart {
        ChartDescription::Scatter(scatter) => {
            let points: Vec<(f64, u8, &str)> = scatter
                .points
                .iter()
                .map(|p| (p.payload_mass_kg, p.outcome_class, p.site.as_str()))
                .collect();
            assert_eq!(points, vec![(500.0, 1, "A"), (1500.0, 0, "A")]);
        }
        other => panic!("Expected scatter, got {:?}", other),
    }
}

#[test]
fn control_change_never_recomputes_unrelated_slots() {
    let mut dashboard = example_dashboard();

    let site_updates = dashboard.apply(ControlChange::SiteSelector(SiteSelection::All));
    assert!(site_updates.iter().all(|u| u.slot == ChartSlot::SuccessPie));

    let range_updates =
        dashboard.apply(ControlChange::PayloadRange(PayloadRange::new(0.0, 1000.0)));
    assert!(range_updates
        .iter()
        .all(|u| u.slot == ChartSlot::PayloadScatter));
}

#[test]
fn scatter_reflects_all_sites_regardless_of_selection() {
    let mut dashboard = example_dashboard();
    dashboard.apply(ControlChange::SiteSelector(SiteSelection::Site(
        "A".to_string(),
    )));

    let update = dashboard.render(ChartSlot::PayloadScatter);
    match update.chart {
        ChartDescription::Scatter(scatter) => {
            // Site B's record is still present in the scatter
            assert!(scatter.points.iter().any(|p| p.site == "B"));
        }
        other => panic!("Expected scatter, got {:?}", other),
    }
}

#[test]
fn repeated_renders_are_identical() {
    let dashboard = example_dashboard();
    assert_eq!(dashboard.render_all(), dashboard.render_all());
}

#[test]
fn registry_reflects_dataset_not_hardcoded_sites() {
    let store = DatasetStore::from_records(vec![
        record("KSC LC-39A", 100.0, 1),
        record("CCAFS SLC-40", 200.0, 0),
    ])
    .unwrap();
    let dashboard = Dashboard::new(Arc::new(store), DEFAULT_PAYLOAD_CEILING);

    assert_eq!(
        dashboard.registry().site_options,
        vec!["ALL", "KSC LC-39A", "CCAFS SLC-40"]
    );
}
