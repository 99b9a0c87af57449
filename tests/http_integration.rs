//! Handler-level tests for the HTTP API, calling the axum handlers directly
//! with constructed extractors.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use lrd_rust::api::{ChartDescription, ChartSlot};
use lrd_rust::binding::Dashboard;
use lrd_rust::controls::DEFAULT_PAYLOAD_CEILING;
use lrd_rust::http::dto::{SetPayloadRangeRequest, SetSiteRequest};
use lrd_rust::http::{handlers, AppState};
use lrd_rust::models::{LaunchOutcome, LaunchRecord};
use lrd_rust::store::DatasetStore;

fn test_state() -> AppState {
    let store = DatasetStore::from_records(vec![
        LaunchRecord::new("CCAFS LC-40", 500.0, LaunchOutcome::Success),
        LaunchRecord::new("CCAFS LC-40", 1500.0, LaunchOutcome::Failure),
        LaunchRecord::new("VAFB SLC-4E", 3000.0, LaunchOutcome::Success),
    ])
    .unwrap();
    AppState::new(Dashboard::new(Arc::new(store), DEFAULT_PAYLOAD_CEILING))
}

#[tokio::test]
async fn health_reports_record_count() {
    let state = test_state();
    let Json(health) = handlers::health_check(State(state)).await.unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.version, "v1");
    assert_eq!(health.records, 3);
}

#[tokio::test]
async fn dashboard_returns_controls_and_all_charts() {
    let state = test_state();
    let Json(response) = handlers::get_dashboard(State(state)).await.unwrap();

    assert_eq!(
        response.controls.site_options,
        vec!["ALL", "CCAFS LC-40", "VAFB SLC-4E"]
    );
    assert_eq!(response.controls.selected_site, "ALL");
    assert_eq!(response.controls.payload_domain.min, 500.0);
    assert_eq!(response.controls.payload_domain.max, 10_000.0);
    assert_eq!(response.charts.len(), 2);
}

#[tokio::test]
async fn site_change_returns_only_the_pie() {
    let state = test_state();
    let request = SetSiteRequest {
        value: "CCAFS LC-40".to_string(),
    };
    let Json(response) = handlers::set_site(State(state), Json(request)).await.unwrap();

    assert_eq!(response.updates.len(), 1);
    assert_eq!(response.updates[0].slot, ChartSlot::SuccessPie);
    match &response.updates[0].chart {
        ChartDescription::Pie(pie) => assert_eq!(pie.total(), 2),
        other => panic!("Expected pie, got {:?}", other),
    }
}

#[tokio::test]
async fn payload_change_returns_only_the_scatter() {
    let state = test_state();
    let request = SetPayloadRangeRequest {
        low: 0.0,
        high: 2000.0,
    };
    let Json(response) = handlers::set_payload_range(State(state), Json(request))
        .await
        .unwrap();

    assert_eq!(response.updates.len(), 1);
    assert_eq!(response.updates[0].slot, ChartSlot::PayloadScatter);
    match &response.updates[0].chart {
        ChartDescription::Scatter(scatter) => assert_eq!(scatter.points.len(), 2),
        other => panic!("Expected scatter, got {:?}", other),
    }
}

#[tokio::test]
async fn unknown_site_yields_empty_pie_not_an_error() {
    let state = test_state();
    let request = SetSiteRequest {
        value: "NO SUCH SITE".to_string(),
    };
    let Json(response) = handlers::set_site(State(state), Json(request)).await.unwrap();

    match &response.updates[0].chart {
        ChartDescription::Pie(pie) => assert!(pie.slices.is_empty()),
        other => panic!("Expected pie, got {:?}", other),
    }
}

#[tokio::test]
async fn out_of_domain_payload_range_clamps() {
    let state = test_state();
    let request = SetPayloadRangeRequest {
        low: -5_000.0,
        high: 50_000.0,
    };
    let Json(response) = handlers::set_payload_range(State(state.clone()), Json(request))
        .await
        .unwrap();

    // Clamped window covers the whole dataset
    match &response.updates[0].chart {
        ChartDescription::Scatter(scatter) => assert_eq!(scatter.points.len(), 3),
        other => panic!("Expected scatter, got {:?}", other),
    }
    let dashboard = state.dashboard.read();
    assert_eq!(dashboard.state().payload.low, 500.0);
    assert_eq!(dashboard.state().payload.high, 10_000.0);
}

#[tokio::test]
async fn non_finite_payload_range_is_rejected() {
    let state = test_state();
    let request = SetPayloadRangeRequest {
        low: f64::NAN,
        high: 1_000.0,
    };
    let result = handlers::set_payload_range(State(state), Json(request)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn control_state_persists_between_requests() {
    let state = test_state();

    let request = SetSiteRequest {
        value: "VAFB SLC-4E".to_string(),
    };
    handlers::set_site(State(state.clone()), Json(request))
        .await
        .unwrap();

    let Json(response) = handlers::get_dashboard(State(state)).await.unwrap();
    assert_eq!(response.controls.selected_site, "VAFB SLC-4E");
}
