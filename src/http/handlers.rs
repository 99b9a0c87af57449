//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! binding layer for recomputation.

use axum::{extract::State, Json};

use super::dto::{
    ControlChangeResponse, ControlsDescriptor, DashboardResponse, HealthResponse, SetPayloadRangeRequest,
    SetSiteRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::binding::{ControlChange, Dashboard};
use crate::controls::{PayloadRange, SiteSelection};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn describe_controls(dashboard: &Dashboard) -> ControlsDescriptor {
    let registry = dashboard.registry();
    let state = dashboard.state();
    ControlsDescriptor {
        site_options: registry.site_options.clone(),
        payload_domain: registry.payload_domain,
        selected_site: String::from(state.site.clone()),
        selected_payload: state.payload,
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the dataset
/// is loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let records = state.dashboard.read().record_count();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records,
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/dashboard
///
/// Initial render: control descriptors plus every chart slot populated with
/// the current control state.
pub async fn get_dashboard(State(state): State<AppState>) -> HandlerResult<DashboardResponse> {
    let dashboard = state.dashboard.read();

    Ok(Json(DashboardResponse {
        controls: describe_controls(&dashboard),
        charts: dashboard.render_all(),
    }))
}

// =============================================================================
// Control Changes
// =============================================================================

/// POST /v1/controls/site-selector
///
/// Apply a site-selector change and return the chart updates bound to it.
pub async fn set_site(
    State(state): State<AppState>,
    Json(request): Json<SetSiteRequest>,
) -> HandlerResult<ControlChangeResponse> {
    let selection = SiteSelection::parse(&request.value);
    let updates = state
        .dashboard
        .write()
        .apply(ControlChange::SiteSelector(selection));

    Ok(Json(ControlChangeResponse { updates }))
}

/// POST /v1/controls/payload-range
///
/// Apply a payload-range change and return the chart updates bound to it.
/// Out-of-domain bounds clamp; non-finite bounds are rejected.
pub async fn set_payload_range(
    State(state): State<AppState>,
    Json(request): Json<SetPayloadRangeRequest>,
) -> HandlerResult<ControlChangeResponse> {
    if !request.low.is_finite() || !request.high.is_finite() {
        return Err(AppError::BadRequest(
            "payload range bounds must be finite numbers".to_string(),
        ));
    }

    let range = PayloadRange::new(request.low, request.high);
    let updates = state
        .dashboard
        .write()
        .apply(ControlChange::PayloadRange(range));

    Ok(Json(ControlChangeResponse { updates }))
}
