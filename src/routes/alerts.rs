//! Alert listing and lifecycle endpoints.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::alerts::AlertView;
use crate::{AppState, SafetyResult, StatusCounts, StatusFilter};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/alerts", get(list_alerts))
        .route("/alerts/{id}", get(get_alert))
        .route("/alerts/{id}/resolve", post(resolve_alert))
        .route("/alerts/{id}/escalate", post(escalate_alert))
}

/// Query parameters for `GET /alerts`.
#[derive(Debug, Deserialize)]
struct AlertsQuery {
    /// `all` (default), `active`, `investigating` or `resolved`.
    status: Option<String>,
}

#[derive(Debug, Serialize)]
struct AlertsResponse {
    alerts: Vec<AlertView>,
    counts: StatusCounts,
}

async fn list_alerts(
    Query(params): Query<AlertsQuery>,
    State(state): State<AppState>,
) -> SafetyResult<Json<AlertsResponse>> {
    // ---
    let filter = match params.status.as_deref() {
        Some(raw) => raw.parse::<StatusFilter>()?,
        None => StatusFilter::All,
    };
    debug!("GET /alerts - filter {:?}", filter);

    let now = Utc::now();
    let store = state.alerts.lock().await;
    let alerts = store
        .filter_by_status(filter)
        .into_iter()
        .map(|a| a.view(now))
        .collect();

    Ok(Json(AlertsResponse {
        alerts,
        counts: store.counts(),
    }))
}

async fn get_alert(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> SafetyResult<Json<AlertView>> {
    // ---
    let store = state.alerts.lock().await;
    Ok(Json(store.get(&id)?.view(Utc::now())))
}

async fn resolve_alert(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> SafetyResult<Json<AlertView>> {
    // ---
    info!("POST /alerts/{}/resolve", id);
    let mut store = state.alerts.lock().await;
    let record = store.resolve(&id)?;
    Ok(Json(record.view(Utc::now())))
}

async fn escalate_alert(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> SafetyResult<Json<AlertView>> {
    // ---
    info!("POST /alerts/{}/escalate", id);
    let store = state.alerts.lock().await;
    let record = store.escalate(&id)?;
    Ok(Json(record.view(Utc::now())))
}
