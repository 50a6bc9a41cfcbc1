//! Authority dashboard summary.
//!
//! Every figure is derived from the stores at request time.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{tier_counts, AppState, StatusCounts, TierCounts};

// ---

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(summary))
}

#[derive(Debug, Serialize)]
struct DashboardSummary {
    total_tourists: usize,
    active_tourists: usize,
    active_alerts: usize,
    avg_safety_score: Option<i32>,
    zone_occupancy: u32,
    tourist_tiers: TierCounts,
    alerts: StatusCounts,
}

async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    // ---
    let tourist_tiers = tier_counts(state.tourists.list());
    let alerts = state.alerts.lock().await.counts();

    Json(DashboardSummary {
        total_tourists: state.tourists.list().len(),
        active_tourists: tourist_tiers.active,
        active_alerts: alerts.active,
        avg_safety_score: state.tourists.average_score(),
        zone_occupancy: state.zones.total_occupancy(),
        tourist_tiers,
        alerts,
    })
}
