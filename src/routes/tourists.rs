//! Tourist records and digital ID issuance endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::extract::ApiJson;
use crate::tourists::TouristView;
use crate::{
    issue_tourist_id, tier_counts, AppState, DigitalTouristId, SafetyResult, TierCounts,
    TouristIdRequest,
};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/tourists", get(search_tourists))
        .route("/tourists/{id}", get(get_tourist))
        .route("/tourist-ids", post(issue_id))
}

/// Query parameters for `GET /tourists`.
#[derive(Debug, Deserialize)]
struct TouristsQuery {
    /// Matched against name, tourist id and last location.
    q: Option<String>,
}

#[derive(Debug, Serialize)]
struct TouristsResponse {
    tourists: Vec<TouristView>,
    counts: TierCounts,
}

async fn search_tourists(
    Query(params): Query<TouristsQuery>,
    State(state): State<AppState>,
) -> Json<TouristsResponse> {
    // ---
    let term = params.q.unwrap_or_default();
    let matches = state.tourists.search(&term);
    debug!("GET /tourists - '{}' matched {} records", term, matches.len());

    let now = Utc::now();
    Json(TouristsResponse {
        counts: tier_counts(matches.iter().copied()),
        tourists: matches.into_iter().map(|t| t.view(now)).collect(),
    })
}

async fn get_tourist(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> SafetyResult<Json<TouristView>> {
    // ---
    let tourist = state.tourists.get(&id)?;
    Ok(Json(tourist.view(Utc::now())))
}

async fn issue_id(
    ApiJson(request): ApiJson<TouristIdRequest>,
) -> SafetyResult<(StatusCode, Json<DigitalTouristId>)> {
    // ---
    let issued = issue_tourist_id(&request)?;
    Ok((StatusCode::CREATED, Json(issued)))
}
