//! Zone catalog endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::{classify, AppState, SafetyResult, Zone, ZoneStyle};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/zones", get(list_zones))
        .route("/zones/{name}", get(get_zone))
}

#[derive(Debug, Serialize)]
struct ZoneView {
    #[serde(flatten)]
    zone: Zone,
    style: ZoneStyle,
}

impl From<&Zone> for ZoneView {
    fn from(zone: &Zone) -> Self {
        ZoneView {
            zone: zone.clone(),
            style: classify(zone),
        }
    }
}

#[derive(Debug, Serialize)]
struct ZonesResponse {
    zones: Vec<ZoneView>,
    total_occupancy: u32,
}

async fn list_zones(State(state): State<AppState>) -> Json<ZonesResponse> {
    // ---
    let zones: Vec<ZoneView> = state.zones.list_zones().iter().map(ZoneView::from).collect();
    debug!("GET /zones - returning {} zones", zones.len());
    Json(ZonesResponse {
        zones,
        total_occupancy: state.zones.total_occupancy(),
    })
}

async fn get_zone(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> SafetyResult<Json<ZoneView>> {
    // ---
    let zone = state.zones.find(&name)?;
    Ok(Json(ZoneView::from(zone)))
}
