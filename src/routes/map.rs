//! Map scene endpoint.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use tracing::debug;

use crate::{AppState, MapScene, SafetyError, SafetyResult, SceneRequest};

// ---

pub fn router() -> Router<AppState> {
    Router::new().route("/map/scene", post(scene))
}

/// An empty body is a request without a token, so the client gets the same
/// `token` validation error it uses to show the token-entry form.
fn parse_scene_request(body: &[u8]) -> SafetyResult<SceneRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SceneRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| SafetyError::validation("body", e.to_string()))
}

async fn scene(State(state): State<AppState>, body: Bytes) -> SafetyResult<Json<MapScene>> {
    // ---
    let request = parse_scene_request(&body)?;
    let scene = MapScene::build(&state.zones, &state.map, request.token.as_deref())?;
    debug!("POST /map/scene - {} zones", state.zones.list_zones().len());
    Ok(Json(scene))
}
