//! Authority login endpoint.

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use super::extract::ApiJson;
use crate::{login, AppState, LoginRequest, SafetyResult};

// ---

pub fn router() -> Router<AppState> {
    Router::new().route("/auth/login", post(handle_login))
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    authenticated: bool,
    username: String,
}

async fn handle_login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> SafetyResult<Json<LoginResponse>> {
    // ---
    login(state.verifier.as_ref(), &request)?;
    Ok(Json(LoginResponse {
        authenticated: true,
        username: request.username.trim().to_string(),
    }))
}
