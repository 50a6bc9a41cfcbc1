use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

mod alerts;
mod auth;
mod dashboard;
mod extract;
mod health;
mod map;
mod score;
mod tourists;
mod zones;

// ---

pub fn router(state: AppState) -> Router {
    // ---
    Router::new()
        .merge(zones::router())
        .merge(alerts::router())
        .merge(tourists::router())
        .merge(score::router())
        .merge(auth::router())
        .merge(map::router())
        .merge(dashboard::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
