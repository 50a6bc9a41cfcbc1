//! Core library for the `tourist-safety` backend service.
//!
//! Holds the zone registry, alert store, tourist directory, safety-score
//! classifier and the HTTP routes that expose them. The binary in `main.rs`
//! only wires configuration, logging and the listener around [`app`].
//!
//! This crate follows the Explicit Module Boundary Pattern (EMBP): each
//! module exports a narrow surface, re-exported here, and route modules only
//! import from the crate root.

use axum::Router;

pub mod alerts;
pub mod auth;
pub mod config;
pub mod error;
pub mod map;
pub mod models;
pub mod score;
pub mod seed;
pub mod state;
pub mod tourists;
pub mod zones;

mod routes;

pub use alerts::{AlertRecord, AlertStatus, AlertStore, Priority, StatusCounts, StatusFilter};
pub use auth::{login, CredentialVerifier, LoginRequest, StaticCredentialVerifier};
pub use config::Config;
pub use error::{SafetyError, SafetyResult};
pub use map::{MapScene, MapSettings, SceneRequest};
pub use models::{relative_age, GeoPoint, Tone};
pub use score::{classify_score, validate_score, ScoreBadge, ScoreTier, TouristStatus};
pub use state::AppState;
pub use tourists::{
    issue_tourist_id, tier_counts, DigitalTouristId, TierCounts, TouristDirectory, TouristIdRequest,
    TouristRecord,
};
pub use zones::{classify, Classification, Zone, ZoneRegistry, ZoneStyle};

// ---

/// Build the full HTTP application from shared state.
pub fn app(state: AppState) -> Router {
    routes::router(state)
}
