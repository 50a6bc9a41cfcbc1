//! Shared application state handed to every route.
//!
//! Stores are constructed once at startup and passed to handlers through
//! axum's `State` extractor; there are no global singletons. The zone
//! registry and tourist directory are read-only. The alert store sits behind
//! a single mutex so `resolve` calls are serialized.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::alerts::AlertStore;
use crate::auth::{CredentialVerifier, StaticCredentialVerifier};
use crate::map::MapSettings;
use crate::seed;
use crate::tourists::TouristDirectory;
use crate::zones::ZoneRegistry;
use crate::Config;

// ---

#[derive(Clone)]
pub struct AppState {
    pub zones: Arc<ZoneRegistry>,
    pub alerts: Arc<Mutex<AlertStore>>,
    pub tourists: Arc<TouristDirectory>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub map: Arc<MapSettings>,
}

impl AppState {
    // ---
    pub fn new(
        zones: ZoneRegistry,
        alerts: AlertStore,
        tourists: TouristDirectory,
        verifier: Arc<dyn CredentialVerifier>,
        map: MapSettings,
    ) -> Self {
        AppState {
            zones: Arc::new(zones),
            alerts: Arc::new(Mutex::new(alerts)),
            tourists: Arc::new(tourists),
            verifier,
            map: Arc::new(map),
        }
    }

    /// Build state from config, seeding every store from the static tables.
    pub fn seeded(config: &Config, now: DateTime<Utc>) -> Self {
        // ---
        let verifier = StaticCredentialVerifier::new(
            config.authority_username.clone(),
            config.authority_password.clone(),
        );
        let map = MapSettings {
            style_url: config.map_style_url.clone(),
            zoom: config.map_zoom,
            pitch: config.map_pitch,
        };

        let state = AppState::new(
            ZoneRegistry::new(seed::kaziranga_zones()),
            AlertStore::new(seed::alerts(now)),
            TouristDirectory::new(seed::tourists(now)),
            Arc::new(verifier),
            map,
        );

        tracing::info!(
            zones = state.zones.list_zones().len(),
            tourists = state.tourists.list().len(),
            "Stores seeded"
        );
        state
    }
}
