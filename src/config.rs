//! Configuration loader for the `tourist-safety` backend service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). Authority credentials are always supplied from the
//! environment; nothing secret is compiled into the binary.
//!
use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional numeric environment variable with a default value.
macro_rules! parse_env {
    ($var_name:expr, $ty:ty, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/satellite-streets-v12";

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Port the HTTP server binds on.
    pub http_port: u16,

    /// Username accepted by the authority login.
    pub authority_username: String,

    /// Password accepted by the authority login.
    pub authority_password: String,

    /// Style URL handed to the map tile provider.
    pub map_style_url: String,

    /// Initial map zoom level.
    pub map_zoom: u32,

    /// Initial map pitch in degrees.
    pub map_pitch: u32,
}

/// Load configuration from environment variables with defaults.
///
/// Required:
/// - `AUTHORITY_USERNAME` – authority dashboard login name
/// - `AUTHORITY_PASSWORD` – authority dashboard password
///
/// Optional:
/// - `HTTP_PORT` – listen port (default: 8080)
/// - `MAP_STYLE_URL` – map style (default: Mapbox satellite streets)
/// - `MAP_ZOOM` – initial zoom (default: 12)
/// - `MAP_PITCH` – initial pitch (default: 45)
///
/// Returns an error if any required variable is missing or invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let authority_username = require_env!("AUTHORITY_USERNAME");
    let authority_password = require_env!("AUTHORITY_PASSWORD");
    let http_port = parse_env!("HTTP_PORT", u16, 8080);
    let map_zoom = parse_env!("MAP_ZOOM", u32, 12);
    let map_pitch = parse_env!("MAP_PITCH", u32, 45);
    let map_style_url = env::var("MAP_STYLE_URL").unwrap_or_else(|_| DEFAULT_MAP_STYLE.into());

    if authority_username.trim().is_empty() || authority_password.is_empty() {
        return Err(anyhow!(
            "AUTHORITY_USERNAME and AUTHORITY_PASSWORD must not be empty"
        ));
    }

    Ok(Config {
        http_port,
        authority_username,
        authority_password,
        map_style_url,
        map_zoom,
        map_pitch,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// The authority password is never printed; only its presence is shown.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  HTTP_PORT          : {}", self.http_port);
        tracing::info!("  AUTHORITY_USERNAME : {}", self.authority_username);
        tracing::info!("  AUTHORITY_PASSWORD : {}", masked(&self.authority_password));
        tracing::info!("  MAP_STYLE_URL      : {}", self.map_style_url);
        tracing::info!("  MAP_ZOOM           : {}", self.map_zoom);
        tracing::info!("  MAP_PITCH          : {}", self.map_pitch);
    }
}

fn masked(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "****"
    }
}
