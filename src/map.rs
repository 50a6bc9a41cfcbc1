//! Map display boundary.
//!
//! Builds everything the external map provider needs to draw the park: the
//! camera, one GeoJSON point feature per zone and a current-position marker.
//! The access token is supplied by the user at request time; without one the
//! scene is not built and the client falls back to its token-entry form.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{SafetyError, SafetyResult};
use crate::models::{GeoPoint, Tone};
use crate::seed::{CURRENT_POSITION, CURRENT_POSITION_ZONE, PARK_CENTER};
use crate::zones::{classify, ZoneRegistry};

// ---

#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub style_url: String,
    pub zoom: u32,
    pub pitch: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneRequest {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Camera {
    pub center: [f64; 2],
    pub zoom: u32,
    pub pitch: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub label: String,
    pub detail: String,
    pub coordinates: [f64; 2],
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapScene {
    pub access_token: String,
    pub style_url: String,
    pub camera: Camera,
    /// GeoJSON `FeatureCollection`, one point per zone.
    pub zones: Value,
    pub current_position: Marker,
}

fn zone_features(registry: &ZoneRegistry) -> Value {
    // ---
    let features: Vec<Value> = registry
        .list_zones()
        .iter()
        .map(|zone| {
            let style = classify(zone);
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": zone.coordinates.to_array(),
                },
                "properties": {
                    "name": zone.name,
                    "classification": zone.classification,
                    "occupancy": zone.occupancy,
                    "color": style.color,
                    "radius": style.radius,
                    "opacity": style.opacity,
                    "stroke_opacity": style.stroke_opacity,
                },
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

fn current_position_marker(at: GeoPoint, zone: &str) -> Marker {
    Marker {
        label: "Your Location".to_string(),
        detail: format!("{zone}, Kaziranga"),
        coordinates: at.to_array(),
        color: Tone::Primary.hex(),
    }
}

impl MapScene {
    pub fn build(
        registry: &ZoneRegistry,
        settings: &MapSettings,
        token: Option<&str>,
    ) -> SafetyResult<MapScene> {
        // ---
        let token = token.map(str::trim).unwrap_or_default();
        if token.is_empty() {
            return Err(SafetyError::validation(
                "token",
                "a map access token is required to render the map",
            ));
        }

        Ok(MapScene {
            access_token: token.to_string(),
            style_url: settings.style_url.clone(),
            camera: Camera {
                center: PARK_CENTER.to_array(),
                zoom: settings.zoom,
                pitch: settings.pitch,
            },
            zones: zone_features(registry),
            current_position: current_position_marker(CURRENT_POSITION, CURRENT_POSITION_ZONE),
        })
    }
}
