//! Static catalog of geo-fencing zones and their display attributes.

use serde::{Deserialize, Serialize};

use crate::error::{SafetyError, SafetyResult};
use crate::models::{GeoPoint, Tone};

/// Circle radius, in map pixels, drawn for every zone.
pub const ZONE_RADIUS: u32 = 800;
pub const ZONE_FILL_OPACITY: f64 = 0.3;
pub const ZONE_STROKE_OPACITY: f64 = 0.8;

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Safe,
    Warning,
    Restricted,
}

impl Classification {
    pub fn tone(self) -> Tone {
        match self {
            Classification::Safe => Tone::Safe,
            Classification::Warning => Tone::Warning,
            Classification::Restricted => Tone::Alert,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    // ---
    pub name: String,
    pub coordinates: GeoPoint,
    pub classification: Classification,
    pub occupancy: u32,
}

impl Zone {
    pub fn new(
        name: impl Into<String>,
        coordinates: GeoPoint,
        classification: Classification,
        occupancy: u32,
    ) -> Self {
        Zone {
            name: name.into(),
            coordinates,
            classification,
            occupancy,
        }
    }
}

/// Styling tuple handed to the map layer for one zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneStyle {
    pub color: &'static str,
    pub radius: u32,
    pub opacity: f64,
    pub stroke_opacity: f64,
}

/// Fixed lookup from classification to style. No two classifications share a color.
pub fn classify(zone: &Zone) -> ZoneStyle {
    style_for(zone.classification)
}

pub fn style_for(classification: Classification) -> ZoneStyle {
    ZoneStyle {
        color: classification.tone().hex(),
        radius: ZONE_RADIUS,
        opacity: ZONE_FILL_OPACITY,
        stroke_opacity: ZONE_STROKE_OPACITY,
    }
}

/// Read-only zone catalog, seeded once at construction.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
}

impl ZoneRegistry {
    // ---
    pub fn new(zones: Vec<Zone>) -> Self {
        ZoneRegistry { zones }
    }

    /// All zones in declaration order.
    pub fn list_zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn find(&self, name: &str) -> SafetyResult<&Zone> {
        self.zones
            .iter()
            .find(|z| z.name == name)
            .ok_or_else(|| SafetyError::not_found("zone", name))
    }

    pub fn total_occupancy(&self) -> u32 {
        self.zones.iter().map(|z| z.occupancy).sum()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::seed;

    #[test]
    fn test_list_preserves_declaration_order() {
        // ---
        let registry = ZoneRegistry::new(seed::kaziranga_zones());
        let names: Vec<&str> = registry.list_zones().iter().map(|z| z.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Central Range",
                "Western Range",
                "Eastern Range",
                "Burapahar Range",
                "Buffer Zone"
            ]
        );
    }

    #[test]
    fn test_classify_is_pure_per_classification() {
        // ---
        let registry = ZoneRegistry::new(seed::kaziranga_zones());
        for a in registry.list_zones() {
            assert_eq!(classify(a), classify(a));
            for b in registry.list_zones() {
                if a.classification == b.classification {
                    assert_eq!(classify(a).color, classify(b).color);
                } else {
                    assert_ne!(classify(a).color, classify(b).color);
                }
            }
        }
    }

    #[test]
    fn test_style_colors() {
        // ---
        assert_eq!(style_for(Classification::Safe).color, "#10b981");
        assert_eq!(style_for(Classification::Warning).color, "#f59e0b");
        assert_eq!(style_for(Classification::Restricted).color, "#ef4444");
        assert_eq!(style_for(Classification::Restricted).radius, ZONE_RADIUS);
    }

    #[test]
    fn test_find() {
        // ---
        let registry = ZoneRegistry::new(seed::kaziranga_zones());
        let zone = registry.find("Buffer Zone").unwrap();
        assert_eq!(zone.classification, Classification::Restricted);
        assert_eq!(zone.occupancy, 3);

        assert_eq!(
            registry.find("Atlantis"),
            Err(SafetyError::not_found("zone", "Atlantis"))
        );
    }

    #[test]
    fn test_total_occupancy() {
        // ---
        let registry = ZoneRegistry::new(seed::kaziranga_zones());
        assert_eq!(registry.total_occupancy(), 45 + 32 + 28 + 15 + 3);
    }
}
