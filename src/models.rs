//! Small value types shared by the zone, alert and tourist modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---

/// Display tone used for badges and markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Safe,
    Warning,
    Alert,
    Primary,
}

impl Tone {
    // ---
    pub fn hex(self) -> &'static str {
        match self {
            Tone::Safe => "#10b981",
            Tone::Warning => "#f59e0b",
            Tone::Alert => "#ef4444",
            Tone::Primary => "#3b82f6",
        }
    }
}

/// A geographic point, longitude first as map providers expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    // ---
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lng: f64, lat: f64) -> Self {
        GeoPoint { lng, lat }
    }

    /// `[lng, lat]` pair for GeoJSON geometry.
    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// Render a timestamp as a coarse age marker such as `"15 mins ago"`.
pub fn relative_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // ---
    let minutes = (now - at).num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "min");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(hours / 24, "day")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_relative_age() {
        // ---
        let now = now();
        assert_eq!(relative_age(now, now), "just now");
        assert_eq!(relative_age(now - Duration::seconds(30), now), "just now");
        assert_eq!(relative_age(now - Duration::minutes(1), now), "1 min ago");
        assert_eq!(relative_age(now - Duration::minutes(15), now), "15 mins ago");
        assert_eq!(relative_age(now - Duration::minutes(60), now), "1 hour ago");
        assert_eq!(relative_age(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(relative_age(now - Duration::days(2), now), "2 days ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        // ---
        let now = now();
        assert_eq!(relative_age(now + Duration::minutes(3), now), "just now");
    }

    #[test]
    fn test_tone_colors_are_distinct() {
        // ---
        let tones = [Tone::Safe, Tone::Warning, Tone::Alert, Tone::Primary];
        for (i, a) in tones.iter().enumerate() {
            for b in &tones[i + 1..] {
                assert_ne!(a.hex(), b.hex());
            }
        }
    }
}
