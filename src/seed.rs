//! Seed tables loaded into the stores at startup.
//!
//! Timestamps are expressed relative to the `now` passed in so the records
//! read as recent whenever the service starts.

use chrono::{DateTime, Duration, Utc};

use crate::alerts::{AlertLocation, AlertRecord, AlertStatus, Priority, TouristRef};
use crate::models::GeoPoint;
use crate::tourists::TouristRecord;
use crate::zones::{Classification, Zone};

/// Kaziranga National Park, map center.
pub const PARK_CENTER: GeoPoint = GeoPoint::new(93.3714, 26.5775);

/// Demo "current position" marker, slightly north of the center.
pub const CURRENT_POSITION: GeoPoint = GeoPoint::new(93.3714, 26.5785);

/// Zone the demo position lies in.
pub const CURRENT_POSITION_ZONE: &str = "Central Range";

// ---

pub fn kaziranga_zones() -> Vec<Zone> {
    // ---
    vec![
        Zone::new("Central Range", PARK_CENTER, Classification::Safe, 45),
        Zone::new(
            "Western Range",
            GeoPoint::new(93.3214, 26.5675),
            Classification::Safe,
            32,
        ),
        Zone::new(
            "Eastern Range",
            GeoPoint::new(93.4214, 26.5875),
            Classification::Safe,
            28,
        ),
        Zone::new(
            "Burapahar Range",
            GeoPoint::new(93.4114, 26.5575),
            Classification::Warning,
            15,
        ),
        Zone::new(
            "Buffer Zone",
            GeoPoint::new(93.3914, 26.6075),
            Classification::Restricted,
            3,
        ),
    ]
}

struct AlertSeed {
    id: &'static str,
    kind: &'static str,
    priority: Priority,
    tourist_id: &'static str,
    tourist_name: &'static str,
    place: &'static str,
    coordinates: &'static str,
    minutes_ago: i64,
    status: AlertStatus,
    description: &'static str,
    response_team: &'static str,
    eta: &'static str,
}

const ALERTS: &[AlertSeed] = &[
    AlertSeed {
        id: "ALT-001",
        kind: "SOS",
        priority: Priority::Critical,
        tourist_id: "TST-A7X9M2",
        tourist_name: "Kshitiz Sharma",
        place: "Market Area",
        coordinates: "12.9716° N, 77.5946° E",
        minutes_ago: 2,
        status: AlertStatus::Active,
        description: "Emergency SOS button activated",
        response_team: "Team Alpha",
        eta: "5 mins",
    },
    AlertSeed {
        id: "ALT-002",
        kind: "Geo-fence Breach",
        priority: Priority::High,
        tourist_id: "TST-B8Y4N7",
        tourist_name: "Atishay Gupta",
        place: "Construction Zone",
        coordinates: "12.9616° N, 77.5846° E",
        minutes_ago: 15,
        status: AlertStatus::Investigating,
        description: "Tourist entered restricted construction area",
        response_team: "Team Beta",
        eta: "N/A",
    },
    AlertSeed {
        id: "ALT-003",
        kind: "Anomaly Detection",
        priority: Priority::Medium,
        tourist_id: "TST-C9Z1P5",
        tourist_name: "Manan Verma",
        place: "Tourist District",
        coordinates: "12.9816° N, 77.6046° E",
        minutes_ago: 60,
        status: AlertStatus::Resolved,
        description: "Unusual movement pattern detected",
        response_team: "Team Gamma",
        eta: "Completed",
    },
    AlertSeed {
        id: "ALT-004",
        kind: "Safety Score Drop",
        priority: Priority::Medium,
        tourist_id: "TST-E7L2R9",
        tourist_name: "Arjun Patel",
        place: "Mountain Trail",
        coordinates: "12.9516° N, 77.5746° E",
        minutes_ago: 45,
        status: AlertStatus::Active,
        description: "Safety score dropped below threshold (65)",
        response_team: "Team Delta",
        eta: "10 mins",
    },
    AlertSeed {
        id: "ALT-005",
        kind: "Lost Connection",
        priority: Priority::High,
        tourist_id: "TST-D3K8Q6",
        tourist_name: "Priya Singh",
        place: "Beach Front",
        coordinates: "12.9416° N, 77.5646° E",
        minutes_ago: 30,
        status: AlertStatus::Investigating,
        description: "Lost GPS signal for extended period",
        response_team: "Team Echo",
        eta: "15 mins",
    },
];

pub fn alerts(now: DateTime<Utc>) -> Vec<AlertRecord> {
    // ---
    ALERTS
        .iter()
        .map(|s| AlertRecord {
            id: s.id.to_string(),
            kind: s.kind.to_string(),
            priority: s.priority,
            subject: TouristRef {
                id: s.tourist_id.to_string(),
                name: s.tourist_name.to_string(),
            },
            location: AlertLocation {
                place: s.place.to_string(),
                coordinates: s.coordinates.to_string(),
            },
            status: s.status,
            description: s.description.to_string(),
            response_team: s.response_team.to_string(),
            eta: s.eta.to_string(),
            created_at: now - Duration::minutes(s.minutes_ago),
        })
        .collect()
}

struct TouristSeed {
    id: &'static str,
    name: &'static str,
    masked_id_number: &'static str,
    last_location: &'static str,
    safety_score: i32,
    minutes_ago: i64,
    emergency_contact: &'static str,
    itinerary: &'static str,
}

const TOURISTS: &[TouristSeed] = &[
    TouristSeed {
        id: "TST-A7X9M2",
        name: "Kshitiz Sharma",
        masked_id_number: "ABCD1234****",
        last_location: "Historic Center",
        safety_score: 92,
        minutes_ago: 2,
        emergency_contact: "+91-98765-43210",
        itinerary: "3-day city tour",
    },
    TouristSeed {
        id: "TST-B8Y4N7",
        name: "Atishay Gupta",
        masked_id_number: "EFGH5678****",
        last_location: "Tourist District",
        safety_score: 88,
        minutes_ago: 5,
        emergency_contact: "+91-98765-43211",
        itinerary: "Heritage sites visit",
    },
    TouristSeed {
        id: "TST-C9Z1P5",
        name: "Manan Verma",
        masked_id_number: "IJKL9012****",
        last_location: "Market Area",
        safety_score: 76,
        minutes_ago: 15,
        emergency_contact: "+91-98765-43212",
        itinerary: "Shopping and local cuisine",
    },
    TouristSeed {
        id: "TST-D3K8Q6",
        name: "Priya Singh",
        masked_id_number: "MNOP3456****",
        last_location: "Beach Front",
        safety_score: 94,
        minutes_ago: 1,
        emergency_contact: "+91-98765-43213",
        itinerary: "Beach activities",
    },
    TouristSeed {
        id: "TST-E7L2R9",
        name: "Arjun Patel",
        masked_id_number: "QRST7890****",
        last_location: "Mountain Trail",
        safety_score: 65,
        minutes_ago: 45,
        emergency_contact: "+91-98765-43214",
        itinerary: "Adventure trekking",
    },
];

pub fn tourists(now: DateTime<Utc>) -> Vec<TouristRecord> {
    // ---
    TOURISTS
        .iter()
        .map(|s| TouristRecord {
            id: s.id.to_string(),
            name: s.name.to_string(),
            masked_id_number: s.masked_id_number.to_string(),
            last_location: s.last_location.to_string(),
            safety_score: s.safety_score,
            last_seen: now - Duration::minutes(s.minutes_ago),
            emergency_contact: s.emergency_contact.to_string(),
            itinerary: s.itinerary.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        // ---
        let now = Utc::now();
        let alert_ids: HashSet<String> = alerts(now).into_iter().map(|a| a.id).collect();
        assert_eq!(alert_ids.len(), ALERTS.len());

        let zone_names: HashSet<String> = kaziranga_zones().into_iter().map(|z| z.name).collect();
        assert_eq!(zone_names.len(), 5);
    }

    #[test]
    fn test_alert_subjects_reference_seeded_tourists() {
        // ---
        let now = Utc::now();
        let tourist_ids: HashSet<String> = tourists(now).into_iter().map(|t| t.id).collect();
        for alert in alerts(now) {
            assert!(tourist_ids.contains(&alert.subject.id), "{}", alert.id);
        }
    }

    #[test]
    fn test_current_position_zone_is_seeded() {
        // ---
        let zones = kaziranga_zones();
        let zone = zones.iter().find(|z| z.name == CURRENT_POSITION_ZONE);
        assert_eq!(zone.map(|z| z.classification), Some(Classification::Safe));
    }

    #[test]
    fn test_scores_in_range() {
        // ---
        for t in tourists(Utc::now()) {
            assert!((0..=100).contains(&t.safety_score));
        }
    }
}
