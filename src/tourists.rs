//! Tourist records and digital tourist ID issuance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{SafetyError, SafetyResult};
use crate::models::relative_age;
use crate::score::{classify_score, ScoreBadge, TouristStatus};

const TOURIST_ID_PREFIX: &str = "TST-";
const TOURIST_ID_LEN: usize = 9;
const MASK_VISIBLE_MAX: usize = 8;
const MASK_HIDDEN_MIN: usize = 4;

// ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TouristRecord {
    // ---
    pub id: String,
    pub name: String,
    pub masked_id_number: String,
    pub last_location: String,
    pub safety_score: i32,
    pub last_seen: DateTime<Utc>,
    pub emergency_contact: String,
    pub itinerary: String,
}

impl TouristRecord {
    /// Status is derived from the score on every read, never stored.
    pub fn status(&self) -> TouristStatus {
        classify_score(self.safety_score).status
    }

    pub fn view(&self, now: DateTime<Utc>) -> TouristView {
        TouristView {
            record: self.clone(),
            status: self.status(),
            badge: classify_score(self.safety_score),
            last_seen_age: relative_age(self.last_seen, now),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
            || self.last_location.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TouristView {
    #[serde(flatten)]
    pub record: TouristRecord,
    pub status: TouristStatus,
    pub badge: ScoreBadge,
    pub last_seen_age: String,
}

/// Per-status tallies for a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub active: usize,
    pub warning: usize,
    pub alert: usize,
}

pub fn tier_counts<'a>(records: impl IntoIterator<Item = &'a TouristRecord>) -> TierCounts {
    // ---
    let mut counts = TierCounts::default();
    for record in records {
        match record.status() {
            TouristStatus::Active => counts.active += 1,
            TouristStatus::Warning => counts.warning += 1,
            TouristStatus::Alert => counts.alert += 1,
        }
    }
    counts
}

#[derive(Debug, Clone, Default)]
pub struct TouristDirectory {
    tourists: Vec<TouristRecord>,
}

impl TouristDirectory {
    // ---
    pub fn new(tourists: Vec<TouristRecord>) -> Self {
        TouristDirectory { tourists }
    }

    pub fn list(&self) -> &[TouristRecord] {
        &self.tourists
    }

    pub fn get(&self, id: &str) -> SafetyResult<&TouristRecord> {
        self.tourists
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| SafetyError::not_found("tourist", id))
    }

    /// Case-insensitive substring search over name, id and last location.
    pub fn search(&self, term: &str) -> Vec<&TouristRecord> {
        let needle = term.trim().to_lowercase();
        self.tourists.iter().filter(|t| t.matches(&needle)).collect()
    }

    /// Mean safety score rounded to the nearest integer.
    pub fn average_score(&self) -> Option<i32> {
        if self.tourists.is_empty() {
            return None;
        }
        let sum: i64 = self.tourists.iter().map(|t| i64::from(t.safety_score)).sum();
        let mean = sum as f64 / self.tourists.len() as f64;
        Some(mean.round() as i32)
    }
}

/// Form submitted to generate a digital tourist ID.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TouristIdRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id_number: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub itinerary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitalTouristId {
    pub tourist_id: String,
    pub name: String,
    pub masked_id_number: String,
    pub emergency_contact: String,
    pub itinerary: Option<String>,
    pub verified: bool,
}

fn required(field: &'static str, value: &str) -> SafetyResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(SafetyError::validation(field, "this field is required"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Show a leading slice of an identity number and mask the rest.
///
/// At most eight characters stay visible, and the last four are always
/// hidden, so short numbers are never disclosed in full.
pub fn mask_id_number(id_number: &str) -> String {
    let len = id_number.chars().count();
    let shown = len.saturating_sub(MASK_HIDDEN_MIN).min(MASK_VISIBLE_MAX);
    let visible: String = id_number.chars().take(shown).collect();
    format!("{visible}****")
}

fn generate_tourist_id() -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(TOURIST_ID_LEN)
        .collect();
    format!("{TOURIST_ID_PREFIX}{}", suffix.to_uppercase())
}

/// Validate the form and issue a new ID. Issued IDs are not stored.
pub fn issue_tourist_id(request: &TouristIdRequest) -> SafetyResult<DigitalTouristId> {
    // ---
    let name = required("name", &request.name)?;
    let id_number = required("id_number", &request.id_number)?;
    let emergency_contact = required("emergency_contact", &request.emergency_contact)?;
    let itinerary = request
        .itinerary
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    let issued = DigitalTouristId {
        tourist_id: generate_tourist_id(),
        name,
        masked_id_number: mask_id_number(&id_number),
        emergency_contact,
        itinerary,
        verified: true,
    };
    info!(tourist_id = %issued.tourist_id, "Digital tourist ID issued");
    Ok(issued)
}
