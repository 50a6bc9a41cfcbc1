//! Alert records and their lifecycle.
//!
//! Alerts move one way only: `active`/`investigating` → `resolved`. The store
//! keeps records in insertion order; filtering never reorders, so a freshly
//! resolved alert appears in the `resolved` view at its original position.
//! Counts are derived from a scan on every read.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{SafetyError, SafetyResult};
use crate::models::{relative_age, Tone};

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub fn tone(self) -> Tone {
        match self {
            Priority::Critical => Tone::Alert,
            Priority::High => Tone::Warning,
            Priority::Medium => Tone::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Investigating,
    Resolved,
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 3] = [
        AlertStatus::Active,
        AlertStatus::Investigating,
        AlertStatus::Resolved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Investigating => "investigating",
            AlertStatus::Resolved => "resolved",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            AlertStatus::Active => Tone::Alert,
            AlertStatus::Investigating => Tone::Warning,
            AlertStatus::Resolved => Tone::Safe,
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status filter; `All` is the `"all"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AlertStatus),
}

impl StatusFilter {
    fn matches(self, status: AlertStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = SafetyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Only(AlertStatus::Active)),
            "investigating" => Ok(StatusFilter::Only(AlertStatus::Investigating)),
            "resolved" => Ok(StatusFilter::Only(AlertStatus::Resolved)),
            other => Err(SafetyError::validation(
                "status",
                format!("unknown alert status '{other}'"),
            )),
        }
    }
}

/// Weak reference to the tourist an alert concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TouristRef {
    pub id: String,
    pub name: String,
}

/// Display-only location; `coordinates` is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertLocation {
    pub place: String,
    pub coordinates: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRecord {
    // ---
    pub id: String,
    pub kind: String,
    pub priority: Priority,
    pub subject: TouristRef,
    pub location: AlertLocation,
    pub status: AlertStatus,
    pub description: String,
    pub response_team: String,
    pub eta: String,
    pub created_at: DateTime<Utc>,
}

/// Alert as returned by the API, with derived display fields.
#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    #[serde(flatten)]
    pub record: AlertRecord,
    pub age: String,
    pub priority_tone: Tone,
    pub status_tone: Tone,
}

impl AlertRecord {
    pub fn view(&self, now: DateTime<Utc>) -> AlertView {
        AlertView {
            record: self.clone(),
            age: relative_age(self.created_at, now),
            priority_tone: self.priority.tone(),
            status_tone: self.status.tone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub active: usize,
    pub investigating: usize,
    pub resolved: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AlertStore {
    alerts: Vec<AlertRecord>,
}

impl AlertStore {
    // ---
    pub fn new(alerts: Vec<AlertRecord>) -> Self {
        AlertStore { alerts }
    }

    /// All records in insertion order.
    pub fn list_alerts(&self) -> &[AlertRecord] {
        &self.alerts
    }

    /// Stable filter: matching records keep their relative order.
    pub fn filter_by_status(&self, filter: StatusFilter) -> Vec<&AlertRecord> {
        self.alerts
            .iter()
            .filter(|a| filter.matches(a.status))
            .collect()
    }

    pub fn count(&self, status: AlertStatus) -> usize {
        self.filter_by_status(StatusFilter::Only(status)).len()
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            active: self.count(AlertStatus::Active),
            investigating: self.count(AlertStatus::Investigating),
            resolved: self.count(AlertStatus::Resolved),
            total: self.alerts.len(),
        }
    }

    pub fn get(&self, id: &str) -> SafetyResult<&AlertRecord> {
        self.alerts
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| SafetyError::not_found("alert", id))
    }

    /// Mark an alert resolved. Resolving an already-resolved alert is a no-op.
    pub fn resolve(&mut self, id: &str) -> SafetyResult<AlertRecord> {
        // ---
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| SafetyError::not_found("alert", id))?;

        if alert.status == AlertStatus::Resolved {
            info!(alert_id = %id, "Alert already resolved, nothing to do");
        } else {
            info!(alert_id = %id, from = %alert.status, "Alert resolved");
            alert.status = AlertStatus::Resolved;
        }
        Ok(alert.clone())
    }

    /// Acknowledge an escalation request.
    ///
    /// Escalation has no lifecycle state of its own: the record is returned
    /// unchanged. Resolved alerts cannot be escalated.
    pub fn escalate(&self, id: &str) -> SafetyResult<AlertRecord> {
        // ---
        let alert = self.get(id)?;
        if alert.status == AlertStatus::Resolved {
            warn!(alert_id = %id, "Escalation refused for resolved alert");
            return Err(SafetyError::InvalidTransition {
                id: id.to_string(),
                reason: "alert is already resolved",
            });
        }
        info!(
            alert_id = %id,
            priority = ?alert.priority,
            team = %alert.response_team,
            "Alert escalated"
        );
        Ok(alert.clone())
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str, status: AlertStatus) -> AlertRecord {
        // ---
        AlertRecord {
            id: id.to_string(),
            kind: "SOS".to_string(),
            priority: Priority::High,
            subject: TouristRef {
                id: "TST-A7X9M2".to_string(),
                name: "Kshitiz Sharma".to_string(),
            },
            location: AlertLocation {
                place: "Market Area".to_string(),
                coordinates: "12.9716° N, 77.5946° E".to_string(),
            },
            status,
            description: "test".to_string(),
            response_team: "Team Alpha".to_string(),
            eta: "5 mins".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 9, 10, 11, 0, 0).unwrap(),
        }
    }

    fn scenario_store() -> AlertStore {
        AlertStore::new(vec![
            record("ALT-001", AlertStatus::Active),
            record("ALT-002", AlertStatus::Investigating),
            record("ALT-003", AlertStatus::Resolved),
        ])
    }

    fn ids(records: &[&AlertRecord]) -> Vec<String> {
        records.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_filter_all_equals_list() {
        // ---
        let store = scenario_store();
        let all: Vec<AlertRecord> = store
            .filter_by_status(StatusFilter::All)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(all.as_slice(), store.list_alerts());
    }

    #[test]
    fn test_filters_partition_the_store() {
        // ---
        let store = scenario_store();
        let mut total = 0;
        for status in AlertStatus::ALL {
            let subset = store.filter_by_status(StatusFilter::Only(status));
            assert!(subset.iter().all(|a| a.status == status));
            total += subset.len();
        }
        assert_eq!(total, store.list_alerts().len());
    }

    #[test]
    fn test_resolve_scenario_keeps_insertion_order() {
        // ---
        let mut store = scenario_store();

        let active = store.filter_by_status(StatusFilter::Only(AlertStatus::Active));
        assert_eq!(ids(&active), vec!["ALT-001"]);

        let resolved = store.resolve("ALT-002").unwrap();
        assert_eq!(resolved.status, AlertStatus::Resolved);

        let investigating = store.filter_by_status(StatusFilter::Only(AlertStatus::Investigating));
        assert!(investigating.is_empty());

        let resolved = store.filter_by_status(StatusFilter::Only(AlertStatus::Resolved));
        assert_eq!(ids(&resolved), vec!["ALT-002", "ALT-003"]);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        // ---
        let mut once = scenario_store();
        once.resolve("ALT-001").unwrap();

        let mut twice = scenario_store();
        twice.resolve("ALT-001").unwrap();
        twice.resolve("ALT-001").unwrap();

        assert_eq!(once.list_alerts(), twice.list_alerts());
    }

    #[test]
    fn test_resolve_unknown_leaves_store_untouched() {
        // ---
        let mut store = scenario_store();
        let before = store.list_alerts().to_vec();

        let err = store.resolve("nonexistent-id").unwrap_err();
        assert_eq!(err, SafetyError::not_found("alert", "nonexistent-id"));
        assert_eq!(store.list_alerts(), before.as_slice());
    }

    #[test]
    fn test_counts_are_derived() {
        // ---
        let mut store = scenario_store();
        assert_eq!(
            store.counts(),
            StatusCounts {
                active: 1,
                investigating: 1,
                resolved: 1,
                total: 3
            }
        );

        store.resolve("ALT-001").unwrap();
        assert_eq!(store.count(AlertStatus::Active), 0);
        assert_eq!(store.count(AlertStatus::Resolved), 2);
    }

    #[test]
    fn test_escalate_does_not_change_state() {
        // ---
        let store = scenario_store();
        let escalated = store.escalate("ALT-001").unwrap();
        assert_eq!(escalated.status, AlertStatus::Active);
        assert_eq!(escalated.priority, Priority::High);
        assert_eq!(store.get("ALT-001").unwrap().status, AlertStatus::Active);

        assert!(matches!(
            store.escalate("ALT-003"),
            Err(SafetyError::InvalidTransition { .. })
        ));
        assert!(matches!(
            store.escalate("ALT-404"),
            Err(SafetyError::NotFound { .. })
        ));
    }

    #[test]
    fn test_status_filter_parsing() {
        // ---
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "investigating".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(AlertStatus::Investigating))
        );
        assert!("escalated".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_view_tones() {
        // ---
        let mut alert = record("ALT-009", AlertStatus::Active);
        alert.priority = Priority::Critical;
        let now = Utc.with_ymd_and_hms(2025, 9, 10, 11, 2, 0).unwrap();

        let view = alert.view(now);
        assert_eq!(view.age, "2 mins ago");
        assert_eq!(view.priority_tone, Tone::Alert);
        assert_eq!(view.status_tone, Tone::Alert);
    }
}
