//! Safety-score classifier.
//!
//! Maps a tourist's 0–100 safety score onto a three-tier status. Every view
//! that shows a score (tourist records, the safety page, the dashboard)
//! goes through [`classify_score`] so the thresholds live in one place:
//!
//! | score      | tier        | status    | tone    |
//! |------------|-------------|-----------|---------|
//! | `>= 80`    | Excellent   | active    | safe    |
//! | `60..=79`  | Good        | warning   | warning |
//! | `< 60`     | Caution     | alert     | alert   |

use serde::{Deserialize, Serialize};

use crate::error::{SafetyError, SafetyResult};
use crate::models::Tone;

pub const EXCELLENT_THRESHOLD: i32 = 80;
pub const GOOD_THRESHOLD: i32 = 60;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

// ---

/// Coarse bucket derived from a safety score, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Caution,
    Good,
    Excellent,
}

/// Tourist status shown in record tables; a pure function of the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouristStatus {
    Active,
    Warning,
    Alert,
}

impl ScoreTier {
    // ---
    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent",
            ScoreTier::Good => "Good",
            ScoreTier::Caution => "Caution Required",
        }
    }

    pub fn status(self) -> TouristStatus {
        match self {
            ScoreTier::Excellent => TouristStatus::Active,
            ScoreTier::Good => TouristStatus::Warning,
            ScoreTier::Caution => TouristStatus::Alert,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ScoreTier::Excellent => Tone::Safe,
            ScoreTier::Good => Tone::Warning,
            ScoreTier::Caution => Tone::Alert,
        }
    }
}

/// Classification result for a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBadge {
    pub score: i32,
    pub tier: ScoreTier,
    pub label: &'static str,
    pub status: TouristStatus,
    pub tone: Tone,
    pub color: &'static str,
}

/// Tier for a score. Total over `i32`; range checks belong to the caller.
pub fn tier_for(score: i32) -> ScoreTier {
    if score >= EXCELLENT_THRESHOLD {
        ScoreTier::Excellent
    } else if score >= GOOD_THRESHOLD {
        ScoreTier::Good
    } else {
        ScoreTier::Caution
    }
}

pub fn classify_score(score: i32) -> ScoreBadge {
    // ---
    let tier = tier_for(score);
    ScoreBadge {
        score,
        tier,
        label: tier.label(),
        status: tier.status(),
        tone: tier.tone(),
        color: tier.tone().hex(),
    }
}

/// Reject scores outside `0..=100` before they reach the classifier.
pub fn validate_score(score: i32) -> SafetyResult<i32> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(SafetyError::validation(
            "score",
            format!("safety score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"),
        ))
    }
}
