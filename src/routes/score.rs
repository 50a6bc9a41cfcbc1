//! Safety-score classification endpoint.

use axum::{extract::Path, routing::get, Json, Router};

use crate::{classify_score, validate_score, AppState, SafetyError, SafetyResult, ScoreBadge};

// ---

pub fn router() -> Router<AppState> {
    Router::new().route("/safety-score/{score}", get(classify))
}

/// `GET /safety-score/{score}`; non-numeric scores and scores outside
/// `0..=100` are rejected here, before classification.
async fn classify(Path(raw): Path<String>) -> SafetyResult<Json<ScoreBadge>> {
    let score = raw
        .parse::<i32>()
        .map_err(|_| SafetyError::validation("score", format!("'{raw}' is not a safety score")))?;
    let score = validate_score(score)?;
    Ok(Json(classify_score(score)))
}
