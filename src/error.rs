//! Error taxonomy shared by the stores and the HTTP layer.
//!
//! Every failure is local to a single user action and is reported back as a
//! JSON body; none of them are fatal to the process or retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

// ---

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SafetyError {
    // ---
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("invalid credentials")]
    Authentication,

    #[error("alert '{id}' cannot change state: {reason}")]
    InvalidTransition { id: String, reason: &'static str },
}

pub type SafetyResult<T> = Result<T, SafetyError>;

impl SafetyError {
    // ---
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        SafetyError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        SafetyError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            SafetyError::NotFound { .. } => StatusCode::NOT_FOUND,
            SafetyError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            SafetyError::Authentication => StatusCode::UNAUTHORIZED,
            SafetyError::InvalidTransition { .. } => StatusCode::CONFLICT,
        }
    }

    /// Stable machine-readable code used in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            SafetyError::NotFound { .. } => "not_found",
            SafetyError::Validation { .. } => "validation",
            SafetyError::Authentication => "authentication",
            SafetyError::InvalidTransition { .. } => "invalid_transition",
        }
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl IntoResponse for SafetyError {
    fn into_response(self) -> Response {
        // ---
        let field = match &self {
            SafetyError::Validation { field, .. } => Some(*field),
            _ => None,
        };
        let body = ErrorBody {
            error: self.code(),
            message: self.to_string(),
            field,
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_status_codes() {
        // ---
        assert_eq!(
            SafetyError::not_found("alert", "ALT-999").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SafetyError::validation("name", "required").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            SafetyError::Authentication.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_messages() {
        // ---
        let err = SafetyError::not_found("alert", "ALT-999");
        assert_eq!(err.to_string(), "alert 'ALT-999' not found");

        let err = SafetyError::validation("token", "map access token is required");
        assert_eq!(err.to_string(), "token: map access token is required");
    }
}
