//! Authority login guard.
//!
//! Credential checking is a capability injected through [`CredentialVerifier`].
//! [`StaticCredentialVerifier`] compares against the pair loaded from the
//! environment; a production deployment should plug in a real identity
//! service behind the same trait.

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{SafetyError, SafetyResult};

// ---

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

#[derive(Clone)]
pub struct StaticCredentialVerifier {
    username: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        StaticCredentialVerifier {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Check the form is filled in, then ask the verifier.
pub fn login(verifier: &dyn CredentialVerifier, request: &LoginRequest) -> SafetyResult<()> {
    // ---
    let username = request.username.trim();
    if username.is_empty() {
        return Err(SafetyError::validation("username", "username is required"));
    }
    if request.password.is_empty() {
        return Err(SafetyError::validation("password", "password is required"));
    }

    if verifier.verify(username, &request.password) {
        info!(%username, "Authority login succeeded");
        Ok(())
    } else {
        warn!(%username, "Authority login rejected");
        Err(SafetyError::Authentication)
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn verifier() -> StaticCredentialVerifier {
        StaticCredentialVerifier::new("ranger", "s3cret")
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_success() {
        // ---
        assert_eq!(login(&verifier(), &request("ranger", "s3cret")), Ok(()));
        assert_eq!(login(&verifier(), &request("  ranger ", "s3cret")), Ok(()));
    }

    #[test]
    fn test_login_mismatch() {
        // ---
        assert_eq!(
            login(&verifier(), &request("ranger", "wrong")),
            Err(SafetyError::Authentication)
        );
        assert_eq!(
            login(&verifier(), &request("admin", "s3cret")),
            Err(SafetyError::Authentication)
        );
    }

    #[test]
    fn test_login_requires_fields() {
        // ---
        assert!(matches!(
            login(&verifier(), &request("", "s3cret")),
            Err(SafetyError::Validation { field: "username", .. })
        ));
        assert!(matches!(
            login(&verifier(), &request("ranger", "")),
            Err(SafetyError::Validation { field: "password", .. })
        ));
    }

    struct DenyAll;

    impl CredentialVerifier for DenyAll {
        fn verify(&self, _username: &str, _password: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_injected_verifier_is_used() {
        // ---
        assert_eq!(
            login(&DenyAll, &request("ranger", "s3cret")),
            Err(SafetyError::Authentication)
        );
    }
}
