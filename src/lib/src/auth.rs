//! Credential verification for the dashboard login gate

use crate::constants;

/// Capability for checking a login attempt.
///
/// The controller only ever sees this trait, so a real authentication
/// backend can be swapped in without touching it.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Verifier backed by a single fixed account.
#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    email: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub fn new(email: impl AsRef<str>, password: impl AsRef<str>) -> StaticCredentialVerifier {
        StaticCredentialVerifier {
            email: email.as_ref().to_string(),
            password: password.as_ref().to_string(),
        }
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> StaticCredentialVerifier {
        StaticCredentialVerifier::new(constants::DASHBOARD_EMAIL, constants::DASHBOARD_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
