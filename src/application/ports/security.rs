// src/application/ports/security.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Checks the administrative author's login credentials.
///
/// `Ok(false)` is a mismatch; `Err` means the check itself could not run.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> ApplicationResult<bool>;
}
