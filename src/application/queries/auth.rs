// src/application/queries/auth.rs
use crate::application::{
    dto::AuthStatusDto, error::ApplicationResult, ports::security::CredentialVerifier,
};
use std::sync::Arc;

pub struct AdminCredentialsQuery {
    pub email: String,
    pub password: String,
}

/// Answers whether a login attempt matches the configured admin author.
pub struct AuthQueryService {
    verifier: Arc<dyn CredentialVerifier>,
}

impl AuthQueryService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    pub async fn check_admin(&self, query: &AdminCredentialsQuery) -> ApplicationResult<AuthStatusDto> {
        let status = self
            .verifier
            .verify(query.email.trim(), &query.password)
            .await?;
        if status {
            tracing::info!("admin credentials accepted");
        } else {
            tracing::warn!("admin credentials rejected");
        }
        Ok(AuthStatusDto { status })
    }
}
