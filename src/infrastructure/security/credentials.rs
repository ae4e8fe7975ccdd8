// src/infrastructure/security/credentials.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::CredentialVerifier,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Verifies the single administrator account configured at startup.
///
/// The password is held only as an Argon2 PHC string; verification runs on
/// the blocking pool.
#[derive(Clone)]
pub struct Argon2AdminCredentials {
    email: String,
    password_hash: String,
}

impl Argon2AdminCredentials {
    /// Build from an existing PHC string such as `ADMIN_PASSWORD_HASH`.
    pub fn from_password_hash(email: &str, password_hash: &str) -> ApplicationResult<Self> {
        PasswordHash::new(password_hash).map_err(|err| {
            ApplicationError::infrastructure(format!("invalid admin password hash: {err}"))
        })?;
        Ok(Self {
            email: normalize_email(email),
            password_hash: password_hash.to_owned(),
        })
    }

    /// Hash a plaintext password once and keep only the hash.
    pub async fn from_password(email: &str, password: &str) -> ApplicationResult<Self> {
        let password_hash = hash_password(password).await?;
        Self::from_password_hash(email, &password_hash)
    }
}

pub async fn hash_password(password: &str) -> ApplicationResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_password_blocking(&password))
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
}

/// Synchronous variant for callers that are not on the runtime.
pub fn hash_password_blocking(password: &str) -> ApplicationResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl CredentialVerifier for Argon2AdminCredentials {
    async fn verify(&self, email: &str, password: &str) -> ApplicationResult<bool> {
        let email_ok = normalize_email(email) == self.email;
        let password = password.to_owned();
        let expected_hash = self.password_hash.clone();
        // メールが違っても検証は行い、応答時間を揃える
        let password_ok = tokio::task::spawn_blocking(move || -> ApplicationResult<bool> {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))??;
        Ok(email_ok && password_ok)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
