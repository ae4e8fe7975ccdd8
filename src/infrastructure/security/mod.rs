// src/infrastructure/security/mod.rs
pub mod credentials;

pub use credentials::{Argon2AdminCredentials, hash_password, hash_password_blocking};
