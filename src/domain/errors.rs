// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// A stored record breaks a referential invariant (e.g. an article
    /// pointing at a category that does not exist).
    #[error("data integrity violation: {0}")]
    Integrity(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
