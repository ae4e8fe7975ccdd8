// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for publish dates and version markers.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
