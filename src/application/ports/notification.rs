// src/application/ports/notification.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub subject: String,
    pub message: String,
    pub sender_name: Option<String>,
    pub sender_email: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Hands a contact-form submission to the outbound notification channel.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: ContactMessage) -> ApplicationResult<()>;
}
