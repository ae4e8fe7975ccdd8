// src/infrastructure/notification/mod.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notification::{ContactMessage, ContactNotifier},
};
use async_trait::async_trait;
use sqlx::PgPool;

/// Stores contact submissions in the `contact_messages` outbox table, addressed
/// to the configured recipient. Delivery to a mailbox happens out of process.
#[derive(Clone)]
pub struct PostgresContactOutbox {
    pool: PgPool,
    recipient: String,
}

impl PostgresContactOutbox {
    pub fn new(pool: PgPool, recipient: impl Into<String>) -> Self {
        Self {
            pool,
            recipient: recipient.into(),
        }
    }
}

#[async_trait]
impl ContactNotifier for PostgresContactOutbox {
    async fn notify(&self, message: ContactMessage) -> ApplicationResult<()> {
        sqlx::query(
            "INSERT INTO contact_messages (recipient, subject, message, sender_name, sender_email, submitted_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&self.recipient)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.sender_name.as_deref())
        .bind(message.sender_email.as_deref())
        .bind(message.submitted_at)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to queue contact message");
            ApplicationError::infrastructure("could not queue contact message")
        })?;

        tracing::debug!(recipient = %self.recipient, "contact message queued");
        Ok(())
    }
}
