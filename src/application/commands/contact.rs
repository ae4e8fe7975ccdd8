// src/application/commands/contact.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        notification::{ContactMessage, ContactNotifier},
        time::Clock,
    },
};
use std::sync::Arc;

const MAX_SUBJECT_LEN: usize = 200;
const MAX_MESSAGE_LEN: usize = 10_000;

pub struct SubmitContactCommand {
    pub subject: String,
    pub message: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

pub struct ContactCommandService {
    notifier: Arc<dyn ContactNotifier>,
    clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    pub fn new(notifier: Arc<dyn ContactNotifier>, clock: Arc<dyn Clock>) -> Self {
        Self { notifier, clock }
    }

    pub async fn submit(&self, command: SubmitContactCommand) -> ApplicationResult<()> {
        let message = self.validate(command)?;
        self.notifier.notify(message).await?;
        tracing::info!("contact message submitted");
        Ok(())
    }

    fn validate(&self, command: SubmitContactCommand) -> ApplicationResult<ContactMessage> {
        let subject = command.subject.trim().to_string();
        if subject.is_empty() {
            return Err(ApplicationError::validation("subject cannot be empty"));
        }
        if subject.chars().count() > MAX_SUBJECT_LEN {
            return Err(ApplicationError::validation(format!(
                "subject must be at most {MAX_SUBJECT_LEN} characters"
            )));
        }

        if command.message.trim().is_empty() {
            return Err(ApplicationError::validation("message cannot be empty"));
        }
        if command.message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ApplicationError::validation(format!(
                "message must be at most {MAX_MESSAGE_LEN} characters"
            )));
        }

        let sender_name = non_blank(command.name);
        let sender_email = non_blank(command.email);
        if let Some(email) = &sender_email {
            if !looks_like_email(email) {
                return Err(ApplicationError::validation("email address is malformed"));
            }
        }

        Ok(ContactMessage {
            subject,
            message: command.message,
            sender_name,
            sender_email,
            submitted_at: self.clock.now(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
