// tests/support/mocks/notification.rs
use async_trait::async_trait;
use quill_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::notification::{ContactMessage, ContactNotifier},
};
use std::sync::Mutex;

/// 送信された問い合わせを記録する通知モック
#[derive(Default)]
pub struct CapturingNotifier {
    sent: Mutex<Vec<ContactMessage>>,
}

impl CapturingNotifier {
    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactNotifier for CapturingNotifier {
    async fn notify(&self, message: ContactMessage) -> ApplicationResult<()> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// 常に失敗する通知モック
pub struct FailingNotifier;

#[async_trait]
impl ContactNotifier for FailingNotifier {
    async fn notify(&self, _message: ContactMessage) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("outbox unavailable"))
    }
}
