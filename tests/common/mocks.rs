use async_trait::async_trait;
use sasyam_bot::{Error, Result, whatsapp::MessageSender};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: String,
    pub body: String,
}

/// Mock WhatsApp sender for testing
#[derive(Debug, Clone, Default)]
pub struct MockSender {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
    pub error: Option<String>,
}

impl MockSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for MockSender {
    async fn send_text(&self, to: &str, body: &str) -> Result<()> {
        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        self.sent.lock().unwrap().push(SentMessage {
            to: to.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
