use super::types::OutboundTextMessage;
use crate::{Error, Result, config::WhatsAppConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, to: &str, body: &str) -> Result<()>;
}

/// Sends replies through the WhatsApp Cloud API.
pub struct CloudApiClient {
    client: reqwest::Client,
    messages_url: String,
    access_token: String,
}

impl CloudApiClient {
    pub fn new(config: &WhatsAppConfig) -> Self {
        let messages_url = format!(
            "{}/{}/{}/messages",
            config.api_base_url.trim_end_matches('/'),
            config.api_version,
            config.phone_number_id
        );

        Self {
            client: reqwest::Client::new(),
            messages_url,
            access_token: config.access_token.clone(),
        }
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }
}

#[async_trait]
impl MessageSender for CloudApiClient {
    async fn send_text(&self, to: &str, body: &str) -> Result<()> {
        debug!("Sending WhatsApp text message to {}", to);

        let response = self
            .client
            .post(&self.messages_url)
            .bearer_auth(&self.access_token)
            .json(&OutboundTextMessage::new(to, body))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::whatsapp(status.as_u16(), body));
        }

        debug!("WhatsApp accepted message to {}", to);
        Ok(())
    }
}
