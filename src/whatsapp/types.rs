use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A text message received on the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub sender: String,
    pub text: String,
}

impl InboundMessage {
    /// Extracts the first message of a Cloud API webhook notification.
    ///
    /// Returns `None` when the envelope carries no message (status updates,
    /// unexpected shapes) or when the first message is not plain text.
    pub fn from_webhook(payload: &Value) -> Option<Self> {
        let raw = payload.pointer(FIRST_MESSAGE_POINTER)?;
        let message = WebhookMessage::deserialize(raw).ok()?;

        if message.message_type != "text" {
            return None;
        }

        Some(Self {
            sender: message.from,
            text: message.text?.body,
        })
    }
}

/// `entry[0].changes[0].value.messages[0]`; sibling entries are not inspected.
const FIRST_MESSAGE_POINTER: &str = "/entry/0/changes/0/value/messages/0";

#[derive(Debug, Deserialize)]
struct WebhookMessage {
    #[serde(default)]
    from: String,
    #[serde(rename = "type")]
    message_type: String,
    text: Option<TextBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBody {
    pub body: String,
}

/// Body of `POST /{version}/{phone-number-id}/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundTextMessage<'a> {
    pub messaging_product: &'static str,
    pub to: &'a str,
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub text: OutboundText<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutboundText<'a> {
    pub body: &'a str,
}

impl<'a> OutboundTextMessage<'a> {
    pub fn new(to: &'a str, body: &'a str) -> Self {
        Self {
            messaging_product: "whatsapp",
            to,
            message_type: "text",
            text: OutboundText { body },
        }
    }
}

/// `hub.*` query parameters sent by Meta when subscribing a webhook.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyQuery {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}
