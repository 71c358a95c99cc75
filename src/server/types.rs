use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload forwarded by the chat assistant for each customer turn.
///
/// `phone` is only logged, so any JSON type is accepted for it.
#[derive(Debug, Default, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageRequest {
    pub fn phone_display(&self) -> String {
        match &self.phone {
            Some(Value::String(phone)) => phone.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub reply: String,
}
