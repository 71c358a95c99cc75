use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use sasyam_bot::{
    config::{Config, LogsConfig, ServerConfig, StoreConfig, WhatsAppConfig},
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;

use super::mocks::MockSender;

pub const TEST_VERIFY_TOKEN: &str = "sasyam-verify-token";
pub const TEST_SUPPORT_NUMBER: &str = "+91 90000 00000";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        whatsapp: WhatsAppConfig {
            access_token: "test-access-token".to_string(),
            phone_number_id: "1234567890".to_string(),
            verify_token: TEST_VERIFY_TOKEN.to_string(),
            api_base_url: "https://graph.facebook.com".to_string(),
            api_version: "v21.0".to_string(),
        },
        store: StoreConfig {
            support_number: TEST_SUPPORT_NUMBER.to_string(),
        },
    }
}

/// Build the full router around a mock sender
pub fn create_test_app(sender: MockSender) -> Router {
    server::router(AppState::new(create_test_config(), Arc::new(sender)))
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// A WhatsApp Cloud API notification carrying one text message
pub fn text_notification(from: &str, body: &str) -> Value {
    notification(json!({
        "from": from,
        "id": "wamid.HBgMOTE5OTk5OTk5OTk5FQIAEhgg",
        "timestamp": "1718000000",
        "type": "text",
        "text": { "body": body }
    }))
}

pub fn notification(message: Value) -> Value {
    json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "id": "102290129340398",
            "changes": [{
                "field": "messages",
                "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                        "display_phone_number": "15550783881",
                        "phone_number_id": "1234567890"
                    },
                    "messages": [message]
                }
            }]
        }]
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

whatsapp:
  access_token: "yaml-token"
  phone_number_id: "5550001111"
  verify_token: "yaml-verify"

store:
  support_number: "+91 80000 00000"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
