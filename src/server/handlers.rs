use super::types::{MessageRequest, MessageResponse};
use crate::{
    config::Config,
    responder::{Classifier, order_flow},
    whatsapp::{InboundMessage, MessageSender, VerifyQuery, verify_subscription},
};
use axum::{
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const HEALTH_MESSAGE: &str = "Sasyam WhatsApp bot server is running ✅";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub classifier: Arc<Classifier>,
    pub sender: Arc<dyn MessageSender>,
}

impl AppState {
    pub fn new(config: Config, sender: Arc<dyn MessageSender>) -> Self {
        let classifier = Classifier::new(config.store.support_number.clone());
        Self {
            config: Arc::new(config),
            classifier: Arc::new(classifier),
            sender,
        }
    }
}

pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// Chat-assistant order flow. Always answers 200 with a reply.
pub async fn message(payload: Result<Json<MessageRequest>, JsonRejection>) -> Json<MessageResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Unreadable order-flow request: {}", rejection);
            MessageRequest::default()
        }
    };

    info!(
        phone = %request.phone_display(),
        text = request.message.as_deref().unwrap_or_default(),
        "Received order-flow message"
    );

    let reply = match request.message.as_deref() {
        Some(message) => order_flow::respond(message),
        None => order_flow::INVALID_MESSAGE_REPLY.to_string(),
    };

    Json(MessageResponse { reply })
}

pub async fn verify_webhook(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> Response {
    match verify_subscription(&query, &state.config.whatsapp.verify_token) {
        Some(challenge) => (StatusCode::OK, challenge.to_string()).into_response(),
        None => StatusCode::FORBIDDEN.into_response(),
    }
}

/// WhatsApp message notifications. Unreadable, non-text and empty
/// notifications are acknowledged without a reply.
pub async fn receive_webhook(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> StatusCode {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            warn!("Unreadable webhook notification: {}", rejection);
            return StatusCode::OK;
        }
    };

    let Some(message) = InboundMessage::from_webhook(&payload) else {
        return StatusCode::OK;
    };

    let request_id = Uuid::new_v4();
    let (intent, reply) = state.classifier.respond(&message.text);
    info!(
        %request_id,
        sender = %message.sender,
        ?intent,
        "Received WhatsApp text message"
    );

    match state.sender.send_text(&message.sender, &reply).await {
        Ok(()) => {
            info!(%request_id, "Reply sent to {}", message.sender);
            StatusCode::OK
        }
        Err(e) => {
            error!(%request_id, "Failed to send reply to {}: {}", message.sender, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
