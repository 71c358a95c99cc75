use super::types::VerifyQuery;
use tracing::{info, warn};

const SUBSCRIBE_MODE: &str = "subscribe";

/// Returns the challenge to echo back when the subscription request carries
/// `hub.mode=subscribe` and the expected verify token.
///
/// An empty `expected_token` never verifies.
pub fn verify_subscription<'a>(query: &'a VerifyQuery, expected_token: &str) -> Option<&'a str> {
    let mode_ok = query.mode.as_deref() == Some(SUBSCRIBE_MODE);
    let token_ok =
        !expected_token.is_empty() && query.verify_token.as_deref() == Some(expected_token);

    if mode_ok && token_ok {
        info!("Webhook verified successfully");
        Some(query.challenge.as_deref().unwrap_or_default())
    } else {
        warn!(mode = ?query.mode, "Webhook verification rejected");
        None
    }
}
