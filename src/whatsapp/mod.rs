pub mod client;
pub mod types;
pub mod verify;

pub use client::{CloudApiClient, MessageSender};
pub use types::{InboundMessage, OutboundTextMessage, VerifyQuery};
pub use verify::verify_subscription;
