//! Order-vs-support triage for messages arriving on the WhatsApp webhook.

use tracing::debug;

/// Substrings that mark a message as being about buying oil.
pub const ORDER_KEYWORDS: &[&str] = &[
    "order",
    "buy",
    "groundnut",
    "ground nut",
    "oil",
    "1l",
    "1 l",
    "1 litre",
    "1 liter",
    "5l",
    "5 l",
    "5 litre",
    "5 liter",
    "15l",
    "15 l",
    "15 litre",
    "15 liter",
];

const ORDER_INSTRUCTIONS_REPLY: &str = "Hi 👋 Thanks for reaching out to *Sasyam Edibles* 🌿\n\n\
    We sell *cold-pressed groundnut oil* in 1 litre, 5 litre and 15 litre packs.\n\n\
    Please place your order via our WhatsApp assistant: say *Hi* to get started \
    and we'll guide you through pack size, quantity and delivery address.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Order,
    Other,
}

impl Intent {
    /// Case-insensitive containment against [`ORDER_KEYWORDS`].
    pub fn classify(text: &str) -> Self {
        let text = text.to_lowercase();
        if ORDER_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
            Self::Order
        } else {
            Self::Other
        }
    }
}

/// Replies to webhook messages, quoting the configured support line for
/// anything that is not an order.
#[derive(Debug, Clone)]
pub struct Classifier {
    support_number: String,
}

impl Classifier {
    pub fn new(support_number: impl Into<String>) -> Self {
        Self {
            support_number: support_number.into(),
        }
    }

    pub fn respond(&self, text: &str) -> (Intent, String) {
        let intent = Intent::classify(text);
        debug!(?intent, "Classified webhook message");

        let reply = match intent {
            Intent::Order => ORDER_INSTRUCTIONS_REPLY.to_string(),
            Intent::Other => self.support_reply(),
        };
        (intent, reply)
    }

    fn support_reply(&self) -> String {
        format!(
            "Hi 👋 Thanks for contacting *Sasyam Edibles* 🌿\n\n\
             For any other queries, please call or WhatsApp our support team at {}.\n\n\
             To place an order, just send *Hi*.",
            self.support_number
        )
    }
}
