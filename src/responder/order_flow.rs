//! Scripted purchase conversation for the chat-assistant integration.
//!
//! Every turn is evaluated on its own text. The conversation appears
//! multi-step only because the assistant UI restricts what the customer can
//! send next; nothing is remembered between requests.

use super::order_id::OrderId;
use tracing::debug;

/// Price of one 1 litre bottle, in rupees.
pub const PRICE_PER_BOTTLE: u32 = 324;

/// Messages longer than this (in characters) are taken as a delivery address.
const MIN_ADDRESS_CHARS: usize = 10;

const GREETINGS: &[&str] = &["hi", "hey", "hello"];
const ONE_LITRE: &[&str] = &["1 litre", "1 liter", "1l"];
const FIVE_LITRE: &[&str] = &["5 litre", "5 liter", "5l"];

pub const INVALID_MESSAGE_REPLY: &str = "Please send a valid message to continue.";

const GREETING_REPLY: &str = "Hey! 👋 Welcome to *Sasyam Edibles* 🌿\n\n\
    We sell *cold-pressed groundnut oil*.\n\n\
    Please choose the pack size:\n\
    • 1 litre\n\
    • 5 litre";

const ONE_LITRE_REPLY: &str = "Great choice 👍\n\n\
    Each *1 litre* bottle costs ₹324.\n\n\
    How many bottles would you like to order?";

const FIVE_LITRE_REPLY: &str = "Great choice 👍\n\n\
    Please enter the number of *5 litre* cans you want to order.";

const FALLBACK_REPLY: &str = "I didn’t quite get that 🤔\n\n\
    Please reply with:\n\
    • Hi\n\
    • 1 litre\n\
    • 5 litre";

/// Which step of the scripted order a single message maps to.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderStep {
    Greeting,
    OneLitrePack,
    FiveLitrePack,
    Quantity(f64),
    DeliveryAddress,
    Unrecognized,
}

impl OrderStep {
    /// Classifies already-normalized text. First matching rule wins.
    pub fn classify(text: &str) -> Self {
        if GREETINGS.contains(&text) {
            Self::Greeting
        } else if ONE_LITRE.contains(&text) {
            Self::OneLitrePack
        } else if FIVE_LITRE.contains(&text) {
            Self::FiveLitrePack
        } else if let Some(quantity) = parse_quantity(text) {
            Self::Quantity(quantity)
        } else if text.chars().count() > MIN_ADDRESS_CHARS {
            Self::DeliveryAddress
        } else {
            Self::Unrecognized
        }
    }
}

pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Produces the reply for one inbound message.
pub fn respond(message: &str) -> String {
    respond_with(message, OrderId::generate)
}

/// Same as [`respond`], with the order id source supplied by the caller.
pub fn respond_with<F>(message: &str, order_id: F) -> String
where
    F: FnOnce() -> OrderId,
{
    let text = normalize(message);
    if text.is_empty() {
        return INVALID_MESSAGE_REPLY.to_string();
    }

    let step = OrderStep::classify(&text);
    debug!(?step, "Classified order-flow message");

    match step {
        OrderStep::Greeting => GREETING_REPLY.to_string(),
        OrderStep::OneLitrePack => ONE_LITRE_REPLY.to_string(),
        OrderStep::FiveLitrePack => FIVE_LITRE_REPLY.to_string(),
        OrderStep::Quantity(quantity) => order_summary(quantity),
        OrderStep::DeliveryAddress => order_confirmation(&order_id()),
        OrderStep::Unrecognized => FALLBACK_REPLY.to_string(),
    }
}

/// Known defect: the pack size is always reported as 1 litre and priced per
/// bottle, even when the customer picked 5 litre cans on an earlier turn.
/// That earlier choice is not available here.
fn order_summary(quantity: f64) -> String {
    // `-0` reads as plain `0`
    let quantity = quantity + 0.0;
    let total = quantity * f64::from(PRICE_PER_BOTTLE);
    format!(
        "🧾 *Order Summary*\n\n\
         • Pack size: 1 litre\n\
         • Quantity: {quantity}\n\
         • Price per bottle: ₹{PRICE_PER_BOTTLE}\n\
         • Total amount: ₹{total}\n\n\
         Please share your *delivery address*."
    )
}

fn order_confirmation(order_id: &OrderId) -> String {
    format!(
        "✅ *Order Confirmed!*\n\n\
         Order ID: {order_id}\n\n\
         You will receive your order within *24–48 hours* 🚚\n\n\
         Thank you for choosing *Sasyam Edibles* 🌿"
    )
}

/// Base-10 integer or decimal, optionally signed. `inf`/`nan` spellings and
/// out-of-range values are not quantities.
fn parse_quantity(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
