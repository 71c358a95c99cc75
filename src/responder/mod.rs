pub mod classifier;
pub mod order_flow;
mod order_id;

pub use classifier::{Classifier, Intent, ORDER_KEYWORDS};
pub use order_flow::{OrderStep, PRICE_PER_BOTTLE};
pub use order_id::OrderId;
