use chrono::Utc;
use std::fmt;

const ORDER_ID_PREFIX: &str = "SASYAM";
const ORDER_ID_DIGITS: usize = 6;

/// Order reference quoted back to the customer on confirmation.
///
/// Built from the tail of a millisecond timestamp. Nothing is stored behind
/// it and collisions are not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderId(String);

impl OrderId {
    pub fn generate() -> Self {
        Self::from_millis(Utc::now().timestamp_millis())
    }

    pub fn from_millis(millis: i64) -> Self {
        let digits = millis.unsigned_abs().to_string();
        let tail = &digits[digits.len().saturating_sub(ORDER_ID_DIGITS)..];
        Self(format!("{ORDER_ID_PREFIX}{tail:0>width$}", width = ORDER_ID_DIGITS))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
