use std::fmt::Display;

use serde::Deserialize;

/// Verified provider event, constructed once per request and discarded after
/// dispatch.
#[derive(Debug, Deserialize)]
pub struct PaymentEvent {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
    pub data: PaymentEventData,
}

#[derive(Debug, Deserialize)]
pub struct PaymentEventData {
    pub object: serde_json::Value,
}

impl PaymentEvent {
    pub fn kind(&self) -> Option<PaymentEventKind> {
        PaymentEventKind::from_event_type(&self.type_)
    }
}

/// Closed set of handled event types. Unknown type strings stay outside the
/// enum and are acknowledged without dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentEventKind {
    PaymentSucceeded,
    PaymentFailed,
    Refunded,
}

impl PaymentEventKind {
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "payment_intent.succeeded" => Some(PaymentEventKind::PaymentSucceeded),
            "payment_intent.payment_failed" => Some(PaymentEventKind::PaymentFailed),
            "charge.refunded" => Some(PaymentEventKind::Refunded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentEventKind::PaymentSucceeded => "payment_intent.succeeded",
            PaymentEventKind::PaymentFailed => "payment_intent.payment_failed",
            PaymentEventKind::Refunded => "charge.refunded",
        }
    }
}

impl Display for PaymentEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
