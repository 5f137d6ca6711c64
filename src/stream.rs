//! Payload decoding shared by the SSE and WebSocket clients.
//!
//! The backend streams either JSON or plain text on the same channel, so the
//! transport enforces no schema: payloads that parse as JSON are delivered
//! decoded, and anything else is passed through unchanged. A malformed JSON
//! payload and a legitimate plain-text message are indistinguishable here;
//! consumers already tolerate either shape.

use serde_json::Value;

/// A single payload received from a streaming connection.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamMessage {
    /// Payload that decoded as JSON.
    Json(Value),
    /// Raw passthrough when decoding fails.
    Raw(String),
}

impl StreamMessage {
    /// Decode a text payload, falling back to raw passthrough on failure.
    pub fn decode(payload: &str) -> Self {
        match serde_json::from_str::<Value>(payload) {
            Ok(value) => StreamMessage::Json(value),
            Err(_) => StreamMessage::Raw(payload.to_string()),
        }
    }

    /// The value of a `"text"` field if the payload is a JSON object,
    /// otherwise the raw payload itself.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamMessage::Json(value) => value.get("text").and_then(Value::as_str),
            StreamMessage::Raw(raw) => Some(raw.as_str()),
        }
    }

    /// The value of a string field if the payload is a JSON object.
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            StreamMessage::Json(value) => value.get(name).and_then(Value::as_str),
            StreamMessage::Raw(_) => None,
        }
    }
}
