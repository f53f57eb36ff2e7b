use serde_json::Value;

use crate::domain::{
    extract::{first_i64, first_scalar, first_str, lookup},
    models::NormalizedPhone,
};

const SENDER_PHONE_PATHS: &[&str] = &["payload.sender.phone", "sender.phone", "payload.source"];
const SENDER_NAME_PATHS: &[&str] = &["payload.sender.name", "sender.name"];
const COUNTRY_CODE_PATHS: &[&str] = &["payload.sender.country_code", "sender.country_code"];
const CONTENT_TYPE_PATHS: &[&str] = &["payload.type", "type"];
const EVENT_ID_PATHS: &[&str] = &["payload.id", "id"];
const TIMESTAMP_PATHS: &[&str] = &["timestamp", "payload.timestamp"];

const DESTINATION_PATHS: &[&str] = &["contactId", "recipientId", "recipient.id", "to"];
const MESSAGE_TYPE_PATHS: &[&str] = &["message.type", "type"];

/// Parses a webhook body without ever failing: empty or non-JSON bodies become `null`.
fn lenient_json(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes).unwrap_or(Value::Null)
}

/// Webhook body posted by the WhatsApp provider. Held untyped because the provider
/// has used both a nested (`payload.sender`) and a flattened (`sender`) layout.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    body: Value,
}

impl InboundEvent {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(lenient_json(bytes))
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn has_payload(&self) -> bool {
        matches!(lookup(&self.body, "payload"), Some(Value::Object(_)))
    }

    /// Top-level event type (`message`, `message-event`, `user-event`, ...).
    pub fn event_type(&self) -> Option<&str> {
        first_str(&self.body, &["type"])
    }

    /// Content type of the message itself (`text`, `image`, ...).
    pub fn content_type(&self) -> Option<&str> {
        first_str(&self.body, CONTENT_TYPE_PATHS)
    }

    pub fn sender_phone(&self) -> Option<NormalizedPhone> {
        first_scalar(&self.body, SENDER_PHONE_PATHS).and_then(|raw| NormalizedPhone::parse(&raw))
    }

    pub fn sender_name(&self) -> Option<&str> {
        first_str(&self.body, SENDER_NAME_PATHS)
    }

    pub fn country_code(&self) -> Option<String> {
        first_scalar(&self.body, COUNTRY_CODE_PATHS)
    }

    pub fn event_id(&self) -> Option<String> {
        first_scalar(&self.body, EVENT_ID_PATHS)
    }

    pub fn timestamp_ms(&self) -> Option<i64> {
        first_i64(&self.body, TIMESTAMP_PATHS)
    }
}

/// Outgoing-message request posted by the inbox when an agent replies.
#[derive(Debug, Clone)]
pub struct OutgoingEvent {
    body: Value,
}

impl OutgoingEvent {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(lenient_json(bytes))
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn destination(&self) -> Option<NormalizedPhone> {
        first_scalar(&self.body, DESTINATION_PATHS).and_then(|raw| NormalizedPhone::parse(&raw))
    }

    pub fn message_type(&self) -> Option<&str> {
        first_str(&self.body, MESSAGE_TYPE_PATHS)
    }
}
