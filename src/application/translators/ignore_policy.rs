use std::fmt;

use crate::domain::events::InboundEvent;

/// Top-level event types that carry a user message. Anything else the provider
/// posts (`message-event`, `user-event`, `billing-event`, ...) is lifecycle noise.
const MESSAGE_CLASS_TYPES: &[&str] = &[
    "message",
    "text",
    "image",
    "audio",
    "voice",
    "video",
    "file",
    "document",
    "sticker",
    "location",
    "contact",
    "button_reply",
    "list_reply",
    "quick_reply",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    MissingPayload,
    MissingSenderPhone,
    NonMessageEvent,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IgnoreReason::MissingPayload => "no payload",
            IgnoreReason::MissingSenderPhone => "no sender phone",
            IgnoreReason::NonMessageEvent => "non-message event",
        };
        f.write_str(text)
    }
}

/// Returns why the event should be acknowledged without forwarding, if it should.
pub fn screen(event: &InboundEvent) -> Option<IgnoreReason> {
    if !event.has_payload() {
        return Some(IgnoreReason::MissingPayload);
    }

    if let Some(event_type) = event.event_type() {
        let event_type = event_type.trim().to_ascii_lowercase();
        if !MESSAGE_CLASS_TYPES.contains(&event_type.as_str()) {
            return Some(IgnoreReason::NonMessageEvent);
        }
    }

    if event.sender_phone().is_none() {
        return Some(IgnoreReason::MissingSenderPhone);
    }

    None
}

pub fn should_ignore(event: &InboundEvent) -> bool {
    screen(event).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(body: serde_json::Value) -> InboundEvent {
        InboundEvent::new(body)
    }

    #[test]
    fn missing_payload_is_ignored() {
        assert_eq!(screen(&event(json!(null))), Some(IgnoreReason::MissingPayload));
        assert_eq!(
            screen(&event(json!({ "sender": { "phone": "1" }, "type": "text" }))),
            Some(IgnoreReason::MissingPayload)
        );
        assert_eq!(
            screen(&event(json!({ "payload": "text" }))),
            Some(IgnoreReason::MissingPayload)
        );
    }

    #[test]
    fn missing_sender_phone_at_every_path_is_ignored() {
        let bodies = [
            json!({ "type": "message", "payload": { "type": "text", "payload": { "text": "hi" } } }),
            json!({ "type": "message", "payload": { "sender": { "name": "Mona" } } }),
            json!({ "type": "message", "payload": { "sender": { "phone": "  " } } }),
            json!({ "sender": {}, "payload": { "text": "hi" } }),
        ];

        for body in bodies {
            assert_eq!(
                screen(&event(body.clone())),
                Some(IgnoreReason::MissingSenderPhone),
                "{body}"
            );
        }
    }

    #[test]
    fn lifecycle_events_are_ignored_even_with_a_phone() {
        let status = event(json!({
            "type": "message-event",
            "payload": {
                "id": "ee4a68a0",
                "type": "delivered",
                "destination": "201500000000",
                "sender": { "phone": "201500000000" }
            }
        }));

        assert_eq!(screen(&status), Some(IgnoreReason::NonMessageEvent));
        assert!(should_ignore(&status));
    }

    #[test]
    fn user_messages_pass() {
        let nested = event(json!({
            "type": "message",
            "payload": { "type": "image", "sender": { "phone": "201500000000" } }
        }));
        let flattened = event(json!({
            "sender": { "phone": "201500000000" },
            "type": "text",
            "payload": { "text": "hi" }
        }));
        let untyped = event(json!({ "payload": { "source": 201500000000u64 } }));

        assert!(!should_ignore(&nested));
        assert!(!should_ignore(&flattened));
        assert!(!should_ignore(&untyped));
    }
}
