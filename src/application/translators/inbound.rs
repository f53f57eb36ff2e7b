use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    events::InboundEvent,
    extract::{first_str, join},
    models::{
        CanonicalMessage, InboxContact, InboxEnvelope, InboxEvent, InboxMedia, InboxMessage,
        MediaContent, MessageKind, NormalizedPhone,
    },
};

pub const UNSUPPORTED_PLACEHOLDER: &str = "[Unsupported message type from WhatsApp]";

const TEXT_PATHS: &[&str] = &["payload.payload.text", "payload.text", "text"];

/// Objects that may hold the media fields, most specific layout first.
const MEDIA_CONTAINERS: &[&str] = &["payload.payload", "payload", ""];

const FILENAME_KEYS: &[&str] = &["filename", "fileName"];

fn media_placeholder(content_type: &str) -> String {
    format!("[{content_type} received without a usable URL]")
}

/// Candidate paths for `key` across the known containers, including the
/// type-keyed sub-object some payloads use (`payload.image.url`).
fn media_paths(content_type: &str, keys: &[&str]) -> Vec<String> {
    let mut paths = Vec::new();
    for container in MEDIA_CONTAINERS {
        for key in keys {
            paths.push(join(container, key));
        }
        let typed = join(container, content_type);
        for key in keys {
            paths.push(join(&typed, key));
        }
    }
    paths
}

/// `name` is a filename only inside the media object itself; on the outer
/// event and `payload` it can be anything (app or sender names).
fn filename_paths(content_type: &str) -> Vec<String> {
    let mut paths = media_paths(content_type, FILENAME_KEYS);
    paths.push("payload.payload.name".to_string());
    for container in MEDIA_CONTAINERS {
        paths.push(join(&join(container, content_type), "name"));
    }
    paths
}

/// Maps a screened inbound event to its canonical form. Never fails: anything the
/// relay cannot represent becomes a text placeholder so the agent still sees it.
pub fn translate_inbound(event: &InboundEvent) -> CanonicalMessage {
    let body = event.body();
    let content_type = event.content_type().unwrap_or("text");

    match MessageKind::from_str(content_type) {
        Some(kind) if kind.is_media() => {
            let content_type = content_type.trim().to_ascii_lowercase();
            let url = first_str(body, &media_paths(&content_type, &["url"]));

            match url {
                Some(url) => CanonicalMessage::Media {
                    kind,
                    media: MediaContent {
                        url: url.to_string(),
                        caption: first_str(body, &media_paths(&content_type, &["caption"]))
                            .map(str::to_string),
                        filename: first_str(body, &filename_paths(&content_type))
                            .map(str::to_string),
                    },
                },
                None => CanonicalMessage::Text(media_placeholder(&content_type)),
            }
        }
        _ => CanonicalMessage::Text(
            first_str(body, TEXT_PATHS)
                .unwrap_or(UNSUPPORTED_PLACEHOLDER)
                .to_string(),
        ),
    }
}

fn inbox_message(message: CanonicalMessage) -> InboxMessage {
    match message {
        CanonicalMessage::Text(text) => InboxMessage::Text { text },
        CanonicalMessage::Media { kind, media } => {
            let media = InboxMedia {
                url: media.url,
                caption: media.caption,
                filename: media.filename,
            };
            match kind {
                MessageKind::Image => InboxMessage::Image(media),
                MessageKind::Audio => InboxMessage::Audio(media),
                MessageKind::Video => InboxMessage::Video(media),
                MessageKind::File | MessageKind::Text => InboxMessage::File(media),
            }
        }
    }
}

/// Wraps the canonical message into the inbox's ingestion envelope.
pub fn build_envelope(
    event: &InboundEvent,
    sender: &NormalizedPhone,
    message: CanonicalMessage,
    channel_id: &str,
) -> InboxEnvelope {
    let m_id = event
        .event_id()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let timestamp = event
        .timestamp_ms()
        .unwrap_or_else(|| Utc::now().timestamp_millis());

    InboxEnvelope {
        channel_id: channel_id.to_string(),
        contact_id: sender.e164.clone(),
        events: vec![InboxEvent {
            event_type: "message",
            m_id,
            timestamp,
            message: inbox_message(message),
        }],
        contact: InboxContact {
            first_name: event.sender_name().unwrap_or_default().to_string(),
            phone: sender.e164.clone(),
            country_code: event.country_code().unwrap_or_default(),
            language: "en",
        },
    }
}
