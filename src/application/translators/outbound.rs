use crate::domain::{
    events::OutgoingEvent,
    extract::first_str,
    models::{CanonicalMessage, MediaContent, MessageKind, WaProviderMessage, WaProviderRequest},
};

const TEXT_PATHS: &[&str] = &["message.text", "text"];

/// Attachment layouts seen across inbox integration versions, in priority order.
const MEDIA_URL_PATHS: &[&str] = &[
    "message.url",
    "message.mediaUrl",
    "message.media_url",
    "message.attachment.url",
    "message.attachment.payload.url",
    "message.attachments.0.url",
    "message.attachments.0.payload.url",
    "message.media.url",
];

const CAPTION_PATHS: &[&str] = &[
    "message.caption",
    "message.attachment.caption",
    "message.attachments.0.caption",
];

const FILENAME_PATHS: &[&str] = &[
    "message.filename",
    "message.fileName",
    "message.attachment.fileName",
    "message.attachment.filename",
    "message.attachments.0.fileName",
    "message.attachments.0.filename",
];

const ATTACHMENT_KIND_PATHS: &[&str] = &["message.attachment.type", "message.attachments.0.type"];

fn resolve_kind(event: &OutgoingEvent) -> Option<MessageKind> {
    let declared = event.message_type()?;
    if declared.eq_ignore_ascii_case("attachment") {
        return first_str(event.body(), ATTACHMENT_KIND_PATHS).and_then(MessageKind::from_str);
    }
    MessageKind::from_str(declared)
}

/// Extracts the reply content, or `None` when nothing sendable is present.
pub fn extract_content(event: &OutgoingEvent) -> Option<CanonicalMessage> {
    let body = event.body();

    match resolve_kind(event)? {
        MessageKind::Text => {
            first_str(body, TEXT_PATHS).map(|text| CanonicalMessage::Text(text.to_string()))
        }
        kind => first_str(body, MEDIA_URL_PATHS).map(|url| CanonicalMessage::Media {
            kind,
            media: MediaContent {
                url: url.to_string(),
                caption: first_str(body, CAPTION_PATHS).map(str::to_string),
                filename: first_str(body, FILENAME_PATHS).map(str::to_string),
            },
        }),
    }
}

fn provider_message(message: CanonicalMessage) -> WaProviderMessage {
    match message {
        CanonicalMessage::Text(text) => WaProviderMessage::Text {
            text,
            preview_url: false,
        },
        CanonicalMessage::Media { kind, media } => match kind {
            MessageKind::Image => WaProviderMessage::Image {
                preview_url: media.url.clone(),
                original_url: media.url,
                caption: media.caption,
            },
            MessageKind::Audio => WaProviderMessage::Audio { url: media.url },
            MessageKind::Video => WaProviderMessage::Video {
                url: media.url,
                caption: media.caption,
            },
            MessageKind::File | MessageKind::Text => WaProviderMessage::File {
                url: media.url,
                filename: media.filename,
            },
        },
    }
}

/// Maps an agent reply to the provider's send request. `None` means the reply is a
/// no-op: no destination, unknown type, or no content.
pub fn translate_outbound(event: &OutgoingEvent) -> Option<WaProviderRequest> {
    let destination = event.destination()?;
    let content = extract_content(event)?;

    Some(WaProviderRequest {
        destination: destination.bare,
        message: provider_message(content),
    })
}
