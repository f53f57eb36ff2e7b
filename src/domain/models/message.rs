#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Text,
    Image,
    Audio,
    Video,
    File,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Image => "image",
            MessageKind::Audio => "audio",
            MessageKind::Video => "video",
            MessageKind::File => "file",
        }
    }

    /// Accepts the type names both platforms use; `document` is WhatsApp's name for a file.
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(MessageKind::Text),
            "image" => Some(MessageKind::Image),
            "audio" | "voice" => Some(MessageKind::Audio),
            "video" => Some(MessageKind::Video),
            "file" | "document" => Some(MessageKind::File),
            _ => None,
        }
    }

    pub fn is_media(&self) -> bool {
        !matches!(self, MessageKind::Text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaContent {
    pub url: String,
    pub caption: Option<String>,
    pub filename: Option<String>,
}

/// Platform-neutral message, produced by a translator and consumed right away by
/// the target-specific builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalMessage {
    Text(String),
    Media { kind: MessageKind, media: MediaContent },
}

impl CanonicalMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            CanonicalMessage::Text(_) => MessageKind::Text,
            CanonicalMessage::Media { kind, .. } => *kind,
        }
    }
}
