pub mod envelope;
pub mod message;
pub mod phone;

pub use envelope::{
    InboxContact, InboxEnvelope, InboxEvent, InboxMedia, InboxMessage, WaProviderMessage,
    WaProviderRequest,
};
pub use message::{CanonicalMessage, MediaContent, MessageKind};
pub use phone::{NormalizedPhone, to_bare_digits, to_e164};
