use async_trait::async_trait;

use crate::domain::{
    errors::DeliveryError,
    models::{InboxEnvelope, WaProviderRequest},
};

/// What a counterpart answered with on success; kept for logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub body: String,
}

/// The agent inbox that user messages are forwarded to.
#[async_trait]
pub trait InboxPlatform: Send + Sync {
    async fn ingest(&self, envelope: &InboxEnvelope) -> Result<DeliveryReceipt, DeliveryError>;
}

/// The WhatsApp provider that agent replies are sent through.
#[async_trait]
pub trait WaProvider: Send + Sync {
    async fn send(&self, request: &WaProviderRequest) -> Result<DeliveryReceipt, DeliveryError>;
}
