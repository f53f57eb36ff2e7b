use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    application::services::platforms::{DeliveryReceipt, InboxPlatform},
    domain::{errors::DeliveryError, models::InboxEnvelope},
    infrastructure::messaging::delivery::{DeliveryBody, DeliveryRequest, HttpDeliveryClient},
};

pub const DEFAULT_WEBHOOK_URL: &str = "https://app.respond.io/custom/channel/webhook/";

#[derive(Clone)]
pub struct RespondIoConfig {
    pub webhook_url: String,
    pub token: String,
}

/// respond.io custom channel: incoming messages are posted as JSON to the
/// channel webhook, authenticated with the channel's bearer token.
pub struct RespondIoClient {
    delivery: HttpDeliveryClient,
    config: RespondIoConfig,
}

impl RespondIoClient {
    pub fn new(delivery: HttpDeliveryClient, config: RespondIoConfig) -> Arc<dyn InboxPlatform> {
        Arc::new(Self { delivery, config }) as Arc<dyn InboxPlatform>
    }
}

#[async_trait]
impl InboxPlatform for RespondIoClient {
    async fn ingest(&self, envelope: &InboxEnvelope) -> Result<DeliveryReceipt, DeliveryError> {
        let body =
            serde_json::to_value(envelope).map_err(|err| DeliveryError::Encoding(err.to_string()))?;

        self.delivery
            .deliver(DeliveryRequest {
                url: self.config.webhook_url.clone(),
                headers: vec![("Authorization", format!("Bearer {}", self.config.token))],
                body: DeliveryBody::Json(body),
            })
            .await
    }
}
