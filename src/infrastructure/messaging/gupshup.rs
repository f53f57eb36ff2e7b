use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    application::services::platforms::{DeliveryReceipt, WaProvider},
    domain::{errors::DeliveryError, models::WaProviderRequest},
    infrastructure::messaging::delivery::{DeliveryBody, DeliveryRequest, HttpDeliveryClient},
};

pub const DEFAULT_API_URL: &str = "https://api.gupshup.io/sm/api/v1/msg";

#[derive(Clone)]
pub struct GupshupConfig {
    pub api_url: String,
    pub api_key: String,
    /// Business WhatsApp number registered with Gupshup, bare digits.
    pub source_phone: String,
    /// Gupshup app name, sent as `src.name`.
    pub src_name: String,
}

pub struct GupshupClient {
    delivery: HttpDeliveryClient,
    config: GupshupConfig,
}

impl GupshupClient {
    pub fn new(delivery: HttpDeliveryClient, config: GupshupConfig) -> Arc<dyn WaProvider> {
        Arc::new(Self { delivery, config }) as Arc<dyn WaProvider>
    }
}

#[async_trait]
impl WaProvider for GupshupClient {
    async fn send(&self, request: &WaProviderRequest) -> Result<DeliveryReceipt, DeliveryError> {
        let fields = request
            .form_fields(&self.config.source_phone, &self.config.src_name)
            .map_err(|err| DeliveryError::Encoding(err.to_string()))?;

        self.delivery
            .deliver(DeliveryRequest {
                url: self.config.api_url.clone(),
                headers: vec![("apikey", self.config.api_key.clone())],
                body: DeliveryBody::Form(fields),
            })
            .await
    }
}
