use std::sync::Arc;

use poem::Body;
use poem_openapi::{OpenApi, param::Query, payload::PlainText};
use tracing::{debug, info};

use crate::{
    application::usecases::relay_inbound::InboundOutcome,
    domain::events::InboundEvent,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        requests::read_body,
        responses::InboundWebhookResponse,
    },
};

const VERIFICATION_OK: &str = "Gupshup Webhook verification successful.";

#[derive(Clone)]
pub struct WaProviderEndpoints {
    state: Arc<ApiState>,
}

impl WaProviderEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }

    async fn relay(&self, body: Body) -> InboundWebhookResponse {
        let bytes = read_body(body).await;
        debug!(body = %String::from_utf8_lossy(&bytes), "received webhook from WhatsApp provider");

        match self
            .state
            .relay_inbound_usecase
            .execute(InboundEvent::from_bytes(&bytes))
            .await
        {
            Ok(InboundOutcome::Ignored(_)) => {
                InboundWebhookResponse::Ok(PlainText("Ignored".to_string()))
            }
            Ok(InboundOutcome::Forwarded { .. }) => {
                InboundWebhookResponse::Ok(PlainText("Forwarded to inbox".to_string()))
            }
            Err(_) => InboundWebhookResponse::DeliveryFailed(PlainText(
                "Error in WhatsApp webhook".to_string(),
            )),
        }
    }
}

fn verification_reply(challenge: Option<String>) -> PlainText<String> {
    match challenge {
        Some(challenge) => {
            info!("webhook verification challenge received");
            PlainText(challenge)
        }
        None => {
            info!("webhook verification request without challenge");
            PlainText(VERIFICATION_OK.to_string())
        }
    }
}

#[OpenApi]
impl WaProviderEndpoints {
    #[oai(path = "/webhook/wa-provider", method = "get", tag = EndpointsTags::WaProvider)]
    pub async fn verify(
        &self,
        #[oai(name = "hub.challenge")] challenge: Query<Option<String>>,
    ) -> PlainText<String> {
        verification_reply(challenge.0)
    }

    #[oai(path = "/webhook/wa-provider", method = "post", tag = EndpointsTags::WaProvider)]
    pub async fn receive(&self, body: Body) -> InboundWebhookResponse {
        self.relay(body).await
    }

    #[oai(path = "/webhook/gupshup", method = "get", tag = EndpointsTags::WaProvider)]
    pub async fn verify_gupshup(
        &self,
        #[oai(name = "hub.challenge")] challenge: Query<Option<String>>,
    ) -> PlainText<String> {
        verification_reply(challenge.0)
    }

    #[oai(path = "/webhook/gupshup", method = "post", tag = EndpointsTags::WaProvider)]
    pub async fn receive_gupshup(&self, body: Body) -> InboundWebhookResponse {
        self.relay(body).await
    }
}
