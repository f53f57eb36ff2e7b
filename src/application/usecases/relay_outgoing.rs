use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    application::{services::platforms::WaProvider, translators::outbound::translate_outbound},
    domain::{errors::DeliveryError, events::OutgoingEvent},
};

#[derive(Debug)]
pub enum OutgoingOutcome {
    Skipped,
    Sent,
    Failed(DeliveryError),
}

pub struct RelayOutgoingResponse {
    /// Synthetic id echoed to the inbox; the provider's own id is not known yet.
    pub m_id: String,
    pub outcome: OutgoingOutcome,
}

/// Inbox → WhatsApp provider direction. Never fails towards the caller: a declared
/// failure makes the inbox resend, which duplicates messages on the user's phone.
pub struct RelayOutgoingUseCase {
    provider: Arc<dyn WaProvider>,
}

impl RelayOutgoingUseCase {
    pub fn new(provider: Arc<dyn WaProvider>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, event: OutgoingEvent) -> RelayOutgoingResponse {
        let m_id = Uuid::new_v4().to_string();

        let Some(request) = translate_outbound(&event) else {
            info!(m_id = %m_id, "outgoing message has no destination or content, skipping");
            return RelayOutgoingResponse {
                m_id,
                outcome: OutgoingOutcome::Skipped,
            };
        };

        let outcome = match self.provider.send(&request).await {
            Ok(receipt) => {
                info!(destination = %request.destination, m_id = %m_id, "forwarded reply to WhatsApp provider");
                debug!(status = receipt.status, body = %receipt.body, "provider response");
                OutgoingOutcome::Sent
            }
            Err(err) => {
                warn!(
                    destination = %request.destination,
                    m_id = %m_id,
                    kind = err.kind(),
                    error = %err,
                    "error forwarding reply to WhatsApp provider"
                );
                OutgoingOutcome::Failed(err)
            }
        };

        RelayOutgoingResponse { m_id, outcome }
    }
}
