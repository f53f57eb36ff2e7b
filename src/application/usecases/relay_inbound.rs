use std::sync::Arc;

use tracing::{debug, error, info};

use crate::{
    application::{
        services::platforms::InboxPlatform,
        translators::{
            ignore_policy::{IgnoreReason, screen},
            inbound::{build_envelope, translate_inbound},
        },
    },
    domain::{errors::DeliveryError, events::InboundEvent},
};

#[derive(Clone)]
pub struct RelayInboundConfig {
    pub channel_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundOutcome {
    Ignored(IgnoreReason),
    Forwarded { m_id: String },
}

/// WhatsApp provider → inbox direction.
pub struct RelayInboundUseCase {
    inbox: Arc<dyn InboxPlatform>,
    config: RelayInboundConfig,
}

impl RelayInboundUseCase {
    pub fn new(inbox: Arc<dyn InboxPlatform>, config: RelayInboundConfig) -> Self {
        Self { inbox, config }
    }

    /// Errors only when the inbox could not be reached or refused the envelope;
    /// the caller turns that into a status the provider will retry on.
    pub async fn execute(&self, event: InboundEvent) -> Result<InboundOutcome, DeliveryError> {
        if let Some(reason) = screen(&event) {
            info!(%reason, "ignoring non-message event from WhatsApp provider");
            return Ok(InboundOutcome::Ignored(reason));
        }
        let Some(sender) = event.sender_phone() else {
            return Ok(InboundOutcome::Ignored(IgnoreReason::MissingSenderPhone));
        };

        let message = translate_inbound(&event);
        let kind = message.kind();
        let envelope = build_envelope(&event, &sender, message, &self.config.channel_id);
        let m_id = envelope
            .events
            .first()
            .map(|e| e.m_id.clone())
            .unwrap_or_default();

        match self.inbox.ingest(&envelope).await {
            Ok(receipt) => {
                info!(
                    contact = %envelope.contact_id,
                    kind = kind.as_str(),
                    m_id = %m_id,
                    "forwarded message to inbox"
                );
                debug!(status = receipt.status, body = %receipt.body, "inbox response");
                Ok(InboundOutcome::Forwarded { m_id })
            }
            Err(err) => {
                error!(
                    contact = %envelope.contact_id,
                    kind = err.kind(),
                    error = %err,
                    "error forwarding message to inbox"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Mutex;

    use crate::{
        application::services::platforms::DeliveryReceipt,
        domain::models::{InboxEnvelope, InboxMessage},
    };

    #[derive(Default)]
    struct RecordingInbox {
        envelopes: Mutex<Vec<InboxEnvelope>>,
        fail_with: Option<u16>,
    }

    #[async_trait]
    impl InboxPlatform for RecordingInbox {
        async fn ingest(
            &self,
            envelope: &InboxEnvelope,
        ) -> Result<DeliveryReceipt, DeliveryError> {
            self.envelopes.lock().await.push(envelope.clone());
            match self.fail_with {
                Some(status) => Err(DeliveryError::Rejected {
                    status,
                    body: "nope".to_string(),
                }),
                None => Ok(DeliveryReceipt {
                    status: 200,
                    body: String::new(),
                }),
            }
        }
    }

    fn usecase(inbox: Arc<RecordingInbox>) -> RelayInboundUseCase {
        RelayInboundUseCase::new(
            inbox,
            RelayInboundConfig {
                channel_id: "chan-1".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn forwards_flattened_text_message() {
        let inbox = Arc::new(RecordingInbox::default());
        let outcome = usecase(inbox.clone())
            .execute(InboundEvent::new(json!({
                "sender": { "phone": "201500000000" },
                "type": "text",
                "payload": { "text": "hi" }
            })))
            .await
            .unwrap();

        assert!(matches!(outcome, InboundOutcome::Forwarded { .. }));
        let envelopes = inbox.envelopes.lock().await;
        assert_eq!(envelopes.len(), 1);
        assert_eq!(envelopes[0].contact_id, "+201500000000");
        assert_eq!(envelopes[0].channel_id, "chan-1");
        assert_eq!(
            envelopes[0].events[0].message,
            InboxMessage::Text {
                text: "hi".to_string()
            }
        );
    }

    #[tokio::test]
    async fn ignored_events_never_reach_the_inbox() {
        let inbox = Arc::new(RecordingInbox::default());
        let usecase = usecase(inbox.clone());

        for body in [
            json!({}),
            json!({ "type": "message", "payload": { "type": "text", "payload": { "text": "hi" } } }),
            json!({ "type": "user-event", "payload": { "phone": "201500000000", "type": "opted-in" } }),
        ] {
            let outcome = usecase.execute(InboundEvent::new(body)).await.unwrap();
            assert!(matches!(outcome, InboundOutcome::Ignored(_)));
        }

        assert!(inbox.envelopes.lock().await.is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_is_returned() {
        let inbox = Arc::new(RecordingInbox {
            fail_with: Some(502),
            ..Default::default()
        });
        let err = usecase(inbox)
            .execute(InboundEvent::new(json!({
                "sender": { "phone": "201500000000" },
                "type": "text",
                "payload": { "text": "hi" }
            })))
            .await
            .unwrap_err();

        assert!(matches!(err, DeliveryError::Rejected { status: 502, .. }));
    }
}
