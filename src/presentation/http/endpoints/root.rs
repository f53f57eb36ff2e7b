use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::usecases::{
        relay_inbound::RelayInboundUseCase, relay_outgoing::RelayOutgoingUseCase,
    },
    presentation::http::security::InboxAuthConfig,
};

#[derive(Clone)]
pub struct ApiState {
    pub relay_inbound_usecase: Arc<RelayInboundUseCase>,
    pub relay_outgoing_usecase: Arc<RelayOutgoingUseCase>,
    pub inbox_auth: InboxAuthConfig,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    /// Webhooks called by the WhatsApp provider
    WaProvider,
    /// Webhooks called by the agent inbox
    InboxPlatform,
}
