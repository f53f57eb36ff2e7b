use std::sync::Arc;

use anyhow::Context;
use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wa_inbox_relay::{
    application::usecases::{
        relay_inbound::RelayInboundUseCase, relay_outgoing::RelayOutgoingUseCase,
    },
    config::Config,
    infrastructure::messaging::{
        delivery::HttpDeliveryClient, gupshup::GupshupClient, respond_io::RespondIoClient,
    },
    presentation::http::{build_app, endpoints::root::ApiState},
};

#[main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wa_inbox_relay=info,poem=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::try_parse().context("invalid configuration")?;

    let delivery =
        HttpDeliveryClient::new(&config.delivery).context("failed to build HTTP client")?;
    let inbox = RespondIoClient::new(delivery.clone(), config.respond_io.clone());
    let provider = GupshupClient::new(delivery, config.gupshup.clone());

    let state = Arc::new(ApiState {
        relay_inbound_usecase: Arc::new(RelayInboundUseCase::new(inbox, config.relay_inbound())),
        relay_outgoing_usecase: Arc::new(RelayOutgoingUseCase::new(provider)),
        inbox_auth: config.inbox_auth(),
    });

    let bind_addr = format!("{}:{}", config.host, config.port);
    let server_url = format!("http://{bind_addr}");
    let app = build_app(state, &server_url);

    info!(
        addr = %bind_addr,
        inbox_auth = config.require_inbox_auth,
        timeout_ms = config.delivery.timeout_ms,
        "relay listening"
    );

    Server::new(TcpListener::bind(bind_addr))
        .run(app)
        .await
        .context("server error")
}
