use std::sync::Arc;

use poem::Route;
use poem_openapi::{OpenApi, OpenApiService};

use crate::presentation::http::endpoints::{
    health::HealthEndpoints,
    inbox_platform::{InboxPlatformEndpoints, OpenInboxPlatformEndpoints},
    root::ApiState,
    wa_provider::WaProviderEndpoints,
};

pub mod endpoints;
pub mod requests;
pub mod responses;
pub mod security;

type RelayApi<I> = OpenApiService<(HealthEndpoints, WaProviderEndpoints, I), ()>;

fn api_service<I: OpenApi>(state: Arc<ApiState>, inbox: I, server_url: &str) -> RelayApi<I> {
    OpenApiService::new(
        (HealthEndpoints, WaProviderEndpoints::new(state), inbox),
        "WhatsApp Inbox Relay",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url)
}

fn mount<I: OpenApi + 'static>(api_service: RelayApi<I>) -> Route {
    let ui = api_service.swagger_ui();

    Route::new().nest("/docs", ui).nest("/", api_service)
}

/// Webhooks are mounted at the root because both platforms are configured with
/// fixed paths; the swagger UI lives under `/docs`.
pub fn build_app(state: Arc<ApiState>, server_url: &str) -> Route {
    if state.inbox_auth.required {
        let inbox = InboxPlatformEndpoints::new(state.clone());
        mount(api_service(state, inbox, server_url))
    } else {
        let inbox = OpenInboxPlatformEndpoints::new(state.clone());
        mount(api_service(state, inbox, server_url))
    }
}
