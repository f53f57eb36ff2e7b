use poem_openapi::{OpenApi, payload::PlainText};

use crate::presentation::http::endpoints::root::EndpointsTags;

pub struct HealthEndpoints;

#[OpenApi]
impl HealthEndpoints {
    #[oai(path = "/", method = "get", tag = EndpointsTags::Health)]
    pub async fn liveness(&self) -> PlainText<&'static str> {
        PlainText("WhatsApp inbox relay is running")
    }

    #[oai(path = "/health", method = "get", tag = EndpointsTags::Health)]
    pub async fn health(&self) -> PlainText<&'static str> {
        PlainText("OK")
    }
}
