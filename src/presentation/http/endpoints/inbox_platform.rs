use std::sync::Arc;

use poem::Body;
use poem_openapi::{
    OpenApi,
    payload::{Json, PlainText},
};
use tracing::{debug, warn};

use crate::{
    domain::events::OutgoingEvent,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        requests::read_body,
        responses::{MessageAckDto, OutgoingMessageResponse},
        security::InboxBearer,
    },
};

/// Shared by every route the inbox may be configured to call.
async fn relay(state: &ApiState, body: Body) -> OutgoingMessageResponse {
    let bytes = read_body(body).await;
    debug!(body = %String::from_utf8_lossy(&bytes), "received outgoing message from inbox");

    let response = state
        .relay_outgoing_usecase
        .execute(OutgoingEvent::from_bytes(&bytes))
        .await;

    OutgoingMessageResponse::Ok(Json(MessageAckDto {
        m_id: response.m_id,
    }))
}

/// Inbox routes guarded by the channel bearer token.
#[derive(Clone)]
pub struct InboxPlatformEndpoints {
    state: Arc<ApiState>,
}

impl InboxPlatformEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }

    async fn authorized_relay(&self, auth: InboxBearer, body: Body) -> OutgoingMessageResponse {
        if let Err(rejection) = auth.verify(&self.state.inbox_auth) {
            warn!(reason = rejection.message(), "rejected outgoing message from inbox");
            return OutgoingMessageResponse::Unauthorized(PlainText(
                rejection.message().to_string(),
            ));
        }

        relay(&self.state, body).await
    }
}

#[OpenApi]
impl InboxPlatformEndpoints {
    #[oai(path = "/message", method = "post", tag = EndpointsTags::InboxPlatform)]
    pub async fn message(&self, auth: InboxBearer, body: Body) -> OutgoingMessageResponse {
        self.authorized_relay(auth, body).await
    }

    #[oai(path = "/webhook/inbox-platform", method = "post", tag = EndpointsTags::InboxPlatform)]
    pub async fn inbox_platform_webhook(
        &self,
        auth: InboxBearer,
        body: Body,
    ) -> OutgoingMessageResponse {
        self.authorized_relay(auth, body).await
    }

    #[oai(path = "/webhook/respond", method = "post", tag = EndpointsTags::InboxPlatform)]
    pub async fn respond_webhook(&self, auth: InboxBearer, body: Body) -> OutgoingMessageResponse {
        self.authorized_relay(auth, body).await
    }
}

/// The same routes for deployments that run the inbox webhook without a token.
#[derive(Clone)]
pub struct OpenInboxPlatformEndpoints {
    state: Arc<ApiState>,
}

impl OpenInboxPlatformEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl OpenInboxPlatformEndpoints {
    #[oai(path = "/message", method = "post", tag = EndpointsTags::InboxPlatform)]
    pub async fn message(&self, body: Body) -> OutgoingMessageResponse {
        relay(&self.state, body).await
    }

    #[oai(path = "/webhook/inbox-platform", method = "post", tag = EndpointsTags::InboxPlatform)]
    pub async fn inbox_platform_webhook(&self, body: Body) -> OutgoingMessageResponse {
        relay(&self.state, body).await
    }

    #[oai(path = "/webhook/respond", method = "post", tag = EndpointsTags::InboxPlatform)]
    pub async fn respond_webhook(&self, body: Body) -> OutgoingMessageResponse {
        relay(&self.state, body).await
    }
}

#[cfg(test)]
mod tests {
    use poem::{http::StatusCode, test::TestClient};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::presentation::http::test_support::app;

    const AUTH: &str = "Bearer respond-token";

    #[tokio::test]
    async fn image_reply_is_form_encoded_for_provider() {
        let inbox = MockServer::start().await;
        let provider = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(header("apikey", "gs-key"))
            .and(body_string_contains("destination=201500000000"))
            .and(body_string_contains(
                "message=%7B%22type%22%3A%22image%22%2C%22originalUrl%22%3A%22https%3A%2F%2Fx%2Fy.jpg%22\
                 %2C%22previewUrl%22%3A%22https%3A%2F%2Fx%2Fy.jpg%22%2C%22caption%22%3A%22hey%22%7D",
            ))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&provider)
            .await;
        let cli = TestClient::new(app(&inbox, &provider, true));

        let resp = cli
            .post("/message")
            .header("Authorization", AUTH)
            .body_json(&json!({
                "contactId": "+201500000000",
                "message": { "type": "image", "url": "https://x/y.jpg", "caption": "hey" }
            }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        assert!(!json.value().object().get("mId").string().is_empty());
    }

    #[tokio::test]
    async fn provider_outage_still_acknowledges_with_an_id() {
        let inbox = MockServer::start().await;
        let provider = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .expect(1)
            .mount(&provider)
            .await;
        let cli = TestClient::new(app(&inbox, &provider, true));

        let resp = cli
            .post("/webhook/inbox-platform")
            .header("Authorization", AUTH)
            .body_json(&json!({
                "contactId": "+201500000000",
                "message": { "type": "text", "text": "sorry for the wait" }
            }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        assert!(!json.value().object().get("mId").string().is_empty());
    }

    #[tokio::test]
    async fn empty_text_is_acknowledged_without_sending() {
        let inbox = MockServer::start().await;
        let provider = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&provider)
            .await;
        let cli = TestClient::new(app(&inbox, &provider, true));

        let resp = cli
            .post("/webhook/respond")
            .header("Authorization", AUTH)
            .body_json(&json!({
                "contactId": "+201500000000",
                "message": { "type": "text", "text": "" }
            }))
            .send()
            .await;

        resp.assert_status_is_ok();
    }

    #[tokio::test]
    async fn missing_or_wrong_token_is_unauthorized() {
        let inbox = MockServer::start().await;
        let provider = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&provider)
            .await;
        let cli = TestClient::new(app(&inbox, &provider, true));
        let body = json!({ "contactId": "+201500000000", "message": { "type": "text", "text": "hi" } });

        let resp = cli.post("/message").body_json(&body).send().await;
        resp.assert_status(StatusCode::UNAUTHORIZED);

        let resp = cli
            .post("/webhook/respond")
            .header("Authorization", "Token respond-token")
            .body_json(&body)
            .send()
            .await;
        resp.assert_status(StatusCode::UNAUTHORIZED);

        let resp = cli
            .post("/message")
            .header("Authorization", "Bearer nope")
            .body_json(&body)
            .send()
            .await;
        resp.assert_status(StatusCode::UNAUTHORIZED);
        resp.assert_text("Invalid token").await;
    }

    #[tokio::test]
    async fn auth_can_be_disabled() {
        let inbox = MockServer::start().await;
        let provider = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&provider)
            .await;
        let cli = TestClient::new(app(&inbox, &provider, false));

        let resp = cli
            .post("/message")
            .body_json(&json!({ "contactId": "201500000000", "message": { "type": "audio", "url": "https://x/a.ogg" } }))
            .send()
            .await;

        resp.assert_status_is_ok();
    }
}
