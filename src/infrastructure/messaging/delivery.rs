use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::{application::services::platforms::DeliveryReceipt, domain::errors::DeliveryError};

pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

#[derive(Clone)]
pub struct DeliveryConfig {
    pub timeout_ms: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DeliveryBody {
    Json(Value),
    Form(Vec<(&'static str, String)>),
}

#[derive(Debug, Clone)]
pub struct DeliveryRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: DeliveryBody,
}

/// Single POST to a counterpart platform with a bounded timeout. Shared by both
/// directions; holds the only connection pool in the process. Never retries.
#[derive(Clone)]
pub struct HttpDeliveryClient {
    http: Client,
    timeout: Duration,
}

impl HttpDeliveryClient {
    pub fn new(config: &DeliveryConfig) -> Result<Self, DeliveryError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder()
            .user_agent("wa-inbox-relay")
            .timeout(timeout)
            .build()
            .map_err(|err| DeliveryError::Client(err.to_string()))?;

        Ok(Self { http, timeout })
    }

    pub async fn deliver(&self, request: DeliveryRequest) -> Result<DeliveryReceipt, DeliveryError> {
        let builder = request
            .headers
            .iter()
            .fold(self.http.post(&request.url), |builder, (name, value)| {
                builder.header(*name, value.as_str())
            });
        let builder: RequestBuilder = match &request.body {
            DeliveryBody::Json(body) => builder.json(body),
            DeliveryBody::Form(fields) => builder.form(fields),
        };

        let response = builder.send().await.map_err(|err| self.classify(err))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(DeliveryReceipt {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn classify(&self, err: reqwest::Error) -> DeliveryError {
        if err.is_timeout() {
            DeliveryError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else if err.is_builder() {
            DeliveryError::Encoding(err.to_string())
        } else {
            DeliveryError::Network(err.to_string())
        }
    }
}
