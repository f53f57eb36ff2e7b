use thiserror::Error;

/// Why a call to a counterpart platform did not succeed.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
    #[error("network error: {0}")]
    Network(String),
    #[error("downstream rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("failed to encode request: {0}")]
    Encoding(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl DeliveryError {
    pub fn kind(&self) -> &'static str {
        match self {
            DeliveryError::Timeout { .. } => "timeout",
            DeliveryError::Network(_) => "network",
            DeliveryError::Rejected { .. } => "rejected",
            DeliveryError::Encoding(_) => "encoding",
            DeliveryError::Client(_) => "client",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_construction_is_not_a_network_failure() {
        let err = DeliveryError::Client("no TLS backend".to_string());
        assert_eq!(err.kind(), "client");
        assert_eq!(err.to_string(), "failed to build HTTP client: no TLS backend");
        assert_eq!(DeliveryError::Network("refused".to_string()).kind(), "network");
    }
}
