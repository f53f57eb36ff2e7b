use poem::Body;
use tracing::warn;

/// Reads a webhook body without rejecting it; unreadable bodies count as empty.
pub async fn read_body(body: Body) -> Vec<u8> {
    match body.into_vec().await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "failed to read webhook body");
            Vec::new()
        }
    }
}
