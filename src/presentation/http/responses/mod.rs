use poem_openapi::{
    ApiResponse, Object,
    payload::{Json, PlainText},
};

#[derive(ApiResponse)]
pub enum InboundWebhookResponse {
    /// Forwarded to the inbox, or acknowledged and dropped
    #[oai(status = 200)]
    Ok(PlainText<String>),
    /// The inbox could not be reached; the provider should retry
    #[oai(status = 500)]
    DeliveryFailed(PlainText<String>),
}

#[derive(Object, Debug)]
pub struct MessageAckDto {
    #[oai(rename = "mId")]
    pub m_id: String,
}

#[derive(ApiResponse)]
pub enum OutgoingMessageResponse {
    #[oai(status = 200)]
    Ok(Json<MessageAckDto>),
    #[oai(status = 401)]
    Unauthorized(PlainText<String>),
}
