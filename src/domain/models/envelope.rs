use serde::Serialize;

/// Body posted to the inbox's custom-channel ingestion webhook.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InboxEnvelope {
    pub channel_id: String,
    pub contact_id: String,
    pub events: Vec<InboxEvent>,
    pub contact: InboxContact,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InboxEvent {
    #[serde(rename = "type")]
    pub event_type: &'static str,
    #[serde(rename = "mId")]
    pub m_id: String,
    pub timestamp: i64,
    pub message: InboxMessage,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InboxMessage {
    Text {
        text: String,
    },
    Image(InboxMedia),
    Audio(InboxMedia),
    Video(InboxMedia),
    File(InboxMedia),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InboxMedia {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InboxContact {
    pub first_name: String,
    pub phone: String,
    pub country_code: String,
    pub language: &'static str,
}

/// The per-type JSON carried in the provider's `message` form field.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WaProviderMessage {
    #[serde(rename_all = "camelCase")]
    Text { text: String, preview_url: bool },
    #[serde(rename_all = "camelCase")]
    Image {
        original_url: String,
        preview_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Audio { url: String },
    Video {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    File {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
    },
}

/// Translated reply ready to be form-encoded for the provider's send API.
/// Deployment-specific fields (source number, app name) are added by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct WaProviderRequest {
    pub destination: String,
    pub message: WaProviderMessage,
}

impl WaProviderRequest {
    pub fn form_fields(
        &self,
        source: &str,
        src_name: &str,
    ) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        Ok(vec![
            ("channel", "whatsapp".to_string()),
            ("source", source.to_string()),
            ("destination", self.destination.clone()),
            ("message", serde_json::to_string(&self.message)?),
            ("src.name", src_name.to_string()),
        ])
    }
}
