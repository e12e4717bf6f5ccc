use serde::{Deserialize, Serialize};

/// Contact echoed back after sending a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub input: String,
    pub wa_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageIdResponse {
    pub id: String,
}

/// Body returned by the messages endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub messaging_product: Option<String>,
    #[serde(default)]
    pub contacts: Vec<ContactResponse>,
    #[serde(default)]
    pub messages: Vec<MessageIdResponse>,
}

impl MessageResponse {
    /// ID of the first accepted message, if any.
    pub fn message_id(&self) -> Option<&str> {
        self.messages.first().map(|message| message.id.as_str())
    }
}

/// Metadata of an uploaded media object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaInfo {
    pub id: String,
    pub url: String,
    pub mime_type: String,
    pub sha256: String,
    pub file_size: u64,
    #[serde(default)]
    pub messaging_product: Option<String>,
}

/// `{"success": true}` style acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SuccessResponse {
    pub success: bool,
}
