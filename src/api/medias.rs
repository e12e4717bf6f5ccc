use super::responses::SuccessResponse;
use super::{ApiError, Client, HttpMethod, MediaInfo, Transport};

/// MIME types the Cloud API documents as supported.
pub struct MediaType;

impl MediaType {
    pub const SUPPORTED: &'static [&'static str] = &[
        "audio/aac",
        "audio/amr",
        "audio/mp4",
        "audio/mpeg",
        "audio/ogg",
        "text/plain",
        "application/pdf",
        "application/vnd.ms-powerpoint",
        "application/msword",
        "application/vnd.ms-excel",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "image/jpeg",
        "image/png",
        "image/webp",
        "video/mp4",
        "video/3gpp",
    ];

    pub fn is_supported(mime_type: &str) -> bool {
        Self::SUPPORTED.contains(&mime_type)
    }
}

/// Media endpoint. Uploads and downloads are left to the transport owner.
pub struct Medias<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Medias<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a Client<T> {
        self.client
    }

    pub fn get(&self, media_id: &str) -> Result<MediaInfo, ApiError> {
        let response = self
            .client
            .send_request(HttpMethod::Get, &format!("/{media_id}"), None)?
            .ok_or_else(|| ApiError::UnexpectedResponse(format!("no metadata for media {media_id}")))?;
        Ok(serde_json::from_value(response)?)
    }

    /// Returns whether the API acknowledged the deletion.
    pub fn delete(&self, media_id: &str) -> Result<bool, ApiError> {
        let response = self
            .client
            .send_request(HttpMethod::Delete, &format!("/{media_id}"), None)?;
        match response {
            Some(body) => Ok(serde_json::from_value::<SuccessResponse>(body)?.success),
            None => Ok(false),
        }
    }
}
