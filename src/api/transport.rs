use std::fmt;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body, already in wire order.
    pub body: Option<Value>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed with status {status}: {body}")]
    Http { status: u16, body: Value },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("failed to (de)serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Sends a request and returns the parsed JSON body, `None` for empty bodies.
///
/// Authentication, retries and connection handling belong to implementors.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<Option<Value>, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> Result<Option<Value>, ApiError> {
        (**self).send(request)
    }
}
