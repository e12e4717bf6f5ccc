use log::{debug, warn};
use serde_json::Value;

use super::{ApiConfiguration, ApiError, ApiRequest, HttpMethod, Medias, Messages, Transport};

/// Entry point for the Cloud API endpoints.
///
/// Resolves endpoints against the configured base URL and hands the request
/// to the caller-supplied [`Transport`].
#[derive(Debug, Clone)]
pub struct Client<T> {
    pub config: ApiConfiguration,
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(config: ApiConfiguration, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn messages(&self) -> Messages<'_, T> {
        Messages::new(self)
    }

    pub fn medias(&self) -> Medias<'_, T> {
        Medias::new(self)
    }

    /// Full URL for `endpoint`, which may carry a leading slash.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url(),
            endpoint.trim_start_matches('/')
        )
    }

    pub fn send_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest {
            method,
            url: self.url_for(endpoint),
            body,
        };
        debug!("request: {} {}", request.method, request.url);

        let response = self.transport.send(&request);
        if let Err(ApiError::Http { status, .. }) = &response {
            warn!("{} {} returned status {}", request.method, request.url, status);
        }
        response
    }
}
