use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Graph API host serving the Cloud API.
pub const API_URL: &str = "https://graph.facebook.com";
/// Graph API version used unless overridden.
pub const DEFAULT_API_VERSION: &str = "v19.0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API version `{0}`; expected something like `v19.0`")]
    InvalidApiVersion(String),
}

/// Endpoint configuration shared by every API call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfiguration {
    /// Host the requests are sent to.
    pub api_url: String,
    /// Graph API version segment, e.g. `v19.0`.
    pub api_version: String,
}

impl Default for ApiConfiguration {
    fn default() -> Self {
        Self {
            api_url: API_URL.into(),
            api_version: DEFAULT_API_VERSION.into(),
        }
    }
}

impl ApiConfiguration {
    /// Override the API host.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Override the API version after checking it has the `v<major>.<minor>` shape.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if !is_valid_api_version(&version) {
            return Err(ConfigError::InvalidApiVersion(version));
        }
        self.api_version = version;
        Ok(self)
    }

    /// `{api_url}/{api_version}`
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), self.api_version)
    }
}

fn is_valid_api_version(version: &str) -> bool {
    let Some(rest) = version.strip_prefix('v') else {
        return false;
    };
    match rest.split_once('.') {
        Some((major, minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.chars().all(|c| c.is_ascii_digit())
                && minor.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
