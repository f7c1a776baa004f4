// API Configuration
// Where the users API lives and how requests to it are decorated

use crate::error::{ServiceError, ServiceResult};

use std::time::Duration;
use url::Url;

/// Public demo instance of the users API
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

pub const APP_USER_AGENT: &str = concat!("userdesk/", env!("CARGO_PKG_VERSION"));

/// Configuration for the users API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, path prefix included (default: https://reqres.in/api)
    pub base_url: String,

    /// Sent as `x-api-key` when present
    pub api_key: Option<String>,

    /// Per-request timeout. `None` leaves it to the network stack.
    pub timeout: Option<Duration>,

    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
            user_agent: APP_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Append path segments to the base URL, keeping its own path prefix.
    /// Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> ServiceResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| {
                ServiceError::InvalidInput(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
