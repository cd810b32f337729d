//! Client configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The Dynali API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.dynali.net/nice/";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Connection settings for a [`DynaliClient`](crate::DynaliClient)
///
/// Deserializable so host applications can embed it in their own config
/// files; missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// URL every action is POSTed to
    pub endpoint: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("dynali-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Set the endpoint URL
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set the request timeout
    ///
    /// Stored at millisecond precision; a non-zero timeout shorter than one
    /// millisecond rounds up to one.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.timeout_ms = if millis == 0 && !timeout.is_zero() {
            1
        } else {
            millis
        };
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
