//! JSON-over-POST transport.

use dynali_core::{Action, DynaliError, JsonObject, Payload, Request, Result};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;

/// Sends one action to the Dynali endpoint and returns the decoded reply
///
/// Stateless apart from the pooled HTTP client; every call is a single POST.
#[derive(Debug, Clone)]
pub struct Transport {
    http: HttpClient,
    endpoint: Url,
}

impl Transport {
    /// Create a transport from connection settings
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| DynaliError::Config(format!("endpoint {:?}: {e}", config.endpoint)))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(DynaliError::Config(format!(
                "endpoint {:?}: unsupported scheme",
                config.endpoint
            )));
        }

        if config.timeout_ms == 0 {
            return Err(DynaliError::Config("timeout must be greater than zero".into()));
        }

        let http = HttpClient::builder()
            .timeout(config.request_timeout())
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| DynaliError::Config(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    /// The URL requests are sent to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// POST `{action, payload?}` and decode the JSON object in the reply
    ///
    /// Anything that prevents a 2xx response body from arriving is a
    /// [`DynaliError::Transport`]; a body that is not a JSON object is a
    /// [`DynaliError::Parse`].
    pub async fn execute(&self, action: Action, payload: Payload) -> Result<JsonObject> {
        let request = Request::with_payload(action, payload);
        debug!(%action, endpoint = %self.endpoint, "POST request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&request)
            .send()
            .await
            .map_err(|e| DynaliError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| DynaliError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| DynaliError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(DynaliError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_endpoint() {
        let config = ClientConfig::default().endpoint("not a url");
        assert!(matches!(Transport::new(&config), Err(DynaliError::Config(_))));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = ClientConfig::default().endpoint("ftp://api.dynali.net/nice/");
        assert!(matches!(Transport::new(&config), Err(DynaliError::Config(_))));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ClientConfig {
            timeout_ms: 0,
            ..ClientConfig::default()
        };
        assert!(matches!(Transport::new(&config), Err(DynaliError::Config(_))));
    }

    #[test]
    fn accepts_sub_second_timeout() {
        let config = ClientConfig::default().timeout(std::time::Duration::from_millis(500));
        assert!(Transport::new(&config).is_ok());
    }

    #[test]
    fn keeps_configured_endpoint() {
        let transport = Transport::new(&ClientConfig::default()).unwrap();
        assert_eq!(transport.endpoint(), "https://api.dynali.net/nice/");
    }
}
