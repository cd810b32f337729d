//! Main Dynali API client implementation.

use crate::config::ClientConfig;
use crate::transport::Transport;
use dynali_core::{Action, Envelope, JsonObject, Payload, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Main Dynali API client
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct DynaliClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    transport: Transport,
}

impl DynaliClient {
    /// Create a client talking to the public Dynali endpoint
    pub fn new() -> Result<Self> {
        DynaliClientBuilder::new().build()
    }

    /// Create a client from explicit settings
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ClientInner {
                transport: Transport::new(config)?,
            }),
        })
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> DynaliClientBuilder {
        DynaliClientBuilder::new()
    }

    /// The underlying transport
    #[must_use]
    pub fn transport(&self) -> &Transport {
        &self.inner.transport
    }

    /// Run a raw action and return the undecoded response object
    pub async fn execute(&self, action: Action, payload: Payload) -> Result<JsonObject> {
        self.inner.transport.execute(action, payload).await
    }

    /// Run an action and split the reply into its envelope
    pub(crate) async fn call(&self, action: Action, payload: Payload) -> Result<Envelope> {
        let envelope = Envelope::from_object(self.execute(action, payload).await?);

        if !envelope.is_success() {
            warn!(
                %action,
                code = ?envelope.code,
                message = ?envelope.message,
                "Dynali rejected request"
            );
        }

        Ok(envelope)
    }
}

/// Builder for configuring a [`DynaliClient`]
#[derive(Debug, Clone, Default)]
pub struct DynaliClientBuilder {
    config: ClientConfig,
}

impl DynaliClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL (useful for testing)
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.endpoint(url);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(agent);
        self
    }

    /// Replace all settings at once
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DynaliClient> {
        DynaliClient::with_config(&self.config)
    }
}
