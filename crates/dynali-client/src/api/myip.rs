//! Public IP lookup.

use crate::DynaliClient;
use dynali_core::{Action, Payload, Result};
use serde_json::Value;

impl DynaliClient {
    /// Get the caller's public IP address as seen by Dynali
    ///
    /// The address is returned exactly as the service reports it.
    pub async fn my_ip(&self) -> Result<String> {
        let data = self
            .call(Action::MyIp, Payload::new())
            .await?
            .into_ip_payload()?;

        Ok(match &data["ip"] {
            Value::String(ip) => ip.clone(),
            other => other.to_string(),
        })
    }
}
