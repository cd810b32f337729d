//! Hostname update and status endpoints.

use crate::DynaliClient;
use chrono::Local;
use dynali_core::{
    require_non_empty, validate_ip, Action, Credentials, IpTarget, Result, StatusRecord,
};
use tracing::debug;

impl DynaliClient {
    /// Point `hostname` at an IP address
    ///
    /// Pass [`AUTODETECT_IP`](dynali_core::AUTODETECT_IP) to publish the
    /// address reported by [`DynaliClient::my_ip`]; a failure of that lookup
    /// is returned as-is and no update is sent.
    ///
    /// ```rust,ignore
    /// client.update("home.dynali.net", "alice", "secret", AUTODETECT_IP).await?;
    /// client.update("home.dynali.net", "alice", "secret", "192.0.2.1").await?;
    /// ```
    pub async fn update(
        &self,
        hostname: &str,
        username: &str,
        password: &str,
        ip: impl Into<IpTarget>,
    ) -> Result<()> {
        require_non_empty(hostname, "hostname")?;
        let credentials = Credentials::new(username, password)?;

        let ip = match ip.into() {
            IpTarget::Autodetect => self.my_ip().await?,
            IpTarget::Address(ip) => ip,
        };
        validate_ip(&ip)?;

        let mut payload = credentials.to_payload();
        payload.insert("myip".into(), ip);
        payload.insert("hostname".into(), hostname.to_string());

        self.call(Action::Update, payload).await?.into_data()?;
        debug!(hostname, "hostname updated");

        Ok(())
    }

    /// Fetch the registration status of `hostname`
    pub async fn status(
        &self,
        hostname: &str,
        username: &str,
        password: &str,
    ) -> Result<StatusRecord> {
        require_non_empty(hostname, "hostname")?;
        let credentials = Credentials::new(username, password)?;

        let mut payload = credentials.to_payload();
        payload.insert("hostname".into(), hostname.to_string());

        let data = self
            .call(Action::Status, payload)
            .await?
            .into_ip_payload()?;

        StatusRecord::from_payload(hostname, &data, Local::now())
    }
}
