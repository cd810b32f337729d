use md5::{Digest, Md5};

use super::wire::Payload;
use crate::error::{DynaliError, Result};

/// Account credentials for authenticated actions
///
/// The plaintext password never leaves this type; the service expects its
/// MD5 hex digest on the wire.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials, rejecting an empty username or password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let password = password.into();
        require_non_empty(&username, "username")?;
        require_non_empty(&password, "password")?;

        Ok(Self { username, password })
    }

    /// Account name
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password digest as sent to the service
    #[must_use]
    pub fn password_digest(&self) -> String {
        password_digest(&self.password)
    }

    /// Payload entries authenticating a request
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("username".into(), self.username.clone());
        payload.insert("password".into(), self.password_digest());
        payload
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// Lowercase hex MD5 of the password
#[must_use]
pub fn password_digest(password: &str) -> String {
    hex::encode(Md5::digest(password.as_bytes()))
}

/// Reject an empty argument with `Invalid or missing <what>.`
pub fn require_non_empty(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DynaliError::InvalidArgument(format!(
            "Invalid or missing {what}."
        )));
    }
    Ok(())
}
