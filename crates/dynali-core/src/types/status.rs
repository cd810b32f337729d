use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wire::{coerce_int, scalar_text, JsonObject};
use crate::error::{DynaliError, Result, MISSING_FIELDS_CODE};

/// Timestamp layout used by the service for all payload dates
pub const SERVER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fields a `status` payload must carry, in reporting order
pub const REQUIRED_STATUS_FIELDS: [&str; 6] = [
    "ip",
    "status",
    "status_message",
    "expiry_date",
    "created",
    "last_update",
];

/// Registration state of a hostname, derived from its status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostnameState {
    /// Code 0
    Active,
    /// Code 2
    Expired,
    /// Code 9
    Banned,
    /// Any code without a known meaning
    Other(i64),
}

impl From<i64> for HostnameState {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Active,
            2 => Self::Expired,
            9 => Self::Banned,
            other => Self::Other(other),
        }
    }
}

impl std::fmt::Display for HostnameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Expired => write!(f, "expired"),
            Self::Banned => write!(f, "banned"),
            Self::Other(code) => write!(f, "status {code}"),
        }
    }
}

/// Snapshot of a hostname's registration as reported by Dynali
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    hostname: String,
    ip: String,
    status: i64,
    status_message: String,
    expiry_date: NaiveDateTime,
    creation_date: NaiveDateTime,
    last_update_date: NaiveDateTime,
    status_check_date: DateTime<Local>,
}

impl StatusRecord {
    /// Build a record from a `status` payload
    ///
    /// Every field in [`REQUIRED_STATUS_FIELDS`] must be present as a key;
    /// the missing ones are reported together under code -806. Dates must
    /// match [`SERVER_DATE_FORMAT`].
    pub fn from_payload(
        hostname: impl Into<String>,
        data: &JsonObject,
        checked_at: DateTime<Local>,
    ) -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_STATUS_FIELDS
            .iter()
            .copied()
            .filter(|field| !data.contains_key(*field))
            .collect();

        if !missing.is_empty() {
            return Err(DynaliError::malformed(
                MISSING_FIELDS_CODE,
                format!("Invalid output data. Missing fields: {}", missing.join(",")),
            ));
        }

        Ok(Self {
            hostname: hostname.into(),
            ip: text_field(data, "ip"),
            status: coerce_int(&data["status"]),
            status_message: text_field(data, "status_message"),
            expiry_date: date_field(data, "expiry_date")?,
            creation_date: date_field(data, "created")?,
            last_update_date: date_field(data, "last_update")?,
            status_check_date: checked_at,
        })
    }

    /// The hostname this record describes
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// IP address currently assigned to the hostname
    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Numeric status code as returned by the service
    #[must_use]
    pub const fn status(&self) -> i64 {
        self.status
    }

    /// Textual status as returned by the service
    #[must_use]
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Expiry date (may be in the past)
    #[must_use]
    pub const fn expiry_date(&self) -> NaiveDateTime {
        self.expiry_date
    }

    /// When the hostname was created
    #[must_use]
    pub const fn creation_date(&self) -> NaiveDateTime {
        self.creation_date
    }

    /// When the hostname was last updated
    #[must_use]
    pub const fn last_update_date(&self) -> NaiveDateTime {
        self.last_update_date
    }

    /// Local time at which this status was fetched
    #[must_use]
    pub const fn status_check_date(&self) -> DateTime<Local> {
        self.status_check_date
    }

    /// Classified registration state
    #[must_use]
    pub fn state(&self) -> HostnameState {
        HostnameState::from(self.status)
    }

    /// Returns true if the hostname is active (code 0)
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status == 0
    }

    /// Returns true if the hostname is expired (code 2)
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.status == 2
    }

    /// Returns true if the hostname is banned (code 9)
    #[must_use]
    pub const fn is_banned(&self) -> bool {
        self.status == 9
    }
}

fn text_field(data: &JsonObject, field: &str) -> String {
    data.get(field).and_then(scalar_text).unwrap_or_default()
}

fn date_field(data: &JsonObject, field: &'static str) -> Result<NaiveDateTime> {
    let value = match &data[field] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    NaiveDateTime::parse_from_str(&value, SERVER_DATE_FORMAT).map_err(|source| {
        DynaliError::Date {
            field,
            value,
            source,
        }
    })
}
