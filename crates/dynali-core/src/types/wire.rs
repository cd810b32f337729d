use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{
    DynaliError, Result, MISSING_MESSAGE_CODE, MISSING_MESSAGE_TEXT, MISSING_PAYLOAD_CODE,
    MISSING_PAYLOAD_TEXT,
};

/// Generic JSON object as returned by the transport
pub type JsonObject = Map<String, Value>;

/// Request payload: string keys to string values
pub type Payload = BTreeMap<String, String>;

/// Server-side operation named in the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Report the caller's public IP
    MyIp,
    /// Point a hostname at an IP
    Update,
    /// Query a hostname's registration
    Status,
}

impl Action {
    /// Wire name of the action
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MyIp => "myip",
            Self::Update => "update",
            Self::Status => "status",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body sent to the endpoint
///
/// The `payload` key is left out entirely when there is nothing to send;
/// the service distinguishes an absent payload from an empty one.
#[derive(Serialize)]
pub struct Request {
    /// Operation to run
    pub action: Action,

    /// Operation arguments
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub payload: Payload,
}

impl Request {
    /// Create a request without arguments
    #[must_use]
    pub const fn new(action: Action) -> Self {
        Self {
            action,
            payload: BTreeMap::new(),
        }
    }

    /// Create a request with arguments
    #[must_use]
    pub const fn with_payload(action: Action, payload: Payload) -> Self {
        Self { action, payload }
    }
}

// Payload holds the password digest, keep it out of logs.
impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("action", &self.action)
            .field("payload_keys", &self.payload.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Top-level response object: `status`, `code`, `message`, `data`
///
/// A field is `Some` only when its key is present with a non-null value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    /// `"success"` or anything else
    pub status: Option<String>,
    /// Service-defined result code
    pub code: Option<i64>,
    /// Human-readable result
    pub message: Option<String>,
    /// Operation-specific payload
    pub data: Option<JsonObject>,
}

impl Envelope {
    /// Status value marking a successful call
    pub const SUCCESS: &'static str = "success";

    /// Split a raw response object into its envelope fields
    #[must_use]
    pub fn from_object(mut raw: JsonObject) -> Self {
        Self {
            status: raw.remove("status").as_ref().and_then(scalar_text),
            code: raw.remove("code").filter(|v| !v.is_null()).map(|v| coerce_int(&v)),
            message: raw.remove("message").as_ref().and_then(scalar_text),
            data: match raw.remove("data") {
                Some(Value::Object(map)) => Some(map),
                _ => None,
            },
        }
    }

    /// Returns true if the service reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(Self::SUCCESS)
    }

    /// Check the status triad and hand back `data`
    ///
    /// A non-success status without a message is a malformed response
    /// (-804); with a message it is the service's own error.
    pub fn into_data(self) -> Result<Option<JsonObject>> {
        if self.is_success() {
            return Ok(self.data);
        }

        match self.message {
            None => Err(DynaliError::malformed(
                MISSING_MESSAGE_CODE,
                MISSING_MESSAGE_TEXT,
            )),
            Some(message) => Err(DynaliError::Server {
                code: self.code,
                message,
            }),
        }
    }

    /// Like [`Envelope::into_data`], additionally requiring `data.ip` (-805)
    pub fn into_ip_payload(self) -> Result<JsonObject> {
        match self.into_data()? {
            Some(data) if data.get("ip").is_some_and(|ip| !ip.is_null()) => Ok(data),
            _ => Err(DynaliError::malformed(
                MISSING_PAYLOAD_CODE,
                MISSING_PAYLOAD_TEXT,
            )),
        }
    }
}

/// Render a JSON scalar as text; `null` yields `None`
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Integer coercion for loosely typed service fields
///
/// Integers pass through, floats truncate, strings use their leading
/// sign and digits (0 when there are none), booleans map to 0/1.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => leading_int(s),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }

    let magnitude = if negative {
        format!("-{digits}")
    } else {
        digits
    };
    magnitude
        .parse()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX })
}
