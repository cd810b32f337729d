use thiserror::Error;

/// Result type alias for Dynali operations
pub type Result<T> = std::result::Result<T, DynaliError>;

/// Sentinel code: envelope reported failure without a message
pub const MISSING_MESSAGE_CODE: i64 = -804;

/// Sentinel code: `data` or `data.ip` absent from a successful envelope
pub const MISSING_PAYLOAD_CODE: i64 = -805;

/// Sentinel code: status payload lacks one or more required fields
pub const MISSING_FIELDS_CODE: i64 = -806;

pub(crate) const MISSING_MESSAGE_TEXT: &str = "Invalid output data. Missing message.";
pub(crate) const MISSING_PAYLOAD_TEXT: &str = "Invalid output data. Missing payload.";

/// Errors that can occur when talking to Dynali
#[derive(Error, Debug)]
pub enum DynaliError {
    /// A caller-supplied argument was empty or malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP exchange did not complete (DNS, connect, timeout, non-2xx)
    #[error("request failed: {0}")]
    Transport(String),

    /// Response body was not a JSON object
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, but required envelope or payload fields are missing
    #[error("[{code}] {message}")]
    MalformedResponse {
        /// One of the fixed sentinel codes (-804, -805, -806)
        code: i64,
        /// Description of what was missing
        message: String,
    },

    /// The service answered with a non-success status
    #[error("[{}] {message}", .code.map_or_else(|| "-".to_string(), |c| c.to_string()))]
    Server {
        /// Code reported by the service, if any
        code: Option<i64>,
        /// Message reported by the service
        message: String,
    },

    /// A server timestamp did not match `YYYY-MM-DD HH:MM:SS`
    #[error("invalid date in `{field}`: {value:?}: {source}")]
    Date {
        /// Payload field holding the timestamp
        field: &'static str,
        /// The offending value
        value: String,
        /// Underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// Client configuration was rejected
    #[error("configuration error: {0}")]
    Config(String),
}

impl DynaliError {
    pub(crate) fn malformed(code: i64, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            code,
            message: message.into(),
        }
    }

    /// Returns true if the error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if the service itself rejected the request
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Returns the Dynali code carried by this error, if any
    ///
    /// For [`DynaliError::MalformedResponse`] this is the client-side
    /// sentinel, for [`DynaliError::Server`] the code sent by the service.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::MalformedResponse { code, .. } => Some(*code),
            Self::Server { code, .. } => *code,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_display_includes_code() {
        let err = DynaliError::Server {
            code: Some(-101),
            message: "Invalid credentials".into(),
        };
        assert_eq!(err.to_string(), "[-101] Invalid credentials");
        assert_eq!(err.code(), Some(-101));
        assert!(err.is_server_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn server_error_without_code() {
        let err = DynaliError::Server {
            code: None,
            message: "nope".into(),
        };
        assert_eq!(err.to_string(), "[-] nope");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn malformed_carries_sentinel() {
        let err = DynaliError::malformed(MISSING_PAYLOAD_CODE, MISSING_PAYLOAD_TEXT);
        assert_eq!(err.code(), Some(-805));
        assert_eq!(err.to_string(), "[-805] Invalid output data. Missing payload.");
    }

    #[test]
    fn only_transport_is_retryable() {
        assert!(DynaliError::Transport("connection refused".into()).is_retryable());
        assert!(!DynaliError::InvalidArgument("x".into()).is_retryable());
        assert!(!DynaliError::Config("x".into()).is_retryable());
    }
}
