//! Error types for suggestcheck
//!
//! `AppError` covers startup failures (configuration, CLI I/O) and is the
//! only error that can end the process early. `GenerationError` and
//! `FixtureError` never escape their check: they are rendered to the
//! console and folded into a pass/fail boolean.

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration in {path}: {reason}")]
    ConfigValidationFailed { path: String, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;

/// Failure modes of a single call to the generation endpoint
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Could not connect to {endpoint}: {reason}")]
    Unreachable { endpoint: String, reason: String },

    #[error("API returned status {status}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Request to {endpoint} timed out after {timeout_seconds} seconds")]
    Timeout {
        endpoint: String,
        timeout_seconds: u64,
    },

    #[error("Invalid response body from {endpoint}: {reason}")]
    InvalidBody { endpoint: String, reason: String },

    #[error("Request to {endpoint} failed: {reason}")]
    Request { endpoint: String, reason: String },
}

impl GenerationError {
    /// Classify a failure to obtain a response from reqwest
    ///
    /// Connection failures are reported separately from everything else
    /// because they come with a remediation hint (start the server). A
    /// connect-phase timeout or a reset before any response counts as a
    /// connection failure, not a timeout.
    pub fn from_transport(endpoint: &str, timeout_seconds: u64, err: reqwest::Error) -> Self {
        if err.is_connect() || is_connection_dropped(&err) {
            Self::Unreachable {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            }
        } else if err.is_timeout() {
            Self::Timeout {
                endpoint: endpoint.to_string(),
                timeout_seconds,
            }
        } else {
            Self::Request {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            }
        }
    }

    /// Classify a failure while reading a response body
    ///
    /// A response already arrived, so the endpoint was reachable.
    pub fn from_body_read(endpoint: &str, timeout_seconds: u64, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                endpoint: endpoint.to_string(),
                timeout_seconds,
            }
        } else {
            Self::Request {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

/// Whether the error chain bottoms out in a refused, reset or aborted socket
fn is_connection_dropped(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if is_dropped_kind(io.kind()) {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

fn is_dropped_kind(kind: std::io::ErrorKind) -> bool {
    matches!(
        kind,
        std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::ConnectionRefused
    )
}

/// Failure while round-tripping the JSON fixture
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to serialize fixture: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("{0}")]
    Deserialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_creates() {
        let err = AppError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_internal_error_creates() {
        let err = AppError::Internal("unexpected state".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_validation_failed_includes_path() {
        let err = AppError::ConfigValidationFailed {
            path: "suggestcheck.toml".to_string(),
            reason: "bad url".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("suggestcheck.toml"));
        assert!(msg.contains("bad url"));
    }

    #[test]
    fn test_unexpected_status_message_has_code() {
        let err = GenerationError::UnexpectedStatus {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "API returned status 500");
    }

    #[test]
    fn test_timeout_message_has_endpoint_and_seconds() {
        let err = GenerationError::Timeout {
            endpoint: "http://localhost:11434/api/generate".to_string(),
            timeout_seconds: 30,
        };
        let msg = err.to_string();
        assert!(msg.contains("localhost:11434"));
        assert!(msg.contains("30 seconds"));
    }

    #[test]
    fn test_dropped_connection_kinds() {
        use std::io::ErrorKind;

        for kind in [
            ErrorKind::ConnectionReset,
            ErrorKind::ConnectionAborted,
            ErrorKind::ConnectionRefused,
        ] {
            assert!(is_dropped_kind(kind), "{:?} should count as unreachable", kind);
        }
        for kind in [ErrorKind::TimedOut, ErrorKind::UnexpectedEof, ErrorKind::Other] {
            assert!(!is_dropped_kind(kind), "{:?} should not count as unreachable", kind);
        }
    }

    #[test]
    fn test_connection_drop_found_deep_in_source_chain() {
        #[derive(Debug, Error)]
        #[error("error sending request")]
        struct Wrapper(#[source] std::io::Error);

        #[derive(Debug, Error)]
        #[error("client error")]
        struct Outer(#[source] Wrapper);

        let reset = Outer(Wrapper(std::io::Error::from(
            std::io::ErrorKind::ConnectionReset,
        )));
        assert!(is_connection_dropped(&reset));

        let timed_out = Outer(Wrapper(std::io::Error::from(std::io::ErrorKind::TimedOut)));
        assert!(!is_connection_dropped(&timed_out));
    }

    #[test]
    fn test_deserialize_error_passes_parser_message_through() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let expected = source.to_string();
        let err = FixtureError::Deserialize(source);
        assert_eq!(err.to_string(), expected);
    }
}
