//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Invalid or missing credentials/configuration at construction.
    #[error("Config error: {0}")]
    Config(String),

    /// Hash auth was requested but no shared secret is configured.
    #[error("Auth config error: hash auth requested without a shared secret")]
    AuthConfig,

    /// Method name not present in the catalog.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Connection-level failure reported by a custom transport.
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Form encoding failed: {0}")]
    Form(#[from] serde_urlencoded::ser::Error),

    #[error("Transport unavailable after {attempts} attempts: {last_error}")]
    TransportUnavailable { attempts: u32, last_error: String },

    /// Body was not JSON. `body` holds the bytes exactly as received;
    /// the message renders them lossily as UTF-8.
    #[error("Malformed response (status {status}): {}", String::from_utf8_lossy(.body))]
    MalformedResponse { status: u16, body: Vec<u8> },
}

impl HttpError {
    /// Whether the failure happened before an HTTP response was received.
    ///
    /// Only these failures are retried.
    pub fn is_connection_level(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(re) => {
                re.is_connect() || re.is_timeout() || re.is_request() || re.is_body()
            }
            HttpError::Connection(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_is_retryable() {
        assert!(HttpError::Connection("reset by peer".into()).is_connection_level());
    }

    #[test]
    fn test_terminal_errors_are_not_retryable() {
        assert!(!HttpError::InvalidRequest("bad url".into()).is_connection_level());
        assert!(!HttpError::MalformedResponse {
            status: 200,
            body: b"<html>".to_vec(),
        }
        .is_connection_level());
        assert!(!HttpError::TransportUnavailable {
            attempts: 4,
            last_error: "refused".into(),
        }
        .is_connection_level());
    }

    #[test]
    fn test_malformed_response_display_carries_body() {
        let err = SdkError::from(HttpError::MalformedResponse {
            status: 502,
            body: b"Bad Gateway".to_vec(),
        });
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("Bad Gateway"));
    }

    #[test]
    fn test_malformed_response_keeps_invalid_utf8_bytes() {
        let raw = vec![b'{', 0xff, 0xfe, b'}'];
        let err = HttpError::MalformedResponse {
            status: 200,
            body: raw.clone(),
        };
        assert!(err.to_string().contains('\u{fffd}'));
        match err {
            HttpError::MalformedResponse { body, .. } => assert_eq!(body, raw),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }
}
