/*
[INPUT]:  Error sources (HTTP, API, serialization, auth, WebSocket)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the VALR adapter
#[derive(Error, Debug)]
pub enum ValrError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// A signed endpoint was called without credentials
    #[error("Missing API credentials")]
    MissingCredentials,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// WebSocket error
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// WebSocket command issued while disconnected
    #[error("WebSocket not connected")]
    NotConnected,

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimit { retry_after: u64 },
}

impl ValrError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ValrError::Http(_)
                | ValrError::RateLimit { .. }
                | ValrError::WebSocket(_)
                | ValrError::InvalidResponse(_)
        )
    }

    /// Get retry delay in seconds (if retryable)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            ValrError::RateLimit { retry_after } => Some(*retry_after),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ValrError::MissingCredentials | ValrError::Api { code: 401 | 403, .. }
        )
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        ValrError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for VALR operations
pub type Result<T> = std::result::Result<T, ValrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let rate_limited = ValrError::RateLimit { retry_after: 3 };
        assert!(rate_limited.is_retryable());
        assert_eq!(rate_limited.retry_delay(), Some(3));

        let auth_err = ValrError::MissingCredentials;
        assert!(!auth_err.is_retryable());
        assert_eq!(auth_err.retry_delay(), None);
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(ValrError::MissingCredentials.is_auth_error());
        assert!(
            ValrError::Api {
                code: 401,
                message: "Unauthorized".to_string()
            }
            .is_auth_error()
        );
        assert!(
            !ValrError::Api {
                code: 400,
                message: "Invalid currency pair".to_string()
            }
            .is_auth_error()
        );
    }

    #[test]
    fn test_api_error_creation() {
        let err = ValrError::api_error(StatusCode::BAD_REQUEST, "Invalid currency pair");
        match err {
            ValrError::Api { code, message } => {
                assert_eq!(code, 400);
                assert_eq!(message, "Invalid currency pair");
            }
            _ => panic!("Expected Api error variant"),
        }
    }
}
