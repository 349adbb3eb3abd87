//! Decode error types.

use std::io;
use thiserror::Error;

/// Errors produced while turning an HTTP response into a typed value.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The server answered with an error status.
    #[error("HTTP error: {status} {reason}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Reason phrase sent with the status line.
        reason: String,
    },

    /// The body is not valid JSON for the requested type.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Releasing the body stream failed and nothing else went wrong.
    #[error("failed to release response body: {0}")]
    ResourceRelease(#[source] io::Error),

    /// The body exceeded the configured size limit.
    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge {
        /// Configured limit in bytes.
        limit: usize,
    },

    /// The transport failed while the body was being buffered.
    #[cfg(feature = "reqwest")]
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DecodeError {
    /// Create an HTTP status error.
    pub fn http_status(status: u16, reason: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            reason: reason.into(),
        }
    }

    /// Get the HTTP status if this is a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the server rejected the request.
    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::HttpStatus { .. })
    }

    /// Check for a 4xx status.
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..=499).contains(&s))
    }

    /// Check for a 5xx status.
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..=599).contains(&s))
    }
}

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display() {
        let err = DecodeError::http_status(404, "Not Found");
        assert_eq!(err.to_string(), "HTTP error: 404 Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_status_classes() {
        assert!(DecodeError::http_status(404, "Not Found").is_client_error());
        assert!(!DecodeError::http_status(404, "Not Found").is_server_error());
        assert!(DecodeError::http_status(503, "Service Unavailable").is_server_error());

        let err = DecodeError::BodyTooLarge { limit: 16 };
        assert!(!err.is_http_status());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: DecodeError = parse.into();
        assert!(matches!(err, DecodeError::Json(_)));
        assert!(err.to_string().starts_with("JSON decode error"));
    }

    #[test]
    fn test_release_error_source() {
        use std::error::Error as _;

        let err = DecodeError::ResourceRelease(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(err.source().is_some());
    }
}
