//! # Storefront Errors
//!
//! Error taxonomy shared by the services and view-models. None of these are
//! fatal: view-models log them and fall back to their last good state.

use thiserror::Error;

/// Result alias used by the services layer
pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A required draft field was empty; no request was sent
    #[error("{0}")]
    Validation(String),

    /// The request never produced a response (connection refused, DNS, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded
    #[error("malformed response body: {0}")]
    Decode(String),

    /// Invalid configuration or form input
    #[error("configuration error: {0}")]
    Config(String),
}

impl StorefrontError {
    /// Whether the error happened before any network call was made
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for StorefrontError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_should_mention_code() {
        let err = StorefrontError::Status {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "server responded with status 503");
    }

    #[test]
    fn json_error_should_convert_to_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StorefrontError = json_err.into();
        assert!(matches!(err, StorefrontError::Decode(_)));
        assert!(!err.is_validation());
    }
}
