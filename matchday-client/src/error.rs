//! Error types for the Matchday client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the prediction service
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or no response arrived
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Service responded with a non-2xx status code
    #[error("fetch error (status {status}): {message}")]
    Fetch {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// Response arrived but its body did not match the expected schema
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl ClientError {
    /// Create a fetch error from status code and message
    pub fn fetch_error(status: u16, message: impl Into<String>) -> Self {
        Self::Fetch {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Fetch { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Fetch { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_classification() {
        let not_found = ClientError::fetch_error(404, "no such simulation");
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let broken = ClientError::fetch_error(500, "database unavailable");
        assert!(broken.is_server_error());
        assert!(!broken.is_client_error());

        let malformed = ClientError::Protocol("missing jobStatus".to_string());
        assert!(!malformed.is_client_error());
        assert!(!malformed.is_server_error());
    }
}
