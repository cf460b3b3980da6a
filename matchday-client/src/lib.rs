//! Matchday HTTP Client
//!
//! A simple, type-safe HTTP client for the prediction service API.
//!
//! This crate provides the one transport surface shared by every consumer of
//! the service: job submission and polling, the simulation list, and the
//! per-simulation result endpoints. Paths and verbs are preserved exactly as
//! the service exposes them.
//!
//! # Example
//!
//! ```no_run
//! use matchday_client::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiClient::new("http://localhost:8000");
//!
//!     // Queue a new simulation run
//!     let job_id = client.submit_simulation().await?;
//!
//!     println!("Queued job: {}", job_id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod simulations;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client for the prediction service API
///
/// This client provides methods for all service endpoints, organized into
/// logical groups:
/// - Job lifecycle (submit, poll)
/// - Simulation data (list, clear, matches, table)
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL of the service (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the prediction service (e.g., "http://localhost:8000")
    ///
    /// # Example
    /// ```
    /// use matchday_client::ApiClient;
    ///
    /// let client = ApiClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the prediction service
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Any non-2xx status is a [`ClientError::Fetch`]; a 2xx body that does
    /// not decode into the expected schema is a [`ClientError::Protocol`].
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            debug!("request to {} failed with status {}", response.url(), status);
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::fetch_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Protocol(format!("failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE operations)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            debug!("request to {} failed with status {}", response.url(), status);
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::fetch_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
