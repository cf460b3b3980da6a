//! Configuration module
//!
//! Handles CLI configuration including the prediction service URL.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the prediction service
    pub api_url: String,
}
