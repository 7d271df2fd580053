//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_USER_AGENT};

/// Initializes the HTTP client used to call the provider.
///
/// Creates a `reqwest::Client` configured with:
/// - the crate's User-Agent
/// - the per-request timeout from the configuration
///
/// The provider can take ~30 seconds per audit, so the timeout should stay
/// well above that.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}
