//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::API_KEY_ENV;

/// Message shown when the provider rejects the API key.
pub const AUTH_ERROR_MESSAGE: &str =
    "Invalid or missing API key. Please check your PageSpeed Insights API key configuration.";

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors returned by the audit client.
///
/// Extraction never fails, so these are the only errors an audit can produce.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum AuditError {
    /// No usable API key. Fatal until the operator configures one.
    #[error(
        "PageSpeed API key not configured. Set the {env} environment variable (or add it to .env) or pass --api-key.",
        env = API_KEY_ENV
    )]
    ConfigurationError,

    /// The provider rejected the request credentials (error code 400 or 403).
    #[error("{msg}", msg = AUTH_ERROR_MESSAGE)]
    AuthError {
        /// Provider error code
        code: i64,
    },

    /// Any other provider-reported failure. The message is the provider's, verbatim.
    #[error("{message}")]
    ProviderError {
        /// Provider error code, when one was reported
        code: Option<i64>,
        /// Provider message
        message: String,
    },

    /// The target URL is not a valid absolute http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrlError(String),

    /// The request never produced a provider response (DNS, connect, timeout).
    ///
    /// Build with [`AuditError::request`], which strips the request URL (and
    /// with it the API key) from the transport error.
    #[error("Request to PageSpeed Insights failed")]
    RequestError(#[source] ReqwestError),

    /// The provider answered with a success status but the body is not JSON.
    #[error("Could not decode PageSpeed Insights response")]
    DecodeError(#[from] serde_json::Error),
}

impl AuditError {
    /// Wraps a transport error without the request URL it carries.
    pub fn request(error: ReqwestError) -> Self {
        AuditError::RequestError(error.without_url())
    }

    /// Whether resubmitting the same request could succeed.
    ///
    /// Configuration, credential and input problems need operator action first.
    /// Provider-side failures (for example the target being unreachable by the
    /// provider's crawler) and transient network failures may clear up.
    pub fn is_retryable(&self) -> bool {
        match self {
            AuditError::ConfigurationError
            | AuditError::AuthError { .. }
            | AuditError::InvalidUrlError(_)
            | AuditError::DecodeError(_) => false,
            AuditError::ProviderError { .. } => true,
            AuditError::RequestError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        }
    }
}
