//! PageSpeed Insights client.
//!
//! Issues one audit request per call and maps provider failures onto
//! [`AuditError`]. No retries are performed; the caller decides whether to
//! resubmit (see [`AuditError::is_retryable`]).

mod target;

use std::time::Instant;

use log::{debug, info, warn};

use crate::audit::PageSpeedResponse;
use crate::config::{Config, Strategy, AUTH_ERROR_CODES, DEFAULT_ENDPOINT};
use crate::error_handling::AuditError;

pub use self::target::validate_and_normalize_url;
use self::target::{build_request_url, redacted};

/// Client for the PageSpeed Insights `runPagespeed` endpoint.
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct PageSpeedClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl PageSpeedClient {
    /// Creates a client for the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::ConfigurationError` if the key is missing or blank.
    pub fn new(http: reqwest::Client, api_key: Option<&str>) -> Result<Self, AuditError> {
        Self::with_endpoint(http, DEFAULT_ENDPOINT, api_key)
    }

    /// Creates a client for a specific endpoint (used for mock servers in tests).
    pub fn with_endpoint(
        http: reqwest::Client,
        endpoint: &str,
        api_key: Option<&str>,
    ) -> Result<Self, AuditError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(AuditError::ConfigurationError)?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Creates a client from application configuration.
    pub fn from_config(http: reqwest::Client, config: &Config) -> Result<Self, AuditError> {
        Self::with_endpoint(http, &config.endpoint, config.api_key.as_deref())
    }

    /// Runs one audit of `url` for `strategy`, requesting all four categories.
    ///
    /// Returns the provider's response as parsed, without modification.
    ///
    /// # Errors
    ///
    /// - `InvalidUrlError` if `url` is not a valid http(s) URL
    /// - `AuthError` if the provider reports error code 400 or 403
    /// - `ProviderError` for any other provider-reported error
    /// - `RequestError` if no response was received
    /// - `DecodeError` if a success response is not JSON
    pub async fn fetch_audit(
        &self,
        url: &str,
        strategy: Strategy,
    ) -> Result<PageSpeedResponse, AuditError> {
        let target = validate_and_normalize_url(url)?;
        let request = build_request_url(&self.endpoint, &target, strategy, &self.api_key)?;
        debug!("GET {}", redacted(&request));

        let started = Instant::now();
        let response = self
            .http
            .get(request)
            .send()
            .await
            .map_err(AuditError::request)?;
        let status = response.status();
        let body = response.text().await.map_err(AuditError::request)?;
        info!(
            "PageSpeed Insights answered {} for {} ({}) in {:.1}s",
            status.as_u16(),
            target,
            strategy,
            started.elapsed().as_secs_f64()
        );

        let parsed = match PageSpeedResponse::from_json(&body) {
            Ok(parsed) => parsed,
            Err(e) if !status.is_success() => {
                warn!("Non-JSON error body from provider: {e}");
                return Err(AuditError::ProviderError {
                    code: Some(i64::from(status.as_u16())),
                    message: format!("PageSpeed Insights returned HTTP {status}"),
                });
            }
            Err(e) => return Err(AuditError::DecodeError(e)),
        };

        if let Some(error) = &parsed.error {
            return Err(provider_error(error.code, error.message.as_deref()));
        }
        if !status.is_success() {
            // Error status without an error object
            return Err(AuditError::ProviderError {
                code: Some(i64::from(status.as_u16())),
                message: format!("PageSpeed Insights returned HTTP {status}"),
            });
        }
        if parsed.lighthouse_result.is_none() {
            warn!("Response for {target} has no Lighthouse result; metrics will be empty");
        }
        Ok(parsed)
    }
}

/// Maps a provider error object onto the error taxonomy.
fn provider_error(code: Option<i64>, message: Option<&str>) -> AuditError {
    match code {
        Some(code) if AUTH_ERROR_CODES.contains(&code) => AuditError::AuthError { code },
        _ => AuditError::ProviderError {
            code,
            message: message.unwrap_or("Unknown PageSpeed Insights error").to_string(),
        },
    }
}
