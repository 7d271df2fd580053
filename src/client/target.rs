//! Target URL validation and provider request URL construction.

use log::warn;
use url::Url;

use crate::config::{Strategy, AUDIT_CATEGORIES, MAX_URL_LENGTH};
use crate::error_handling::AuditError;

/// Validates and normalizes a target URL.
///
/// Trims whitespace and adds an `https://` prefix if no `scheme://` is present, then
/// checks that the result parses as an absolute http/https URL no longer than
/// `MAX_URL_LENGTH`.
///
/// # Errors
///
/// Returns `AuditError::InvalidUrlError` if the URL is empty, too long,
/// unparsable, or uses another scheme.
pub fn validate_and_normalize_url(url: &str) -> Result<Url, AuditError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AuditError::InvalidUrlError("URL is empty".to_string()));
    }

    // Only scheme-less input gets a prefix; other schemes are rejected below
    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    // Checked after normalization since the prefix can push it over the limit
    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return Err(AuditError::InvalidUrlError(format!(
            "URL is longer than {MAX_URL_LENGTH} characters"
        )));
    }

    let parsed = Url::parse(&normalized)
        .map_err(|e| AuditError::InvalidUrlError(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(parsed),
        "http" | "https" => Err(AuditError::InvalidUrlError(format!("{url}: missing host"))),
        other => Err(AuditError::InvalidUrlError(format!(
            "{url}: unsupported scheme {other}"
        ))),
    }
}

/// Builds the provider request URL for one audit.
///
/// All four categories are always requested.
pub(crate) fn build_request_url(
    endpoint: &str,
    target: &Url,
    strategy: Strategy,
    api_key: &str,
) -> Result<Url, AuditError> {
    let mut request = Url::parse(endpoint)
        .map_err(|e| AuditError::InvalidUrlError(format!("endpoint {endpoint}: {e}")))?;
    {
        let mut query = request.query_pairs_mut();
        query.append_pair("url", target.as_str());
        query.append_pair("strategy", strategy.as_str());
        for category in AUDIT_CATEGORIES {
            query.append_pair("category", category);
        }
        query.append_pair("key", api_key);
    }
    Ok(request)
}

/// Request URL with the API key removed, safe for logs.
pub(crate) fn redacted(request: &Url) -> String {
    let mut safe = request.clone();
    let pairs: Vec<(String, String)> = request
        .query_pairs()
        .filter(|(k, _)| k != "key")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    safe.query_pairs_mut().clear().extend_pairs(pairs);
    safe.to_string()
}
