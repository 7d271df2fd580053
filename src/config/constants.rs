//! Configuration constants.
//!
//! This module defines the provider endpoint, request defaults, and the fixed
//! thresholds used by the recommendation rules.

/// PageSpeed Insights v5 endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Environment variable holding the PageSpeed Insights API key.
///
/// Also read from a `.env` file in the working directory or next to the binary.
pub const API_KEY_ENV: &str = "PAGESPEED_API_KEY";

/// Categories requested on every audit, in request order.
pub const AUDIT_CATEGORIES: &[&str] = &["performance", "accessibility", "best-practices", "seo"];

/// Per-request timeout in seconds.
/// A single audit can take ~30s on the provider side, so this leaves headroom.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// User-Agent sent to the provider.
pub const DEFAULT_USER_AGENT: &str = concat!("speed_test/", env!("CARGO_PKG_VERSION"));

/// Maximum URL length (2048 characters), matching common browser/server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Provider error codes that mean the API key was rejected.
pub const AUTH_ERROR_CODES: &[i64] = &[400, 403];

/// Audits must promise more than this many milliseconds to count as an opportunity.
pub const OPPORTUNITY_NOISE_FLOOR_MS: f64 = 100.0;

/// Number of opportunities and third-party entities shown in the terminal report.
pub const REPORT_TOP_N: usize = 5;

// Recommendation thresholds (all compared with a strict `>`)
/// Largest Contentful Paint in milliseconds
pub const LCP_RECOMMENDATION_MS: f64 = 2500.0;
/// Cumulative Layout Shift (unitless)
pub const CLS_RECOMMENDATION: f64 = 0.1;
/// Total Blocking Time in milliseconds
pub const TBT_RECOMMENDATION_MS: f64 = 200.0;
/// Unused CSS in bytes
pub const UNUSED_CSS_RECOMMENDATION_BYTES: f64 = 50_000.0;
/// Total page weight in bytes
pub const TOTAL_SIZE_RECOMMENDATION_BYTES: f64 = 3_000_000.0;
/// Network request count
pub const REQUEST_COUNT_RECOMMENDATION: u64 = 100;
