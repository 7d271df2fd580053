//! speed_test library: PageSpeed Insights audits and their interpretation
//!
//! This library requests a Lighthouse audit for a URL from Google PageSpeed
//! Insights, normalizes the loosely-typed response into a flat metrics record,
//! ranks savings opportunities, and derives verdicts and recommendations.
//!
//! # Example
//!
//! ```no_run
//! use speed_test::{run_audit, Config, ResultCache, StrategyChoice};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".to_string(),
//!     api_key: Some("my-key".to_string()),
//!     strategy: StrategyChoice::Both,
//!     ..Default::default()
//! };
//!
//! let cache = run_audit(&config, ResultCache::new()).await?;
//! for result in cache.iter() {
//!     println!("{} ({}): {}/100", result.url, result.strategy, result.metrics.performance);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod audit;
mod cache;
mod client;
pub mod config;
mod error_handling;
pub mod extract;
pub mod initialization;
pub mod recommend;
pub mod report;

// Re-export public API
pub use cache::{AuditResult, ResultCache};
pub use client::{validate_and_normalize_url, PageSpeedClient};
pub use config::{Config, LogFormat, LogLevel, OutputFormat, Strategy, StrategyChoice};
pub use error_handling::{AuditError, InitializationError, AUTH_ERROR_MESSAGE};
pub use extract::{NormalizedMetrics, Opportunity};
pub use recommend::{Recommendation, Verdict};
pub use run::run_audit;

// Internal run module (drives one audit session)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::cache::{AuditResult, ResultCache};
    use crate::client::{validate_and_normalize_url, PageSpeedClient};
    use crate::config::Config;
    use crate::initialization::init_client;

    /// Audits `config.url` for each requested profile and stores the results.
    ///
    /// Profiles run one after another (mobile before desktop). A result for a
    /// profile already in `cache` is replaced.
    ///
    /// # Errors
    ///
    /// Fails on the first audit error; results stored before it are dropped
    /// with the cache. The error chain carries an [`AuditError`](crate::AuditError).
    pub async fn run_audit(config: &Config, mut cache: ResultCache) -> Result<ResultCache> {
        let http = init_client(config).context("Failed to initialize HTTP client")?;
        let client = PageSpeedClient::from_config(http, config)?;
        let target = validate_and_normalize_url(&config.url)?;

        for strategy in config.strategy.strategies() {
            info!("Auditing {} ({})", target, strategy);
            let raw = client
                .fetch_audit(target.as_str(), strategy)
                .await
                .with_context(|| format!("Audit failed for {} ({})", target, strategy))?;
            let result = AuditResult::from_response(target.as_str(), strategy, &raw);
            info!(
                "{} ({}): performance {}/100, {} opportunities, {} recommendations",
                result.url,
                strategy,
                result.metrics.performance,
                result.opportunities.len(),
                result.recommendations.len()
            );
            if cache.insert(result).is_some() {
                info!("Replaced previous {strategy} result");
            }
        }

        Ok(cache)
    }
}
