//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::constants::{API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Device profile the provider emulates while auditing.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Emulated mid-range phone on a throttled connection
    Mobile,
    /// Desktop viewport without CPU throttling
    Desktop,
}

impl Strategy {
    /// Value sent as the provider's `strategy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Mobile => "mobile",
            Strategy::Desktop => "desktop",
        }
    }
}

/// Which profiles to audit in one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// Mobile only (default)
    Mobile,
    /// Desktop only
    Desktop,
    /// Mobile, then desktop
    Both,
}

impl StrategyChoice {
    /// Profiles to audit, in the order they run.
    pub fn strategies(&self) -> Vec<Strategy> {
        match self {
            StrategyChoice::Mobile => vec![Strategy::Mobile],
            StrategyChoice::Desktop => vec![Strategy::Desktop],
            StrategyChoice::Both => vec![Strategy::Mobile, Strategy::Desktop],
        }
    }
}

impl From<Strategy> for StrategyChoice {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Mobile => StrategyChoice::Mobile,
            Strategy::Desktop => StrategyChoice::Desktop,
        }
    }
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal report
    Text,
    /// JSON bundle (one object per audited profile)
    Json,
}

/// Application configuration.
///
/// Parsed from the command line by `clap`, but can also be constructed
/// programmatically for library use.
///
/// # Examples
///
/// ```no_run
/// use speed_test::{Config, StrategyChoice};
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     api_key: Some("my-key".to_string()),
///     strategy: StrategyChoice::Both,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "speed_test",
    about = "Audits a web page with Google PageSpeed Insights."
)]
pub struct Config {
    /// URL to audit (https:// is assumed when no scheme is given)
    pub url: String,

    /// PageSpeed Insights API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Device profile: mobile|desktop|both
    #[arg(long, value_enum, default_value_t = StrategyChoice::Mobile)]
    pub strategy: StrategyChoice,

    /// Report format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the JSON bundle to this file instead of stdout
    #[arg(long, value_parser)]
    pub out: Option<PathBuf>,

    /// Provider endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: None,
            strategy: StrategyChoice::Mobile,
            format: OutputFormat::Text,
            out: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
