//! Logger setup: colored plain lines or one JSON object per line.

use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// HTTP stack crates that stay at `info` whatever the requested level.
const QUIET_MODULES: [&str; 3] = ["reqwest", "hyper", "hyper_util"];

/// Installs the global logger.
///
/// Starts from `RUST_LOG`, then applies `level` on top, so `--log-level`
/// wins while per-module `RUST_LOG` directives still shape everything else.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already set.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for module in QUIET_MODULES {
        builder.filter_module(module, LevelFilter::Info.min(level));
    }
    builder.filter_module(env!("CARGO_PKG_NAME"), level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            writeln!(
                buf,
                "{}",
                json_line(record, chrono::Utc::now().timestamp_millis())
            )
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            let (marker, level) = level_style(record.level());
            writeln!(
                buf,
                "{} {} [{}] {}",
                marker,
                record.target().cyan(),
                level,
                record.args()
            )
        }),
    };

    builder.try_init()?;
    Ok(())
}

fn json_line(record: &Record<'_>, ts: i64) -> String {
    serde_json::json!({
        "ts": ts,
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

fn level_style(level: Level) -> (&'static str, ColoredString) {
    let name = level.as_str();
    match level {
        Level::Error => ("❌", name.red()),
        Level::Warn => ("⚠️", name.yellow()),
        Level::Info => ("✔️", name.green()),
        Level::Debug => ("🔍", name.blue()),
        Level::Trace => ("🔬", name.purple()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_fields() {
        let line = json_line(
            &Record::builder()
                .args(format_args!("fetched \"home\" page"))
                .level(Level::Warn)
                .target("speed_test::client")
                .build(),
            1_700_000_000_000,
        );
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ts"], 1_700_000_000_000_i64);
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["target"], "speed_test::client");
        assert_eq!(value["msg"], "fetched \"home\" page");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_level_style() {
        colored::control::set_override(false);
        let (marker, name) = level_style(Level::Error);
        assert_eq!(marker, "❌");
        assert_eq!(name.to_string(), "ERROR");
        assert_eq!(level_style(Level::Debug).1.to_string(), "DEBUG");
    }

    #[test]
    fn test_second_init_is_an_error() {
        // Only one logger per process; whichever call comes second fails
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(
            second,
            Err(InitializationError::LoggerError(_))
        ));
        assert!(first.is_ok() || matches!(first, Err(InitializationError::LoggerError(_))));
    }
}
