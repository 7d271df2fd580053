//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `speed_test` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Writing the report to stdout or a file
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use speed_test::initialization::init_logger_with;
use speed_test::report::{save_json, write_json, write_report, IgnoreBrokenPipe};
use speed_test::{run_audit, Config, OutputFormat, ResultCache};

#[tokio::main]
async fn main() -> Result<()> {
    // Load PAGESPEED_API_KEY from .env: current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let cache = match run_audit(&config, ResultCache::new()).await {
        Ok(cache) => cache,
        Err(e) => {
            eprintln!("speed_test error: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = emit(&config, &cache) {
        eprintln!("speed_test error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

fn emit(config: &Config, cache: &ResultCache) -> Result<()> {
    if let Some(path) = &config.out {
        return save_json(path, cache);
    }

    let mut stdout = IgnoreBrokenPipe::new(io::stdout().lock());
    match config.format {
        OutputFormat::Json => write_json(&mut stdout, cache),
        OutputFormat::Text => {
            for (i, result) in cache.iter().enumerate() {
                if i > 0 {
                    writeln!(stdout)?;
                }
                write_report(&mut stdout, result)?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}
