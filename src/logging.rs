//! Tracing setup
//!
//! The interactive form owns the terminal, so it logs to a file under the
//! user data directory. Subcommands log to stderr.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "bloom-pizza.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }))
}

pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("bloom-pizza").join(LOG_FILE_NAME))
}

/// Install the global subscriber. Returns the log file path when logging to a file.
pub fn init(debug: bool, target: LogTarget) -> Result<Option<PathBuf>> {
    let filter = default_filter(debug);

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
            Ok(None)
        }
        LogTarget::File => {
            let Some(path) = log_file_path() else {
                // Nowhere to write without corrupting the screen
                return Ok(None);
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
            Ok(Some(path))
        }
    }
}
