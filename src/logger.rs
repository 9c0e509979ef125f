//! Logging setup built on `fern`.
//!
//! Records go to stderr (stdout carries the report) and, when configured,
//! to a log file as well. Call sites use the `log` macros.

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;

/// Build the log dispatch described by `config`, or `None` when logging is disabled.
pub fn build_dispatch(config: &LoggingConfig) -> Result<Option<fern::Dispatch>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level_filter()?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(path) = &config.file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(Some(dispatch))
}

/// Install the global logger. Returns whether a logger was installed.
///
/// Must be called at most once per process.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    match build_dispatch(config)? {
        Some(dispatch) => {
            dispatch
                .apply()
                .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
            Ok(true)
        }
        None => Ok(false),
    }
}
