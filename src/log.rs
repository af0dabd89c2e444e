// src/log.rs
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{Error, Result};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level` when set. Lines carry the uptime since
/// start, so a run reads as one elapsed-time trace. When `file` is given the
/// log is appended there instead of stderr.
///
/// Returns `Ok(false)` if a subscriber was already installed.
pub fn init(level: &str, file: Option<&Path>) -> Result<bool> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::uptime())
        .with_target(false);

    let installed = match file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                crate::file::ensure_directory(parent)?;
            }
            let out = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::io(path, e))?;
            builder.with_ansi(false).with_writer(Mutex::new(out)).try_init().is_ok()
        }
        None => builder.with_writer(std::io::stderr).try_init().is_ok(),
    };
    Ok(installed)
}
