//! Tracing setup. The terminal owns stdout, so everything goes to a file.
//!
use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a global subscriber appending to `path`; `RUST_LOG` overrides the `info` default.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))?;
    tracing::info!(log = %path.display(), "logging initialised");
    Ok(())
}
