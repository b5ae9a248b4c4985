//! File logging. The terminal belongs to the UI, so nothing is written to stdout.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Variable holding the log filter, e.g. `RAYFRAME_LOG=rayframe=debug`.
pub const LOG_ENV: &str = "RAYFRAME_LOG";
pub const LOG_FILE: &str = "rayframe.log";
const DEFAULT_FILTER: &str = "info";

pub fn default_log_path() -> Option<PathBuf> {
    crate::app::persistence::config_dir().map(|dir| dir.join(LOG_FILE))
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))
}

/// Installs the global subscriber, appending to `path`.
pub fn init(path: &Path) -> Result<()> {
    let file = open_log(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}
