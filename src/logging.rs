use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const LOG_FILE_NAME: &str = "pixel-snake.log";
const DEFAULT_FILTER: &str = "pixel_snake=info";

/// Returns the log path used when none is given on the command line.
#[must_use]
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Builds the filter from `RUST_LOG`, falling back to crate-level info.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a global subscriber writing plain-text events to `path`.
///
/// The terminal is in raw mode while the game runs, so nothing is written to
/// stdout or stderr. Calling this twice keeps the first subscriber.
pub fn init(path: &Path) -> Result<(), AppError> {
    let file = open_log_file(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, AppError> {
    let to_error = |source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}
