//! Log setup.
//!
//! The TUI owns stdout, so tracing output goes to a file under the user's
//! local data directory. `MLPLAY_LOG` controls the filter (default `info`).

use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Default location of the log file, if a data directory is available.
pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("mlplay").join("mlplay.log"))
}

/// Initialize tracing to the default log file. Returns the path on
/// success, `None` when no usable data directory exists (logging is then
/// disabled rather than fatal).
pub fn init() -> Option<PathBuf> {
    init_at(log_path()?)
}

/// Initialize tracing to a specific log file.
pub fn init_at(path: PathBuf) -> Option<PathBuf> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).ok()?;
    }
    let file = File::create(&path).ok()?;

    let filter = EnvFilter::try_from_env("MLPLAY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}
