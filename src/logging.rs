//! File logging.
//!
//! The terminal belongs to the TUI, so logs only ever go to a file, and only
//! when `FUTURAMA_LOG` names a path prefix. Each run writes its own file,
//! `{prefix}.{unix_ts}.{pid}`, so concurrent instances never interleave.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Log file for one process.
pub fn log_file_path(prefix: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

/// Install the global subscriber if logging is configured.
///
/// Returns the file being written, or `None` when logging stays off.
pub fn init_tracing(config: &AppConfig) -> Option<PathBuf> {
    let prefix = config.log_path.as_deref()?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(prefix, timestamp, std::process::id());

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: logging already initialized: {}", err);
        return None;
    }

    tracing::info!(
        "futurama-tui {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        path.display()
    );
    Some(path)
}
