//! File logging.
//!
//! The TUI owns the terminal, so every log line goes to `loupe.log` in the
//! data directory. `RUST_LOG` filters as usual and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use color_eyre::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to `log_file` (appending).
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a global subscriber
/// is already set.
pub fn init(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Arc::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    tracing::info!(path = %log_file.display(), version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(())
}
