//! Log setup for the terminal front-end.
//!
//! Logs go to `.folio/logs/latest.log` so they never interleave with the
//! animations on screen. If that file cannot be opened, stderr is used.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_subscriber::filter::EnvFilter;

pub fn log_file_path() -> PathBuf {
    PathBuf::from(".folio").join("logs").join("latest.log")
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the level.
pub fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let path = log_file_path();
    let file = path
        .parent()
        .map(fs::create_dir_all)
        .transpose()
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!("could not open {}: {}", path.display(), e);
        }
    }
}
