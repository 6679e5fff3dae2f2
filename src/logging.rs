//! Logging setup: tracing with a non-blocking file appender.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize tracing with file output.
///
/// Log events go to a file rather than the terminal so they never mix
/// with the rendered CSS on stdout. Returns a guard that must be held for
/// the duration of the program; dropping it flushes remaining logs.
pub fn init_logging(log_path: Option<&Path>, level: &str) -> WorkerGuard {
    let log_path = log_path.unwrap_or(Path::new("backdrop.log"));

    let parent = log_path.parent().unwrap_or(Path::new("."));
    let filename = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("backdrop.log"));

    let file_appender = tracing_appender::rolling::never(parent, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_new(format!("backdrop={level}")).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    guard
}
