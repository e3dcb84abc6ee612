//! Tracing setup for the binary: stderr always, plus a log file when `REFINERY_LOG_FILE` is set.
//!
//! Filter comes from `RUST_LOG` (default `info`).

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_ENV: &str = "REFINERY_LOG_FILE";

/// Installs the global subscriber. Keep the returned guard alive for the life of the
/// process so buffered file output is flushed.
pub fn init() -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let stderr_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    let (file_layer, guard) = match std::env::var(LOG_FILE_ENV).ok().filter(|p| !p.is_empty()) {
        Some(path) => {
            let path = Path::new(&path);
            let dir = path.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path.file_name().ok_or("REFINERY_LOG_FILE has no file name")?;
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;
    Ok(guard)
}
