use crate::error::ConfigError;
use crate::settings::{LogFormat, LoggingSettings};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "fincalc.log";

/// Keeps the background log writer alive. Drop it only when the program exits,
/// otherwise buffered file logs are lost.
#[must_use]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Installs the global tracing subscriber.
///
/// Console output goes to stderr so that stdout stays usable for tables and CSV.
/// `RUST_LOG` overrides `settings.level` when it is set.
pub fn init_tracing(settings: &LoggingSettings) -> Result<LogGuard, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    let console = match settings.format {
        LogFormat::Pretty => fmt::layer().with_writer(std::io::stderr).boxed(),
        LogFormat::Compact => fmt::layer().compact().with_writer(std::io::stderr).boxed(),
    };

    let (file_layer, guard) = match &settings.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    Ok(LogGuard { _file: guard })
}
