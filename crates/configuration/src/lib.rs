use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::{LogGuard, init_tracing};
pub use settings::{
    Config, DEFAULT_MAX_YEARS, DEFAULT_RETIREMENT_FALLBACK_MONTHLY_RATE, EngineSettings,
    ExportSettings, LogFormat, LoggingSettings,
};

/// Prefix for environment overrides, e.g. `FINCALC__ENGINE__MAX_YEARS=100`.
pub const ENV_PREFIX: &str = "FINCALC";

/// Loads configuration from the given file, layering environment variables on top.
///
/// The file is optional: every section has defaults, so a missing file yields the
/// default configuration (plus any environment overrides). The result is validated
/// before it is returned.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?path, ?config, "Configuration loaded");
    Ok(config)
}
