use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// Monthly return assumed by the retirement calculator when the caller gives none.
///
/// A zero expected return is read as "unknown" and replaced by this rate (0.5% a month,
/// roughly 6% a year), which also keeps the annuity divisor away from zero.
pub const DEFAULT_RETIREMENT_FALLBACK_MONTHLY_RATE: f64 = 0.005;

/// Upper bound on any tenure in years; keeps the month-by-month loops bounded.
/// `engine.max_years` may lower it but never raise it.
pub const DEFAULT_MAX_YEARS: f64 = 500.0;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineSettings,
    pub logging: LoggingSettings,
    pub export: ExportSettings,
}

impl Config {
    /// Checks values that deserialize fine but make no sense to the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.engine.retirement_fallback_monthly_rate;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::ValidationError(
                "engine.retirement_fallback_monthly_rate must be greater than 0".to_string(),
            ));
        }
        let max_years = self.engine.max_years;
        if !max_years.is_finite() || max_years <= 0.0 {
            return Err(ConfigError::ValidationError(
                "engine.max_years must be greater than 0".to_string(),
            ));
        }
        if max_years > DEFAULT_MAX_YEARS {
            return Err(ConfigError::ValidationError(format!(
                "engine.max_years must not exceed {DEFAULT_MAX_YEARS}"
            )));
        }
        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "export.file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters consumed by the calculators themselves.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// See [`DEFAULT_RETIREMENT_FALLBACK_MONTHLY_RATE`].
    pub retirement_fallback_monthly_rate: f64,
    /// Tenures above this are rejected as invalid input.
    pub max_years: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            retirement_fallback_monthly_rate: DEFAULT_RETIREMENT_FALLBACK_MONTHLY_RATE,
            max_years: DEFAULT_MAX_YEARS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::default(), directory: None }
    }
}

/// Where exported chart data goes when the caller does not name a file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self { file_name: "chart-data.csv".to_string() }
    }
}
