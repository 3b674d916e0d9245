use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use crate::constants::NEXT_DATE_ALGORITHM;
use crate::error::CoreResult;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Any `EnvFilter` directive, e.g. `info` or `dueday_rule=trace`.
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Name of the next-date algorithm used by the task scheduler.
    pub algorithm: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, then a settings file, then environment
    /// variables (`DUEDAY_LOGGING_LEVEL`, `DUEDAY_SCHEDULER_ALGORITHM`), which take
    /// precedence over file values.
    ///
    /// With `path`, that file is read and must exist. Without it, `config.toml`
    /// in the working directory is read if present.
    ///
    /// ## Errors
    /// Returns an error if the file is missing or malformed, or deserialization fails.
    pub fn load_from(path: Option<&Path>) -> CoreResult<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config.toml").required(false),
        };

        Ok(Self::with_defaults()?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("DUEDAY")
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds settings from TOML text layered over the defaults. No environment
    /// variables are consulted.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML or deserialization fails.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        Ok(Self::with_defaults()?
            .add_source(config::File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn with_defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("scheduler.algorithm", NEXT_DATE_ALGORITHM)?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and the given file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> CoreResult<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load_from(path)
}
