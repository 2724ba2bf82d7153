use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_STEM, DEFAULT_HORIZON_DAYS, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub recurrence: RecurrenceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecurrenceConfig {
    /// Days after the anchor date used to bound rules that carry no end date.
    pub default_horizon_days: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recurrence: RecurrenceConfig {
                default_horizon_days: DEFAULT_HORIZON_DAYS,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with defaults.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be registered.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default(
                "recurrence.default_horizon_days",
                i64::from(DEFAULT_HORIZON_DAYS),
            )?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `cadence.toml` into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the
    /// configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::builder()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_STEM).required(false))
            // Env vars, e.g. CADENCE_RECURRENCE__DEFAULT_HORIZON_DAYS
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks value ranges that serde cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for a zero horizon.
    pub fn validate(&self) -> CoreResult<()> {
        if self.recurrence.default_horizon_days == 0 {
            return Err(CoreError::InvalidConfiguration(
                "recurrence.default_horizon_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
