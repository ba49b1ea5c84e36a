//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Expense validation limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Limits applied when validating a new expense.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum expense title length, in characters.
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
    /// How far in the past an expense date may lie, in days.
    #[serde(default = "default_max_backdate_days")]
    pub max_backdate_days: i64,
}

fn default_max_title_length() -> usize {
    200
}

fn default_max_backdate_days() -> i64 {
    365
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_title_length: default_max_title_length(),
            max_backdate_days: default_max_backdate_days(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DIVVY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
