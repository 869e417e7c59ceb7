use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_MAX_OCCURRENCES;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub engine: EngineConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on occurrences a single expansion may produce. `0` disables the guard.
    pub max_occurrences: u32,
}

impl EngineConfig {
    /// ## Summary
    /// Returns the configured occurrence cap, or `None` when the guard is disabled.
    #[must_use]
    pub const fn occurrence_cap(&self) -> Option<u32> {
        if self.max_occurrences == 0 {
            None
        } else {
            Some(self.max_occurrences)
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding an array of event templates loaded at startup.
    pub seed_file: Option<String>,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional
    /// `config.toml` into a `Settings`. Later sources override earlier ones.
    ///
    /// Nested keys are separated by a double underscore in the environment,
    /// e.g. `ENGINE__MAX_OCCURRENCES` or `STORE__SEED_FILE`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_with(Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn load_with(environment: config::Environment) -> Result<Self> {
        Ok(Config::builder()
            .set_default("logging.level", "debug")?
            .set_default("engine.max_occurrences", i64::from(DEFAULT_MAX_OCCURRENCES))?
            .add_source(environment)
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
