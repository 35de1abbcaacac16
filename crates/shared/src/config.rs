//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Split validation configuration.
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How an account entry matching several allocation mechanisms is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationMode {
    /// Apply every matching mechanism (share, fixed amount, remainder) in turn.
    #[default]
    Compatible,
    /// Reject entries that match more than one mechanism.
    Exclusive,
}

/// Split validation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Allocate the source and destination sides concurrently.
    #[serde(default = "default_parallel_sides")]
    pub parallel_sides: bool,
    /// Allocation mechanism policy.
    #[serde(default)]
    pub allocation_mode: AllocationMode,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            parallel_sides: default_parallel_sides(),
            allocation_mode: AllocationMode::default(),
        }
    }
}

fn default_parallel_sides() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON formatted events instead of human readable ones.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "ledgersplit=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("LEDGERSPLIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
