mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "GP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".gp";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_AUTH_LATENCY_MS: u64 = 1000;
const MAX_AUTH_LATENCY_MS: u64 = 60_000;

const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_SLOT_KEY: &str = "user";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
