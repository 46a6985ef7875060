mod broadcast_config;
mod config;
mod database_config;
mod error;
mod keep_alive_config;
mod log_level;
mod logging_config;
mod server_config;
mod telegram_config;

pub use broadcast_config::BroadcastConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use keep_alive_config::KeepAliveConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use telegram_config::TelegramConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "recipients.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const CONFIG_DIR_ENV: &str = "BCAST_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".bcast";
const CONFIG_FILENAME: &str = "config.toml";
