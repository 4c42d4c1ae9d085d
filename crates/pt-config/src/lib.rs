mod config;
mod cors_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5001;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "projects.db";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
