use crate::{
    ConfigError, ConfigErrorResult, CorsConfig, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Load .env if present (development)
    /// 2. Check for PT_CONFIG_DIR env var, else use ./.pt/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply PT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PT_CONFIG_DIR env var > ./.pt/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("PT_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".pt"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.cors.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!("  cors: {}", self.cors.allowed_origins.join(", "));
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    /// Apply PT_* environment variable overrides on top of file values.
    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PT_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PT_DATABASE_PATH", &mut self.database.path);

        // CORS: comma-separated origin list
        if let Ok(val) = std::env::var("PT_CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Logging
        if let Ok(val) = std::env::var("PT_LOG_LEVEL") {
            // FromStr never fails, falls back to Info
            self.logging.level = crate::LogLevel::from_str(&val).unwrap();
        }
        if let Ok(val) = std::env::var("PT_LOG_FILE") {
            self.logging.file = Some(val);
        }
        Self::apply_env_string("PT_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_bool("PT_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            if let Ok(parsed) = val.parse() {
                *target = parsed;
            }
        }
    }

    /// Helper: Apply environment variable override for bool values
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            match val.to_lowercase().as_str() {
                "1" | "true" | "yes" => *target = true,
                "0" | "false" | "no" => *target = false,
                _ => {}
            }
        }
    }
}
