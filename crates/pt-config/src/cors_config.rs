use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGIN};

use serde::Deserialize;

/// Cross-origin allow-list. Requests from origins not on the list get no
/// CORS grant.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from(DEFAULT_ALLOWED_ORIGIN)],
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::cors(
                "cors.allowed_origins must list at least one origin",
            ));
        }

        for origin in &self.allowed_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entries must be http(s) origins, got '{}'",
                    origin
                )));
            }
            if origin.ends_with('/') {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entries must not end with '/', got '{}'",
                    origin
                )));
            }
        }

        Ok(())
    }
}
