//! API configuration

use serde::Deserialize;

use core_kernel::CoreError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level, used when `RUST_LOG` is not set
    pub log_level: String,
    /// Allow cross-origin requests from any origin
    pub cors_allow_any: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            cors_allow_any: true,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `LOSTFOUND_`-prefixed environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("LOSTFOUND").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Checks values the deserializer cannot
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.host.trim().is_empty() {
            return Err(CoreError::configuration("host must not be empty"));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(CoreError::Configuration(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.cors_allow_any);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_log_level() {
        let config = ApiConfig {
            log_level: "loud".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_host() {
        let config = ApiConfig {
            host: " ".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Configuration(_))));
    }
}
