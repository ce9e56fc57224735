use crate::errors::{AppError, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub email: EmailConfig,
    pub security: SecurityConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub window_seconds: u64,
    pub max_requests: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub api_key: String,
    pub from: String,
    pub admin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub cors_allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        // Determine environment
        let environment = env::var("PITCHZY_ENV").unwrap_or_else(|_| "development".to_string());

        // Build configuration
        let config = config::Config::builder()
            // Start with default config
            .add_source(config::File::with_name("config/default"))
            // Add environment-specific config
            .add_source(
                config::File::with_name(&format!("config/{}", environment)).required(false),
            )
            // Add environment variables with prefix PITCHZY
            // e.g., PITCHZY__SERVER__PORT=5000
            .add_source(
                config::Environment::with_prefix("PITCHZY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        // Deserialize into our Config struct
        config
            .try_deserialize()
            .map_err(|e| AppError::Configuration(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Validate server config
        if self.server.port == 0 {
            return Err(AppError::Configuration("Invalid port number".to_string()));
        }

        // Validate rate limit config
        if self.rate_limit.window_seconds == 0 {
            return Err(AppError::Configuration(
                "Rate limit window must be non-zero".to_string(),
            ));
        }
        if self.rate_limit.max_requests == 0 {
            return Err(AppError::Configuration(
                "Rate limit quota must be non-zero".to_string(),
            ));
        }

        // Validate email config
        if self.email.enabled {
            if self.email.endpoint.is_empty() {
                return Err(AppError::Configuration(
                    "Email endpoint is required when email is enabled".to_string(),
                ));
            }
            if self.email.from.is_empty() || self.email.admin.is_empty() {
                return Err(AppError::Configuration(
                    "Email sender and admin addresses are required when email is enabled"
                        .to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            rate_limit: RateLimitConfig {
                window_seconds: 900,
                max_requests: 5,
            },
            email: EmailConfig {
                enabled: false,
                endpoint: String::new(),
                api_key: String::new(),
                from: "no-reply@pitchzy.com".to_string(),
                admin: "hello@pitchzy.com".to_string(),
            },
            security: SecurityConfig {
                cors_allowed_origin: "http://localhost:5173".to_string(),
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                log_format: "pretty".to_string(),
            },
        }
    }

    #[test]
    fn test_config_validation() {
        let config = test_config();
        assert!(config.validate().is_ok());

        // Test invalid port
        let mut config = test_config();
        config.server.port = 0;
        assert!(config.validate().is_err());

        // Test zero-length window
        let mut config = test_config();
        config.rate_limit.window_seconds = 0;
        assert!(config.validate().is_err());

        // Test zero quota
        let mut config = test_config();
        config.rate_limit.max_requests = 0;
        assert!(config.validate().is_err());

        // Enabled email requires an endpoint
        let mut config = test_config();
        config.email.enabled = true;
        assert!(config.validate().is_err());
    }
}
