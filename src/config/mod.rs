//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SALES_CRM` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use sales_crm::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Token TTL: {:?}", config.auth.token_ttl());
//! ```

mod auth;
mod error;
mod logging;
mod seed;

pub use auth::{AuthConfig, MAX_TOKEN_TTL_SECS, MIN_PRODUCTION_SECRET_LEN};
pub use error::{ConfigError, ValidationError};
pub use logging::{Environment, LoggingConfig};
pub use seed::SeedConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (environment, filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Access tokens and password hashing
    #[serde(default)]
    pub auth: AuthConfig,

    /// Initial manager account
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SALES_CRM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SALES_CRM__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `SALES_CRM__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SALES_CRM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.auth.validate(&self.logging.environment)?;
        self.seed.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.logging.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SALES_CRM__AUTH__JWT_SECRET",
        "SALES_CRM__AUTH__PASSWORD_PEPPER",
        "SALES_CRM__AUTH__TOKEN_TTL_SECS",
        "SALES_CRM__AUTH__ISSUER",
        "SALES_CRM__LOGGING__ENVIRONMENT",
        "SALES_CRM__LOGGING__LEVEL",
        "SALES_CRM__LOGGING__JSON",
        "SALES_CRM__SEED__ENABLED",
        "SALES_CRM__SEED__ADMIN_EMAIL",
        "SALES_CRM__SEED__ADMIN_PASSWORD",
    ];

    fn set_minimal_env() {
        env::set_var("SALES_CRM__AUTH__JWT_SECRET", "0123456789abcdef0123456789abcdef");
        env::set_var("SALES_CRM__AUTH__PASSWORD_PEPPER", "pepper");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SALES_CRM__AUTH__ISSUER", "sales-crm");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.auth.jwt_secret.expose_secret(),
            "0123456789abcdef0123456789abcdef"
        );
        assert_eq!(config.auth.issuer.as_deref(), Some("sales-crm"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.environment, Environment::Development);
        assert_eq!(config.auth.token_ttl_secs, 86_400);
        assert!(!config.seed.enabled);
    }

    #[test]
    fn test_missing_secrets_fail_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SALES_CRM__LOGGING__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_seed_enabled_without_password_is_invalid() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SALES_CRM__SEED__ENABLED", "true");
        env::set_var("SALES_CRM__SEED__ADMIN_EMAIL", "admin@crm.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.seed.enabled);
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("SEED__ADMIN_PASSWORD"))
        );
    }
}
