//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::logging::Environment;

/// Shortest JWT secret accepted in production (HS256 key size).
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Longest access-token lifetime: one week.
pub const MAX_TOKEN_TTL_SECS: u64 = 604_800;

/// Access-token and password-hashing configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: SecretString,

    /// Access-token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// `iss` claim written into and required from tokens
    #[serde(default)]
    pub issuer: Option<String>,

    /// Server-side key mixed into every password hash
    pub password_pepper: SecretString,
}

impl AuthConfig {
    /// Get token TTL as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate authentication configuration
    ///
    /// In production, the JWT secret must be at least
    /// [`MIN_PRODUCTION_SECRET_LEN`] bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort {
                min: MIN_PRODUCTION_SECRET_LEN,
            });
        }
        if self.password_pepper.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__PASSWORD_PEPPER"));
        }
        if self.token_ttl_secs == 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ValidationError::InvalidTokenTtl {
                max: MAX_TOKEN_TTL_SECS,
            });
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            token_ttl_secs: default_token_ttl(),
            issuer: None,
            password_pepper: SecretString::new(String::new()),
        }
    }
}

fn default_token_ttl() -> u64 {
    86_400
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AuthConfig {
        AuthConfig {
            jwt_secret: SecretString::new("x".repeat(MIN_PRODUCTION_SECRET_LEN)),
            password_pepper: SecretString::new("pepper".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_secs, 86_400);
        assert_eq!(config.token_ttl(), Duration::from_secs(86_400));
        assert!(config.issuer.is_none());
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = AuthConfig::default();
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn test_validation_missing_pepper() {
        let config = AuthConfig {
            password_pepper: SecretString::new(String::new()),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__PASSWORD_PEPPER"))
        );
    }

    #[test]
    fn test_validation_short_secret_only_rejected_in_production() {
        let config = AuthConfig {
            jwt_secret: SecretString::new("short".to_string()),
            ..valid()
        };
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn test_validation_token_ttl_bounds() {
        for ttl in [0, MAX_TOKEN_TTL_SECS + 1] {
            let config = AuthConfig {
                token_ttl_secs: ttl,
                ..valid()
            };
            assert!(config.validate(&Environment::Development).is_err());
        }
        let config = AuthConfig {
            token_ttl_secs: MAX_TOKEN_TTL_SECS,
            ..valid()
        };
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let out = format!("{:?}", valid());
        assert!(!out.contains(&"x".repeat(MIN_PRODUCTION_SECRET_LEN)));
        assert!(!out.contains("pepper\""));
    }
}
