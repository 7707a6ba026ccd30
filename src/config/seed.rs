//! Startup seed configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Initial manager account created at startup
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Create the admin account if it does not exist
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_admin_name")]
    pub admin_name: String,

    #[serde(default)]
    pub admin_email: String,

    pub admin_password: Option<SecretString>,

    #[serde(default)]
    pub admin_phone: String,
}

impl SeedConfig {
    /// Validate seed configuration. Only checked when seeding is enabled.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if self.admin_email.is_empty() {
            return Err(ValidationError::MissingRequired("SEED__ADMIN_EMAIL"));
        }
        if !self.admin_email.contains('@') {
            return Err(ValidationError::InvalidSeedEmail);
        }
        match &self.admin_password {
            Some(password) if !password.expose_secret().is_empty() => Ok(()),
            _ => Err(ValidationError::MissingRequired("SEED__ADMIN_PASSWORD")),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            admin_name: default_admin_name(),
            admin_email: String::new(),
            admin_password: None,
            admin_phone: String::new(),
        }
    }
}

fn default_admin_name() -> String {
    "Admin".to_string()
}
