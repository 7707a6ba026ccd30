//! Peppered HMAC-SHA256 password hashing.
//!
//! Stored format: `hmac-sha256$<salt-hex>$<digest-hex>`, where the digest is
//! `HMAC-SHA256(key = pepper, message = salt || password)`. The salt is a
//! fresh random UUID per hash, so equal passwords never share a hash.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use super::hex_encode;
use crate::domain::foundation::DomainError;
use crate::ports::{HashComparer, HashGenerator};

type HmacSha256 = Hmac<Sha256>;

const SCHEME: &str = "hmac-sha256";

/// Password hasher keyed with a server-side pepper.
pub struct HmacPasswordHasher {
    pepper: SecretString,
}

impl HmacPasswordHasher {
    pub fn new(pepper: SecretString) -> Self {
        Self { pepper }
    }

    fn digest(&self, salt: &str, plain: &str) -> Result<String, DomainError> {
        let mut mac = HmacSha256::new_from_slice(self.pepper.expose_secret().as_bytes())
            .map_err(|e| DomainError::cryptography(format!("invalid pepper: {}", e)))?;
        mac.update(salt.as_bytes());
        mac.update(plain.as_bytes());
        Ok(hex_encode(&mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for HmacPasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacPasswordHasher")
            .field("pepper", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl HashGenerator for HmacPasswordHasher {
    async fn hash(&self, plain: &str) -> Result<String, DomainError> {
        let salt = hex_encode(Uuid::new_v4().as_bytes());
        let digest = self.digest(&salt, plain)?;
        Ok(format!("{}${}${}", SCHEME, salt, digest))
    }
}

#[async_trait]
impl HashComparer for HmacPasswordHasher {
    async fn compare(&self, plain: &str, hash: &str) -> Result<bool, DomainError> {
        let mut parts = hash.splitn(3, '$');
        let (Some(scheme), Some(salt), Some(stored)) = (parts.next(), parts.next(), parts.next())
        else {
            tracing::debug!("malformed password hash");
            return Ok(false);
        };
        if scheme != SCHEME {
            tracing::debug!(scheme, "unknown password hash scheme");
            return Ok(false);
        }

        let expected = self.digest(salt, plain)?;
        Ok(expected.as_bytes().ct_eq(stored.as_bytes()).into())
    }
}
