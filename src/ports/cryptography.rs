//! Cryptography ports - password hashing and access-token issuance.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, SalespersonId};
use crate::domain::salesperson::SalespersonRole;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the authenticated salesperson.
    pub sub: SalespersonId,
    pub role: SalespersonRole,
}

/// Turns a plaintext password into a storable hash.
#[async_trait]
pub trait HashGenerator: Send + Sync {
    async fn hash(&self, plain: &str) -> Result<String, DomainError>;
}

/// Checks a plaintext password against a stored hash.
#[async_trait]
pub trait HashComparer: Send + Sync {
    async fn compare(&self, plain: &str, hash: &str) -> Result<bool, DomainError>;
}

/// Mints a signed access token.
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, claims: &TokenClaims) -> Result<String, DomainError>;
}
