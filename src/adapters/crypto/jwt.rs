//! HS256 access-token encrypter.

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, SalespersonId, Timestamp};
use crate::domain::salesperson::SalespersonRole;
use crate::ports::{Encrypter, TokenClaims};

/// Registered and private claims written into every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: SalespersonId,
    pub role: SalespersonRole,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Signs access tokens with a shared secret.
pub struct JwtEncrypter {
    secret: SecretString,
    ttl_secs: u64,
    issuer: Option<String>,
}

impl JwtEncrypter {
    pub fn new(secret: SecretString, ttl_secs: u64, issuer: Option<String>) -> Self {
        Self {
            secret,
            ttl_secs,
            issuer,
        }
    }

    /// Verifies a token minted by this encrypter and returns its claims.
    ///
    /// # Errors
    ///
    /// - `CryptographyError` for bad signatures, expired tokens and wrong issuers
    pub fn decode(&self, token: &str) -> Result<AccessTokenClaims, DomainError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }

        let key = DecodingKey::from_secret(self.secret.expose_secret().as_bytes());
        decode::<AccessTokenClaims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "access token rejected");
                DomainError::cryptography(format!("invalid access token: {}", e))
            })
    }
}

impl std::fmt::Debug for JwtEncrypter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncrypter")
            .field("secret", &"[REDACTED]")
            .field("ttl_secs", &self.ttl_secs)
            .field("issuer", &self.issuer)
            .finish()
    }
}

#[async_trait]
impl Encrypter for JwtEncrypter {
    async fn encrypt(&self, claims: &TokenClaims) -> Result<String, DomainError> {
        let issued_at = Timestamp::now();
        let token_claims = AccessTokenClaims {
            sub: claims.sub,
            role: claims.role,
            iat: issued_at.as_unix_secs(),
            exp: issued_at.plus_secs(self.ttl_secs).as_unix_secs(),
            iss: self.issuer.clone(),
        };

        let key = EncodingKey::from_secret(self.secret.expose_secret().as_bytes());
        encode(&Header::new(Algorithm::HS256), &token_claims, &key)
            .map_err(|e| DomainError::cryptography(format!("cannot sign access token: {}", e)))
    }
}
