//! Deterministic cryptography doubles.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::{Encrypter, HashComparer, HashGenerator, TokenClaims};

/// Hashes by appending `-hashed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeHasher;

#[async_trait]
impl HashGenerator for FakeHasher {
    async fn hash(&self, plain: &str) -> Result<String, DomainError> {
        Ok(format!("{}-hashed", plain))
    }
}

#[async_trait]
impl HashComparer for FakeHasher {
    async fn compare(&self, plain: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(format!("{}-hashed", plain) == hash)
    }
}

/// Produces `token-<sub>-<role>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeEncrypter;

#[async_trait]
impl Encrypter for FakeEncrypter {
    async fn encrypt(&self, claims: &TokenClaims) -> Result<String, DomainError> {
        Ok(format!("token-{}-{}", claims.sub, claims.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SalespersonId;
    use crate::domain::salesperson::SalespersonRole;

    #[tokio::test]
    async fn fake_hash_round_trip() {
        let hash = FakeHasher.hash("pw").await.unwrap();
        assert_eq!(hash, "pw-hashed");
        assert!(FakeHasher.compare("pw", &hash).await.unwrap());
        assert!(!FakeHasher.compare("other", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn fake_token_embeds_subject_and_role() {
        let sub = SalespersonId::new();
        let token = FakeEncrypter
            .encrypt(&TokenClaims {
                sub,
                role: SalespersonRole::Salesperson,
            })
            .await
            .unwrap();
        assert_eq!(token, format!("token-{}-salesperson", sub));
    }
}
