//! AuthenticateSalespersonHandler - Exchanges credentials for an access token.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::CrmError;
use crate::domain::foundation::{left, right, Either, Entity};
use crate::ports::{Encrypter, HashComparer, SalespersonsRepository, TokenClaims};

/// Command carrying login credentials.
#[derive(Clone)]
pub struct AuthenticateSalespersonCommand {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AuthenticateSalespersonCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticateSalespersonCommand")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticateSalespersonResult {
    pub access_token: String,
}

/// Public use case: no executor is involved.
pub struct AuthenticateSalespersonHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    hash_comparer: Arc<dyn HashComparer>,
    encrypter: Arc<dyn Encrypter>,
}

impl AuthenticateSalespersonHandler {
    pub fn new(
        salespersons: Arc<dyn SalespersonsRepository>,
        hash_comparer: Arc<dyn HashComparer>,
        encrypter: Arc<dyn Encrypter>,
    ) -> Self {
        Self {
            salespersons,
            hash_comparer,
            encrypter,
        }
    }

    pub async fn handle(
        &self,
        cmd: AuthenticateSalespersonCommand,
    ) -> Either<CrmError, AuthenticateSalespersonResult> {
        // 1. Find account
        let Some(salesperson) = self.salespersons.find_by_email(&cmd.email).await? else {
            debug!("authentication failed: unknown email");
            return left(CrmError::SalespersonNotFound);
        };

        // 2. Credentials before activity
        let matches = self
            .hash_comparer
            .compare(&cmd.password, salesperson.password_hash())
            .await?;
        if !matches {
            debug!(salesperson_id = %salesperson.id(), "authentication failed: wrong password");
            return left(CrmError::WrongCredentials);
        }

        // 3. Activity
        if !salesperson.is_active() {
            debug!(salesperson_id = %salesperson.id(), "authentication failed: inactive account");
            return left(CrmError::SalespersonDeactive {
                salesperson_id: salesperson.id(),
            });
        }

        // 4. Mint token
        let access_token = self
            .encrypter
            .encrypt(&TokenClaims {
                sub: salesperson.id(),
                role: salesperson.role(),
            })
            .await?;

        info!(salesperson_id = %salesperson.id(), "salesperson authenticated");
        right(AuthenticateSalespersonResult { access_token })
    }
}
