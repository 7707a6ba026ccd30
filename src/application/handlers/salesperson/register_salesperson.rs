//! RegisterSalespersonHandler - Command handler for creating salesperson accounts.

use std::sync::Arc;

use tracing::info;

use crate::application::authorization::{load_executor, require_manager};
use crate::application::events::DomainEvents;
use crate::application::CrmError;
use crate::domain::foundation::{left, right, Either, Entity, SalespersonId};
use crate::domain::salesperson::{Salesperson, SalespersonRole};
use crate::ports::{HashGenerator, SalespersonsRepository};

/// Command to register a new salesperson.
#[derive(Clone)]
pub struct RegisterSalespersonCommand {
    pub executor_id: SalespersonId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

impl std::fmt::Debug for RegisterSalespersonCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterSalespersonCommand")
            .field("executor_id", &self.executor_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("phone", &self.phone)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSalespersonResult {
    pub salesperson: Salesperson,
}

/// Handler for registering salespersons. Manager-only.
pub struct RegisterSalespersonHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    hash_generator: Arc<dyn HashGenerator>,
    events: Arc<DomainEvents>,
}

impl RegisterSalespersonHandler {
    pub fn new(
        salespersons: Arc<dyn SalespersonsRepository>,
        hash_generator: Arc<dyn HashGenerator>,
        events: Arc<DomainEvents>,
    ) -> Self {
        Self {
            salespersons,
            hash_generator,
            events,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterSalespersonCommand,
    ) -> Either<CrmError, RegisterSalespersonResult> {
        // 1. Authorize
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        require_manager(&executor)?;

        // 2. Email must be free
        if self.salespersons.find_by_email(&cmd.email).await?.is_some() {
            return left(CrmError::SalespersonAlreadyExists { email: cmd.email });
        }

        // 3. Create
        let password_hash = self.hash_generator.hash(&cmd.password).await?;
        let mut salesperson = Salesperson::new(
            cmd.name,
            cmd.email,
            password_hash,
            cmd.phone,
            SalespersonRole::Salesperson,
        );

        // 4. Persist, then publish
        self.salespersons.create(&salesperson).await?;
        self.events.publish(&mut salesperson).await;

        info!(
            salesperson_id = %salesperson.id(),
            executor_id = %executor.id(),
            "salesperson registered"
        );
        right(RegisterSalespersonResult { salesperson })
    }
}
