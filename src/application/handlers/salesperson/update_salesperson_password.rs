//! UpdateSalespersonPasswordHandler - Command handler for resetting passwords.

use std::sync::Arc;

use tracing::info;

use crate::application::authorization::{load_executor, load_salesperson, require_manager};
use crate::application::events::DomainEvents;
use crate::application::CrmError;
use crate::domain::foundation::{right, Either, Entity, SalespersonId};
use crate::domain::salesperson::Salesperson;
use crate::ports::{HashGenerator, SalespersonsRepository};

#[derive(Clone)]
pub struct UpdateSalespersonPasswordCommand {
    pub executor_id: SalespersonId,
    pub salesperson_id: SalespersonId,
    pub password: String,
}

impl std::fmt::Debug for UpdateSalespersonPasswordCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateSalespersonPasswordCommand")
            .field("executor_id", &self.executor_id)
            .field("salesperson_id", &self.salesperson_id)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSalespersonPasswordResult {
    pub salesperson: Salesperson,
}

/// Handler for password resets. Manager-only.
pub struct UpdateSalespersonPasswordHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    hash_generator: Arc<dyn HashGenerator>,
    events: Arc<DomainEvents>,
}

impl UpdateSalespersonPasswordHandler {
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
        cmd: UpdateSalespersonPasswordCommand,
    ) -> Either<CrmError, UpdateSalespersonPasswordResult> {
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        require_manager(&executor)?;

        let mut salesperson =
            load_salesperson(self.salespersons.as_ref(), &cmd.salesperson_id).await?;

        let password_hash = self.hash_generator.hash(&cmd.password).await?;
        salesperson.update_password_hash(password_hash);

        self.salespersons.save(&salesperson).await?;
        self.events.publish(&mut salesperson).await;

        info!(salesperson_id = %salesperson.id(), "salesperson password updated");
        right(UpdateSalespersonPasswordResult { salesperson })
    }
}
