//! InactivateSalespersonHandler - Command handler for disabling accounts.

use std::sync::Arc;

use tracing::info;

use crate::application::authorization::{load_executor, load_salesperson, require_manager};
use crate::application::events::DomainEvents;
use crate::application::CrmError;
use crate::domain::foundation::{right, Either, Entity, SalespersonId};
use crate::domain::salesperson::Salesperson;
use crate::ports::SalespersonsRepository;

#[derive(Debug, Clone)]
pub struct InactivateSalespersonCommand {
    pub executor_id: SalespersonId,
    pub salesperson_id: SalespersonId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InactivateSalespersonResult {
    pub salesperson: Salesperson,
}

/// Handler for inactivating salespersons. Manager-only.
pub struct InactivateSalespersonHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    events: Arc<DomainEvents>,
}

impl InactivateSalespersonHandler {
    pub fn new(salespersons: Arc<dyn SalespersonsRepository>, events: Arc<DomainEvents>) -> Self {
        Self {
            salespersons,
            events,
        }
    }

    pub async fn handle(
        &self,
        cmd: InactivateSalespersonCommand,
    ) -> Either<CrmError, InactivateSalespersonResult> {
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        require_manager(&executor)?;

        let mut salesperson =
            load_salesperson(self.salespersons.as_ref(), &cmd.salesperson_id).await?;
        salesperson.deactivate();

        self.salespersons.save(&salesperson).await?;
        self.events.publish(&mut salesperson).await;

        info!(
            salesperson_id = %salesperson.id(),
            executor_id = %executor.id(),
            "salesperson inactivated"
        );
        right(InactivateSalespersonResult { salesperson })
    }
}
