//! UpdateSalespersonHandler - Command handler for editing salesperson accounts.

use std::sync::Arc;

use tracing::info;

use crate::application::authorization::{load_executor, load_salesperson, require_manager};
use crate::application::events::DomainEvents;
use crate::application::CrmError;
use crate::domain::foundation::{left, right, Either, Entity, SalespersonId};
use crate::domain::salesperson::{Salesperson, SalespersonRole};
use crate::ports::SalespersonsRepository;

/// Command replacing a salesperson's profile and role.
#[derive(Debug, Clone)]
pub struct UpdateSalespersonCommand {
    pub executor_id: SalespersonId,
    pub salesperson_id: SalespersonId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: SalespersonRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSalespersonResult {
    pub salesperson: Salesperson,
}

/// Handler for updating salespersons. Manager-only.
pub struct UpdateSalespersonHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    events: Arc<DomainEvents>,
}

impl UpdateSalespersonHandler {
    pub fn new(salespersons: Arc<dyn SalespersonsRepository>, events: Arc<DomainEvents>) -> Self {
        Self {
            salespersons,
            events,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSalespersonCommand,
    ) -> Either<CrmError, UpdateSalespersonResult> {
        // 1. Authorize
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        require_manager(&executor)?;

        // 2. Load target
        let mut salesperson =
            load_salesperson(self.salespersons.as_ref(), &cmd.salesperson_id).await?;

        // 3. Email may only collide with the target itself
        if let Some(owner) = self.salespersons.find_by_email(&cmd.email).await? {
            if owner.id() != salesperson.id() {
                return left(CrmError::SalespersonAlreadyExists { email: cmd.email });
            }
        }

        // 4. Apply
        salesperson.update_name(cmd.name);
        salesperson.update_email(cmd.email);
        salesperson.update_phone(cmd.phone);
        salesperson.update_role(cmd.role);

        // 5. Persist, then publish
        self.salespersons.save(&salesperson).await?;
        self.events.publish(&mut salesperson).await;

        info!(
            salesperson_id = %salesperson.id(),
            role = %salesperson.role(),
            "salesperson updated"
        );
        right(UpdateSalespersonResult { salesperson })
    }
}
