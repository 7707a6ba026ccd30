//! RegisterClientHandler - Command handler for registering clients.

use std::sync::Arc;

use tracing::info;

use crate::application::authorization::{load_executor, load_salesperson, require_rep_or_manager};
use crate::application::events::DomainEvents;
use crate::application::CrmError;
use crate::domain::client::Client;
use crate::domain::foundation::{left, right, Either, Entity, SalespersonId};
use crate::ports::{ClientsRepository, SalespersonsRepository};

/// Command to register a client for a sales rep.
#[derive(Debug, Clone)]
pub struct RegisterClientCommand {
    pub executor_id: SalespersonId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub segment: String,
    pub sales_rep_id: SalespersonId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterClientResult {
    pub client: Client,
}

/// Handler for registering clients.
pub struct RegisterClientHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    clients: Arc<dyn ClientsRepository>,
    events: Arc<DomainEvents>,
}

impl RegisterClientHandler {
    pub fn new(
        salespersons: Arc<dyn SalespersonsRepository>,
        clients: Arc<dyn ClientsRepository>,
        events: Arc<DomainEvents>,
    ) -> Self {
        Self {
            salespersons,
            clients,
            events,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterClientCommand,
    ) -> Either<CrmError, RegisterClientResult> {
        // 1. Authorize against the requested rep
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        require_rep_or_manager(&executor, &cmd.sales_rep_id)?;

        // 2. A manager may assign someone else, who must exist
        if cmd.sales_rep_id != executor.id() {
            load_salesperson(self.salespersons.as_ref(), &cmd.sales_rep_id).await?;
        }

        // 3. Email must be free
        if self.clients.find_by_email(&cmd.email).await?.is_some() {
            return left(CrmError::ClientAlreadyExists { email: cmd.email });
        }

        // 4. Create, persist, publish
        let mut client = Client::new(
            cmd.name,
            cmd.email,
            cmd.phone,
            cmd.segment,
            cmd.sales_rep_id,
            Some(executor.id()),
        );
        self.clients.create(&client).await?;
        self.events.publish(&mut client).await;

        info!(
            client_id = %client.id(),
            sales_rep_id = %cmd.sales_rep_id,
            creator_id = %executor.id(),
            "client registered"
        );
        right(RegisterClientResult { client })
    }
}
