//! UpdateClientHandler - Command handler for editing clients.

use std::sync::Arc;

use tracing::info;

use super::load_client;
use crate::application::authorization::{load_executor, load_salesperson, require_rep_or_manager};
use crate::application::events::DomainEvents;
use crate::application::CrmError;
use crate::domain::client::Client;
use crate::domain::foundation::{left, right, ClientId, Either, Entity, OwnedBySalesRep, SalespersonId};
use crate::ports::{ClientsRepository, SalespersonsRepository};

/// Command replacing a client's details and owner.
#[derive(Debug, Clone)]
pub struct UpdateClientCommand {
    pub executor_id: SalespersonId,
    pub client_id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub segment: String,
    pub sales_rep_id: SalespersonId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateClientResult {
    pub client: Client,
}

pub struct UpdateClientHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    clients: Arc<dyn ClientsRepository>,
    events: Arc<DomainEvents>,
}

impl UpdateClientHandler {
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

    pub async fn handle(&self, cmd: UpdateClientCommand) -> Either<CrmError, UpdateClientResult> {
        // 1. Executor, client, new rep
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        let mut client = load_client(self.clients.as_ref(), &cmd.client_id).await?;
        load_salesperson(self.salespersons.as_ref(), &cmd.sales_rep_id).await?;

        // 2. Authorize against the current owner
        require_rep_or_manager(&executor, &client.sales_rep_id())?;

        // 3. Email may only collide with this client
        if let Some(owner) = self.clients.find_by_email(&cmd.email).await? {
            if owner.id() != client.id() {
                return left(CrmError::ClientAlreadyExists { email: cmd.email });
            }
        }

        // 4. Apply, persist, publish
        let previous_rep = client.sales_rep_id();
        client.update_name(cmd.name);
        client.update_email(cmd.email);
        client.update_phone(cmd.phone);
        client.update_segment(cmd.segment);
        client.update_sales_rep_id(cmd.sales_rep_id);

        self.clients.save(&client).await?;
        self.events.publish(&mut client).await;

        info!(
            client_id = %client.id(),
            previous_rep = %previous_rep,
            sales_rep_id = %client.sales_rep_id(),
            "client updated"
        );
        right(UpdateClientResult { client })
    }
}
