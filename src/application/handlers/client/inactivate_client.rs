//! InactivateClientHandler - Command handler for inactivating clients.

use std::sync::Arc;

use tracing::info;

use super::load_client;
use crate::application::authorization::{load_executor, require_rep_or_manager};
use crate::application::events::DomainEvents;
use crate::application::CrmError;
use crate::domain::client::Client;
use crate::domain::foundation::{right, ClientId, Either, Entity, OwnedBySalesRep, SalespersonId};
use crate::ports::{ClientsRepository, SalespersonsRepository};

#[derive(Debug, Clone)]
pub struct InactivateClientCommand {
    pub executor_id: SalespersonId,
    pub client_id: ClientId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InactivateClientResult {
    pub client: Client,
}

pub struct InactivateClientHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    clients: Arc<dyn ClientsRepository>,
    events: Arc<DomainEvents>,
}

impl InactivateClientHandler {
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
        cmd: InactivateClientCommand,
    ) -> Either<CrmError, InactivateClientResult> {
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        let mut client = load_client(self.clients.as_ref(), &cmd.client_id).await?;
        require_rep_or_manager(&executor, &client.sales_rep_id())?;

        client.inactivate();
        self.clients.save(&client).await?;
        self.events.publish(&mut client).await;

        info!(client_id = %client.id(), executor_id = %executor.id(), "client inactivated");
        right(InactivateClientResult { client })
    }
}
