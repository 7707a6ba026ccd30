//! GetClientByIdHandler - Query handler for one client.

use std::sync::Arc;

use super::load_client;
use crate::application::authorization::{load_executor, require_rep_or_manager};
use crate::application::CrmError;
use crate::domain::client::Client;
use crate::domain::foundation::{right, ClientId, Either, OwnedBySalesRep, SalespersonId};
use crate::ports::{ClientsRepository, SalespersonsRepository};

#[derive(Debug, Clone)]
pub struct GetClientByIdQuery {
    pub executor_id: SalespersonId,
    pub client_id: ClientId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetClientByIdResult {
    pub client: Client,
}

pub struct GetClientByIdHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    clients: Arc<dyn ClientsRepository>,
}

impl GetClientByIdHandler {
    pub fn new(
        salespersons: Arc<dyn SalespersonsRepository>,
        clients: Arc<dyn ClientsRepository>,
    ) -> Self {
        Self {
            salespersons,
            clients,
        }
    }

    pub async fn handle(&self, query: GetClientByIdQuery) -> Either<CrmError, GetClientByIdResult> {
        let executor = load_executor(self.salespersons.as_ref(), &query.executor_id).await?;
        let client = load_client(self.clients.as_ref(), &query.client_id).await?;
        require_rep_or_manager(&executor, &client.sales_rep_id())?;

        right(GetClientByIdResult { client })
    }
}
