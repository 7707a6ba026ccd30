//! FetchClientsHandler - Query handler listing a sales rep's clients.

use std::sync::Arc;

use crate::application::authorization::{load_executor, require_rep_or_manager};
use crate::application::CrmError;
use crate::domain::client::Client;
use crate::domain::foundation::{right, Either, Page, SalespersonId};
use crate::ports::{ClientsRepository, SalespersonsRepository};

#[derive(Debug, Clone)]
pub struct FetchClientsQuery {
    pub executor_id: SalespersonId,
    pub sales_rep_id: SalespersonId,
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchClientsResult {
    pub clients: Vec<Client>,
}

pub struct FetchClientsHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    clients: Arc<dyn ClientsRepository>,
}

impl FetchClientsHandler {
    pub fn new(
        salespersons: Arc<dyn SalespersonsRepository>,
        clients: Arc<dyn ClientsRepository>,
    ) -> Self {
        Self {
            salespersons,
            clients,
        }
    }

    pub async fn handle(&self, query: FetchClientsQuery) -> Either<CrmError, FetchClientsResult> {
        let executor = load_executor(self.salespersons.as_ref(), &query.executor_id).await?;
        require_rep_or_manager(&executor, &query.sales_rep_id)?;

        let clients = self
            .clients
            .find_many_by_sales_rep_id(&query.sales_rep_id, query.page)
            .await?;
        right(FetchClientsResult { clients })
    }
}
