//! RegisterSalesOpportunityHandler - Command handler for opening deals.

use std::sync::Arc;

use tracing::info;

use crate::application::authorization::{load_executor, load_salesperson, require_rep_or_manager};
use crate::application::events::DomainEvents;
use crate::application::CrmError;
use crate::domain::foundation::{right, ClientId, Either, Entity, OwnedBySalesRep, SalespersonId};
use crate::domain::sales_opportunity::SalesOpportunity;
use crate::ports::{ClientsRepository, SalesOpportunitiesRepository, SalespersonsRepository};

/// Command to open a sales opportunity for a client.
#[derive(Debug, Clone)]
pub struct RegisterSalesOpportunityCommand {
    pub executor_id: SalespersonId,
    pub client_id: ClientId,

    /// Owner of the deal; the client's rep when `None`.
    pub sales_rep_id: Option<SalespersonId>,

    pub title: String,
    pub description: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSalesOpportunityResult {
    pub sales_opportunity: SalesOpportunity,
}

pub struct RegisterSalesOpportunityHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    clients: Arc<dyn ClientsRepository>,
    opportunities: Arc<dyn SalesOpportunitiesRepository>,
    events: Arc<DomainEvents>,
}

impl RegisterSalesOpportunityHandler {
    pub fn new(
        salespersons: Arc<dyn SalespersonsRepository>,
        clients: Arc<dyn ClientsRepository>,
        opportunities: Arc<dyn SalesOpportunitiesRepository>,
        events: Arc<DomainEvents>,
    ) -> Self {
        Self {
            salespersons,
            clients,
            opportunities,
            events,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterSalesOpportunityCommand,
    ) -> Either<CrmError, RegisterSalesOpportunityResult> {
        // 1. Executor and client
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        let client = self
            .clients
            .find_by_id(&cmd.client_id)
            .await?
            .ok_or(CrmError::ClientNotFound)?;

        // 2. Authorize against the client's rep
        require_rep_or_manager(&executor, &client.sales_rep_id())?;

        // 3. Resolve the deal owner
        let sales_rep_id = match cmd.sales_rep_id {
            Some(id) if id != client.sales_rep_id() => {
                load_salesperson(self.salespersons.as_ref(), &id).await?.id()
            }
            _ => client.sales_rep_id(),
        };

        // 4. Create, persist, publish
        let mut sales_opportunity = SalesOpportunity::new(
            executor.id(),
            client.id(),
            sales_rep_id,
            cmd.title,
            cmd.description,
            cmd.value,
        );
        self.opportunities.create(&sales_opportunity).await?;
        self.events.publish(&mut sales_opportunity).await;

        info!(
            sales_opportunity_id = %sales_opportunity.id(),
            client_id = %client.id(),
            sales_rep_id = %sales_rep_id,
            "sales opportunity registered"
        );
        right(RegisterSalesOpportunityResult { sales_opportunity })
    }
}
