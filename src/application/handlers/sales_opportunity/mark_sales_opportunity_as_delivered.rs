//! MarkSalesOpportunityAsDeliveredHandler - Command handler for closing won deals.

use std::sync::Arc;

use tracing::info;

use super::load_opportunity;
use crate::application::authorization::{load_executor, require_rep_or_manager};
use crate::application::events::DomainEvents;
use crate::application::CrmError;
use crate::domain::foundation::{
    right, Either, Entity, OwnedBySalesRep, SalesOpportunityId, SalespersonId,
};
use crate::domain::sales_opportunity::SalesOpportunity;
use crate::ports::{SalesOpportunitiesRepository, SalespersonsRepository};

#[derive(Debug, Clone)]
pub struct MarkSalesOpportunityAsDeliveredCommand {
    pub executor_id: SalespersonId,
    pub sales_opportunity_id: SalesOpportunityId,

    /// Proof-of-delivery photo; must not be blank.
    pub delivery_photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSalesOpportunityAsDeliveredResult {
    pub sales_opportunity: SalesOpportunity,
}

pub struct MarkSalesOpportunityAsDeliveredHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    opportunities: Arc<dyn SalesOpportunitiesRepository>,
    events: Arc<DomainEvents>,
}

impl MarkSalesOpportunityAsDeliveredHandler {
    pub fn new(
        salespersons: Arc<dyn SalespersonsRepository>,
        opportunities: Arc<dyn SalesOpportunitiesRepository>,
        events: Arc<DomainEvents>,
    ) -> Self {
        Self {
            salespersons,
            opportunities,
            events,
        }
    }

    pub async fn handle(
        &self,
        cmd: MarkSalesOpportunityAsDeliveredCommand,
    ) -> Either<CrmError, MarkSalesOpportunityAsDeliveredResult> {
        // 1. Load and authorize
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        let mut sales_opportunity =
            load_opportunity(self.opportunities.as_ref(), &cmd.sales_opportunity_id).await?;
        require_rep_or_manager(&executor, &sales_opportunity.sales_rep_id())?;

        // 2. Transition; nothing is stored on failure
        sales_opportunity.mark_as_delivered(cmd.delivery_photo_url)?;

        // 3. Persist, then publish
        self.opportunities.save(&sales_opportunity).await?;
        self.events.publish(&mut sales_opportunity).await;

        info!(
            sales_opportunity_id = %sales_opportunity.id(),
            "sales opportunity marked as delivered"
        );
        right(MarkSalesOpportunityAsDeliveredResult { sales_opportunity })
    }
}
