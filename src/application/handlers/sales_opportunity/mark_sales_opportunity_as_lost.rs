//! MarkSalesOpportunityAsLostHandler - Command handler for losing deals.

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
pub struct MarkSalesOpportunityAsLostCommand {
    pub executor_id: SalespersonId,
    pub sales_opportunity_id: SalesOpportunityId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSalesOpportunityAsLostResult {
    pub sales_opportunity: SalesOpportunity,
}

pub struct MarkSalesOpportunityAsLostHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    opportunities: Arc<dyn SalesOpportunitiesRepository>,
    events: Arc<DomainEvents>,
}

impl MarkSalesOpportunityAsLostHandler {
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
        cmd: MarkSalesOpportunityAsLostCommand,
    ) -> Either<CrmError, MarkSalesOpportunityAsLostResult> {
        // 1. Load and authorize
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        let mut sales_opportunity =
            load_opportunity(self.opportunities.as_ref(), &cmd.sales_opportunity_id).await?;
        require_rep_or_manager(&executor, &sales_opportunity.sales_rep_id())?;

        // 2. Transition; nothing is stored on failure
        sales_opportunity.mark_as_lost()?;

        // 3. Persist, then publish
        self.opportunities.save(&sales_opportunity).await?;
        self.events.publish(&mut sales_opportunity).await;

        info!(sales_opportunity_id = %sales_opportunity.id(), "sales opportunity marked as lost");
        right(MarkSalesOpportunityAsLostResult { sales_opportunity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemorySalesOpportunitiesRepository, InMemorySalespersonsRepository,
    };
    use crate::domain::events::EventKind;
    use crate::domain::sales_opportunity::SalesOpportunityStatus;
    use crate::domain::salesperson::Salesperson;
    use crate::test_support::{opportunity_in, record_events, salesperson};

    struct Fixture {
        handler: MarkSalesOpportunityAsLostHandler,
        opportunities: Arc<InMemorySalesOpportunitiesRepository>,
        events: Arc<DomainEvents>,
    }

    fn fixture(people: Vec<Salesperson>, deals: Vec<SalesOpportunity>) -> Fixture {
        let opportunities = Arc::new(InMemorySalesOpportunitiesRepository::with(deals));
        let events = Arc::new(DomainEvents::new());
        let handler = MarkSalesOpportunityAsLostHandler::new(
            Arc::new(InMemorySalespersonsRepository::with(people)),
            opportunities.clone(),
            events.clone(),
        );
        Fixture {
            handler,
            opportunities,
            events,
        }
    }

    #[tokio::test]
    async fn in_progress_deal_is_lost_and_published() {
        let rep = salesperson();
        let deal = opportunity_in(rep.id(), SalesOpportunityStatus::InProgress);
        let f = fixture(vec![rep.clone()], vec![deal.clone()]);
        let log = record_events(&f.events);

        f.handler
            .handle(MarkSalesOpportunityAsLostCommand {
                executor_id: rep.id(),
                sales_opportunity_id: deal.id(),
            })
            .await
            .unwrap();

        let stored = f.opportunities.find_by_id(&deal.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SalesOpportunityStatus::Lost);
        assert_eq!(log.kinds(), vec![EventKind::SalesOpportunityLost]);
    }

    #[tokio::test]
    async fn won_deal_cannot_be_lost_and_is_left_untouched() {
        let rep = salesperson();
        let deal = opportunity_in(rep.id(), SalesOpportunityStatus::Won);
        let f = fixture(vec![rep.clone()], vec![deal.clone()]);
        let log = record_events(&f.events);

        let result = f
            .handler
            .handle(MarkSalesOpportunityAsLostCommand {
                executor_id: rep.id(),
                sales_opportunity_id: deal.id(),
            })
            .await;

        assert_eq!(
            result,
            Err(CrmError::CantMarkSalesOpportunityAsLost {
                status: SalesOpportunityStatus::Won
            })
        );
        let stored = f.opportunities.find_by_id(&deal.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SalesOpportunityStatus::Won);
        assert!(log.kinds().is_empty());
    }

    #[tokio::test]
    async fn other_rep_is_not_allowed() {
        let rep = salesperson();
        let deal = opportunity_in(SalespersonId::new(), SalesOpportunityStatus::Open);
        let f = fixture(vec![rep.clone()], vec![deal.clone()]);

        let result = f
            .handler
            .handle(MarkSalesOpportunityAsLostCommand {
                executor_id: rep.id(),
                sales_opportunity_id: deal.id(),
            })
            .await;
        assert_eq!(result, Err(CrmError::NotAllowed));
    }
}
