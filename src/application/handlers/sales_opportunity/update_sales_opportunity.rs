//! UpdateSalesOpportunityHandler - Command handler for editing deals.

use std::sync::Arc;

use tracing::info;

use super::load_opportunity;
use crate::application::authorization::{load_executor, require_rep_or_manager};
use crate::application::events::DomainEvents;
use crate::application::CrmError;
use crate::domain::foundation::{
    right, Either, Entity, OwnedBySalesRep, SalesOpportunityId, SalespersonId,
};
use crate::domain::sales_opportunity::{SalesOpportunity, SalesOpportunityStatus};
use crate::ports::{SalesOpportunitiesRepository, SalespersonsRepository};

/// Command replacing a deal's details, value and status.
///
/// The status is applied as given; use the mark-as-lost and
/// mark-as-delivered handlers for guarded transitions.
#[derive(Debug, Clone)]
pub struct UpdateSalesOpportunityCommand {
    pub executor_id: SalespersonId,
    pub sales_opportunity_id: SalesOpportunityId,
    pub title: String,
    pub description: String,
    pub value: f64,
    pub status: SalesOpportunityStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSalesOpportunityResult {
    pub sales_opportunity: SalesOpportunity,
}

pub struct UpdateSalesOpportunityHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    opportunities: Arc<dyn SalesOpportunitiesRepository>,
    events: Arc<DomainEvents>,
}

impl UpdateSalesOpportunityHandler {
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
        cmd: UpdateSalesOpportunityCommand,
    ) -> Either<CrmError, UpdateSalesOpportunityResult> {
        // 1. Load and authorize
        let executor = load_executor(self.salespersons.as_ref(), &cmd.executor_id).await?;
        let mut sales_opportunity =
            load_opportunity(self.opportunities.as_ref(), &cmd.sales_opportunity_id).await?;
        require_rep_or_manager(&executor, &sales_opportunity.sales_rep_id())?;

        // 2. Apply (value before status keeps event order stable)
        sales_opportunity.update_title(cmd.title);
        sales_opportunity.update_description(cmd.description);
        sales_opportunity.update_value(cmd.value);
        sales_opportunity.update_status(cmd.status);

        // 3. Persist, then publish
        self.opportunities.save(&sales_opportunity).await?;
        let report = self.events.publish(&mut sales_opportunity).await;

        info!(
            sales_opportunity_id = %sales_opportunity.id(),
            status = %sales_opportunity.status(),
            value = sales_opportunity.value(),
            events = report.events,
            "sales opportunity updated"
        );
        right(UpdateSalesOpportunityResult { sales_opportunity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemorySalesOpportunitiesRepository, InMemorySalespersonsRepository,
    };
    use crate::domain::events::EventKind;
    use crate::domain::salesperson::Salesperson;
    use crate::test_support::{manager, opportunity_for, record_events, salesperson};

    struct Fixture {
        handler: UpdateSalesOpportunityHandler,
        opportunities: Arc<InMemorySalesOpportunitiesRepository>,
        events: Arc<DomainEvents>,
    }

    fn fixture(people: Vec<Salesperson>, deals: Vec<SalesOpportunity>) -> Fixture {
        let opportunities = Arc::new(InMemorySalesOpportunitiesRepository::with(deals));
        let events = Arc::new(DomainEvents::new());
        let handler = UpdateSalesOpportunityHandler::new(
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

    fn command(
        executor_id: SalespersonId,
        deal: &SalesOpportunity,
        value: f64,
        status: SalesOpportunityStatus,
    ) -> UpdateSalesOpportunityCommand {
        UpdateSalesOpportunityCommand {
            executor_id,
            sales_opportunity_id: deal.id(),
            title: "Updated title".to_string(),
            description: "Updated description".to_string(),
            value,
            status,
        }
    }

    #[tokio::test]
    async fn high_value_and_status_change_publish_in_raise_order() {
        let rep = salesperson();
        let deal = opportunity_for(rep.id());
        let f = fixture(vec![rep.clone()], vec![deal.clone()]);
        let log = record_events(&f.events);

        f.handler
            .handle(command(rep.id(), &deal, 15_000.0, SalesOpportunityStatus::InProgress))
            .await
            .unwrap();

        assert_eq!(
            log.kinds(),
            vec![
                EventKind::SalesOpportunityHighValue,
                EventKind::SalesOpportunityStatusUpdated
            ]
        );
        let stored = f.opportunities.find_by_id(&deal.id()).await.unwrap().unwrap();
        assert_eq!(stored.value(), 15_000.0);
        assert_eq!(stored.status(), SalesOpportunityStatus::InProgress);
        assert_eq!(stored.title(), "Updated title");
    }

    #[tokio::test]
    async fn unchanged_value_and_status_publish_nothing() {
        let rep = salesperson();
        let deal = opportunity_for(rep.id());
        let f = fixture(vec![rep.clone()], vec![deal.clone()]);
        let log = record_events(&f.events);

        f.handler
            .handle(command(rep.id(), &deal, deal.value(), deal.status()))
            .await
            .unwrap();

        assert!(log.kinds().is_empty());
    }

    #[tokio::test]
    async fn manager_may_update_any_deal() {
        let boss = manager();
        let deal = opportunity_for(SalespersonId::new());
        let f = fixture(vec![boss.clone()], vec![deal.clone()]);

        let result = f
            .handler
            .handle(command(boss.id(), &deal, 10.0, SalesOpportunityStatus::Won))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn other_rep_is_not_allowed() {
        let rep = salesperson();
        let deal = opportunity_for(SalespersonId::new());
        let f = fixture(vec![rep.clone()], vec![deal.clone()]);

        let result = f
            .handler
            .handle(command(rep.id(), &deal, 10.0, SalesOpportunityStatus::Won))
            .await;
        assert_eq!(result, Err(CrmError::NotAllowed));
    }

    #[tokio::test]
    async fn unknown_deal_is_not_found() {
        let rep = salesperson();
        let f = fixture(vec![rep.clone()], vec![]);

        let result = f
            .handler
            .handle(command(
                rep.id(),
                &opportunity_for(rep.id()),
                10.0,
                SalesOpportunityStatus::Open,
            ))
            .await;
        assert_eq!(result, Err(CrmError::SalesOpportunityNotFound));
    }
}
