//! GetSalesOpportunityByIdHandler - Query handler for one deal.

use std::sync::Arc;

use super::load_opportunity;
use crate::application::authorization::{load_executor, require_rep_or_manager};
use crate::application::CrmError;
use crate::domain::foundation::{right, Either, OwnedBySalesRep, SalesOpportunityId, SalespersonId};
use crate::domain::sales_opportunity::SalesOpportunity;
use crate::ports::{SalesOpportunitiesRepository, SalespersonsRepository};

#[derive(Debug, Clone)]
pub struct GetSalesOpportunityByIdQuery {
    pub executor_id: SalespersonId,
    pub sales_opportunity_id: SalesOpportunityId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSalesOpportunityByIdResult {
    pub sales_opportunity: SalesOpportunity,
}

pub struct GetSalesOpportunityByIdHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    opportunities: Arc<dyn SalesOpportunitiesRepository>,
}

impl GetSalesOpportunityByIdHandler {
    pub fn new(
        salespersons: Arc<dyn SalespersonsRepository>,
        opportunities: Arc<dyn SalesOpportunitiesRepository>,
    ) -> Self {
        Self {
            salespersons,
            opportunities,
        }
    }

    pub async fn handle(
        &self,
        query: GetSalesOpportunityByIdQuery,
    ) -> Either<CrmError, GetSalesOpportunityByIdResult> {
        let executor = load_executor(self.salespersons.as_ref(), &query.executor_id).await?;
        let sales_opportunity =
            load_opportunity(self.opportunities.as_ref(), &query.sales_opportunity_id).await?;
        require_rep_or_manager(&executor, &sales_opportunity.sales_rep_id())?;

        right(GetSalesOpportunityByIdResult { sales_opportunity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemorySalesOpportunitiesRepository, InMemorySalespersonsRepository,
    };
    use crate::domain::foundation::Entity;
    use crate::domain::salesperson::Salesperson;
    use crate::test_support::{manager, opportunity_for, salesperson};

    fn handler(people: Vec<Salesperson>, deals: Vec<SalesOpportunity>) -> GetSalesOpportunityByIdHandler {
        GetSalesOpportunityByIdHandler::new(
            Arc::new(InMemorySalespersonsRepository::with(people)),
            Arc::new(InMemorySalesOpportunitiesRepository::with(deals)),
        )
    }

    #[tokio::test]
    async fn owner_and_manager_can_read() {
        let rep = salesperson();
        let boss = manager();
        let deal = opportunity_for(rep.id());
        let handler = handler(vec![rep.clone(), boss.clone()], vec![deal.clone()]);

        for executor_id in [rep.id(), boss.id()] {
            let result = handler
                .handle(GetSalesOpportunityByIdQuery {
                    executor_id,
                    sales_opportunity_id: deal.id(),
                })
                .await
                .unwrap();
            assert_eq!(result.sales_opportunity, deal);
        }
    }

    #[tokio::test]
    async fn other_rep_is_not_allowed() {
        let rep = salesperson();
        let deal = opportunity_for(SalespersonId::new());
        let handler = handler(vec![rep.clone()], vec![deal.clone()]);

        let result = handler
            .handle(GetSalesOpportunityByIdQuery {
                executor_id: rep.id(),
                sales_opportunity_id: deal.id(),
            })
            .await;
        assert_eq!(result, Err(CrmError::NotAllowed));
    }

    #[tokio::test]
    async fn unknown_deal_is_not_found() {
        let rep = salesperson();
        let handler = handler(vec![rep.clone()], vec![]);

        let result = handler
            .handle(GetSalesOpportunityByIdQuery {
                executor_id: rep.id(),
                sales_opportunity_id: SalesOpportunityId::new(),
            })
            .await;
        assert_eq!(result, Err(CrmError::SalesOpportunityNotFound));
    }
}
