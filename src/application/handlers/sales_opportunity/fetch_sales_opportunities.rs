//! FetchSalesOpportunitiesHandler - Query handler listing deals.
//!
//! Managers list everything, or one salesperson's deals when a
//! `salesperson_id` is given. Reps always get their own deals.

use std::sync::Arc;

use tracing::debug;

use crate::application::authorization::{load_executor, load_salesperson};
use crate::application::CrmError;
use crate::domain::foundation::{left, right, Either, Entity, Page, SalespersonId};
use crate::domain::sales_opportunity::SalesOpportunity;
use crate::ports::{SalesOpportunitiesRepository, SalespersonsRepository};

#[derive(Debug, Clone)]
pub struct FetchSalesOpportunitiesQuery {
    pub executor_id: SalespersonId,
    pub salesperson_id: Option<SalespersonId>,
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSalesOpportunitiesResult {
    pub sales_opportunities: Vec<SalesOpportunity>,
}

pub struct FetchSalesOpportunitiesHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
    opportunities: Arc<dyn SalesOpportunitiesRepository>,
}

impl FetchSalesOpportunitiesHandler {
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
        query: FetchSalesOpportunitiesQuery,
    ) -> Either<CrmError, FetchSalesOpportunitiesResult> {
        let executor = load_executor(self.salespersons.as_ref(), &query.executor_id).await?;

        let sales_opportunities = if executor.is_manager() {
            match query.salesperson_id {
                Some(id) => {
                    let salesperson = load_salesperson(self.salespersons.as_ref(), &id).await?;
                    self.opportunities
                        .find_many_by_salesperson_id(&salesperson.id(), query.page)
                        .await?
                }
                None => self.opportunities.find_many(query.page).await?,
            }
        } else {
            if let Some(id) = query.salesperson_id {
                if id != executor.id() {
                    debug!(
                        executor_id = %executor.id(),
                        salesperson_id = %id,
                        "denied: rep asked for another salesperson's deals"
                    );
                    return left(CrmError::NotAllowed);
                }
            }
            self.opportunities
                .find_many_by_salesperson_id(&executor.id(), query.page)
                .await?
        };

        right(FetchSalesOpportunitiesResult {
            sales_opportunities,
        })
    }
}
