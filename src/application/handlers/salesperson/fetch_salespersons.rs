//! FetchSalespersonsHandler - Query handler listing salespersons page by page.

use std::sync::Arc;

use crate::application::authorization::{load_executor, require_manager};
use crate::application::CrmError;
use crate::domain::foundation::{right, Either, Page, SalespersonId};
use crate::domain::salesperson::Salesperson;
use crate::ports::SalespersonsRepository;

#[derive(Debug, Clone)]
pub struct FetchSalespersonsQuery {
    pub executor_id: SalespersonId,
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSalespersonsResult {
    pub salespersons: Vec<Salesperson>,
}

/// Handler for listing salespersons. Manager-only.
pub struct FetchSalespersonsHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
}

impl FetchSalespersonsHandler {
    pub fn new(salespersons: Arc<dyn SalespersonsRepository>) -> Self {
        Self { salespersons }
    }

    pub async fn handle(
        &self,
        query: FetchSalespersonsQuery,
    ) -> Either<CrmError, FetchSalespersonsResult> {
        let executor = load_executor(self.salespersons.as_ref(), &query.executor_id).await?;
        require_manager(&executor)?;

        let salespersons = self.salespersons.find_many(query.page).await?;
        right(FetchSalespersonsResult { salespersons })
    }
}
