//! GetSalespersonByIdHandler - Query handler for one salesperson.

use std::sync::Arc;

use crate::application::authorization::{load_executor, load_salesperson, require_manager};
use crate::application::CrmError;
use crate::domain::foundation::{right, Either, SalespersonId};
use crate::domain::salesperson::Salesperson;
use crate::ports::SalespersonsRepository;

#[derive(Debug, Clone)]
pub struct GetSalespersonByIdQuery {
    pub executor_id: SalespersonId,
    pub salesperson_id: SalespersonId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSalespersonByIdResult {
    pub salesperson: Salesperson,
}

/// Manager-only lookup.
pub struct GetSalespersonByIdHandler {
    salespersons: Arc<dyn SalespersonsRepository>,
}

impl GetSalespersonByIdHandler {
    pub fn new(salespersons: Arc<dyn SalespersonsRepository>) -> Self {
        Self { salespersons }
    }

    pub async fn handle(
        &self,
        query: GetSalespersonByIdQuery,
    ) -> Either<CrmError, GetSalespersonByIdResult> {
        let executor = load_executor(self.salespersons.as_ref(), &query.executor_id).await?;
        require_manager(&executor)?;

        let salesperson = load_salesperson(self.salespersons.as_ref(), &query.salesperson_id).await?;
        right(GetSalespersonByIdResult { salesperson })
    }
}
