//! In-memory sales-opportunities repository.

use async_trait::async_trait;

use super::Table;
use crate::domain::foundation::{
    DomainError, Entity, OwnedBySalesRep, Page, SalesOpportunityId, SalespersonId,
};
use crate::domain::sales_opportunity::SalesOpportunity;
use crate::ports::SalesOpportunitiesRepository;

/// Sales-opportunities repository backed by a vector.
#[derive(Debug)]
pub struct InMemorySalesOpportunitiesRepository {
    table: Table<SalesOpportunity>,
}

impl InMemorySalesOpportunitiesRepository {
    pub fn new() -> Self {
        Self::with(Vec::new())
    }

    pub fn with(opportunities: Vec<SalesOpportunity>) -> Self {
        Self {
            table: Table::new("SalesOpportunity", opportunities),
        }
    }

    pub async fn all(&self) -> Vec<SalesOpportunity> {
        self.table.snapshot().await
    }
}

impl Default for InMemorySalesOpportunitiesRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SalesOpportunitiesRepository for InMemorySalesOpportunitiesRepository {
    async fn create(&self, opportunity: &SalesOpportunity) -> Result<(), DomainError> {
        self.table.insert(opportunity).await
    }

    async fn save(&self, opportunity: &SalesOpportunity) -> Result<(), DomainError> {
        self.table.replace(opportunity).await
    }

    async fn delete(&self, opportunity: &SalesOpportunity) -> Result<(), DomainError> {
        self.table.remove(opportunity).await
    }

    async fn find_by_id(
        &self,
        id: &SalesOpportunityId,
    ) -> Result<Option<SalesOpportunity>, DomainError> {
        Ok(self.table.find(|o| o.id() == *id).await)
    }

    async fn find_many(&self, page: Page) -> Result<Vec<SalesOpportunity>, DomainError> {
        Ok(self.table.page(page, |_| true).await)
    }

    async fn find_many_by_salesperson_id(
        &self,
        salesperson_id: &SalespersonId,
        page: Page,
    ) -> Result<Vec<SalesOpportunity>, DomainError> {
        Ok(self
            .table
            .page(page, |o| o.is_owned_by(salesperson_id))
            .await)
    }
}
