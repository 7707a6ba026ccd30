//! Sales-opportunities repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Page, SalesOpportunityId, SalespersonId};
use crate::domain::sales_opportunity::SalesOpportunity;

/// Repository port for SalesOpportunity aggregate persistence.
#[async_trait]
pub trait SalesOpportunitiesRepository: Send + Sync {
    /// Persist a new opportunity.
    ///
    /// # Errors
    ///
    /// - `DuplicateRecord` if the id is already stored
    /// - `StorageError` on persistence failure
    async fn create(&self, opportunity: &SalesOpportunity) -> Result<(), DomainError>;

    /// Persist changes to an existing opportunity.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the opportunity was never created
    /// - `StorageError` on persistence failure
    async fn save(&self, opportunity: &SalesOpportunity) -> Result<(), DomainError>;

    async fn delete(&self, opportunity: &SalesOpportunity) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        id: &SalesOpportunityId,
    ) -> Result<Option<SalesOpportunity>, DomainError>;

    /// List every opportunity, `PAGE_SIZE` per page.
    async fn find_many(&self, page: Page) -> Result<Vec<SalesOpportunity>, DomainError>;

    /// List the opportunities assigned to a salesperson, `PAGE_SIZE` per page.
    async fn find_many_by_salesperson_id(
        &self,
        salesperson_id: &SalespersonId,
        page: Page,
    ) -> Result<Vec<SalesOpportunity>, DomainError>;
}
