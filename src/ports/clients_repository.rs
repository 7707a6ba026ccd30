//! Clients repository port.

use async_trait::async_trait;

use crate::domain::client::Client;
use crate::domain::foundation::{ClientId, DomainError, Page, SalespersonId};

/// Repository port for Client aggregate persistence.
#[async_trait]
pub trait ClientsRepository: Send + Sync {
    /// Persist a new client.
    ///
    /// # Errors
    ///
    /// - `DuplicateRecord` if the id is already stored
    /// - `StorageError` on persistence failure
    async fn create(&self, client: &Client) -> Result<(), DomainError>;

    /// Persist changes to an existing client.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the client was never created
    /// - `StorageError` on persistence failure
    async fn save(&self, client: &Client) -> Result<(), DomainError>;

    async fn delete(&self, client: &Client) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, DomainError>;

    /// List the clients owned by a sales rep, `PAGE_SIZE` per page.
    async fn find_many_by_sales_rep_id(
        &self,
        sales_rep_id: &SalespersonId,
        page: Page,
    ) -> Result<Vec<Client>, DomainError>;
}
