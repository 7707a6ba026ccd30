//! Salespersons repository port.
//!
//! Defines the contract for persisting and retrieving Salesperson aggregates.
//! Implementations store state only; pending domain events are never persisted.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Page, SalespersonId};
use crate::domain::salesperson::Salesperson;

/// Repository port for Salesperson aggregate persistence.
#[async_trait]
pub trait SalespersonsRepository: Send + Sync {
    /// Persist a new salesperson.
    ///
    /// # Errors
    ///
    /// - `DuplicateRecord` if the id is already stored
    /// - `StorageError` on persistence failure
    async fn create(&self, salesperson: &Salesperson) -> Result<(), DomainError>;

    /// Persist changes to an existing salesperson.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the salesperson was never created
    /// - `StorageError` on persistence failure
    async fn save(&self, salesperson: &Salesperson) -> Result<(), DomainError>;

    /// Remove a salesperson.
    async fn delete(&self, salesperson: &Salesperson) -> Result<(), DomainError>;

    /// Find a salesperson by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &SalespersonId) -> Result<Option<Salesperson>, DomainError>;

    /// Find a salesperson by email. Returns `None` if not found.
    async fn find_by_email(&self, email: &str) -> Result<Option<Salesperson>, DomainError>;

    /// List salespeople, `PAGE_SIZE` per page in insertion order.
    async fn find_many(&self, page: Page) -> Result<Vec<Salesperson>, DomainError>;
}
