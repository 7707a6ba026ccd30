//! In-memory salespersons repository.

use async_trait::async_trait;

use super::Table;
use crate::domain::foundation::{DomainError, Entity, Page, SalespersonId};
use crate::domain::salesperson::Salesperson;
use crate::ports::SalespersonsRepository;

/// Salespersons repository backed by a vector.
#[derive(Debug)]
pub struct InMemorySalespersonsRepository {
    table: Table<Salesperson>,
}

impl InMemorySalespersonsRepository {
    pub fn new() -> Self {
        Self::with(Vec::new())
    }

    /// Creates a repository pre-loaded with `salespersons`.
    pub fn with(salespersons: Vec<Salesperson>) -> Self {
        Self {
            table: Table::new("Salesperson", salespersons),
        }
    }

    /// Returns every stored salesperson in insertion order.
    pub async fn all(&self) -> Vec<Salesperson> {
        self.table.snapshot().await
    }
}

impl Default for InMemorySalespersonsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SalespersonsRepository for InMemorySalespersonsRepository {
    async fn create(&self, salesperson: &Salesperson) -> Result<(), DomainError> {
        self.table.insert(salesperson).await
    }

    async fn save(&self, salesperson: &Salesperson) -> Result<(), DomainError> {
        self.table.replace(salesperson).await
    }

    async fn delete(&self, salesperson: &Salesperson) -> Result<(), DomainError> {
        self.table.remove(salesperson).await
    }

    async fn find_by_id(&self, id: &SalespersonId) -> Result<Option<Salesperson>, DomainError> {
        Ok(self.table.find(|s| s.id() == *id).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Salesperson>, DomainError> {
        Ok(self.table.find(|s| s.email() == email).await)
    }

    async fn find_many(&self, page: Page) -> Result<Vec<Salesperson>, DomainError> {
        Ok(self.table.page(page, |_| true).await)
    }
}
