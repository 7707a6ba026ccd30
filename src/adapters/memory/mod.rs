//! In-memory repository adapters.
//!
//! Rows are kept in insertion order, which is also the pagination order.
//! Stored copies never carry pending domain events.

mod clients;
mod sales_opportunities;
mod salespersons;

pub use clients::InMemoryClientsRepository;
pub use sales_opportunities::InMemorySalesOpportunitiesRepository;
pub use salespersons::InMemorySalespersonsRepository;

use tokio::sync::RwLock;

use crate::domain::foundation::{AggregateRoot, DomainError, ErrorCode, Page};

/// Insertion-ordered rows of one aggregate type.
#[derive(Debug)]
struct Table<T> {
    entity: &'static str,
    rows: RwLock<Vec<T>>,
}

impl<T> Table<T>
where
    T: AggregateRoot + Clone,
{
    fn new(entity: &'static str, rows: Vec<T>) -> Self {
        Self {
            entity,
            rows: RwLock::new(rows.into_iter().map(detached).collect()),
        }
    }

    async fn insert(&self, row: &T) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.id() == row.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateRecord,
                format!("{} already stored", self.entity),
            )
            .with_detail("id", format!("{:?}", row.id())));
        }
        rows.push(detached(row.clone()));
        Ok(())
    }

    async fn replace(&self, row: &T) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|r| r.id() == row.id())
            .ok_or_else(|| self.missing(row))?;
        *slot = detached(row.clone());
        Ok(())
    }

    async fn remove(&self, row: &T) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id() != row.id());
        if rows.len() == before {
            return Err(self.missing(row));
        }
        Ok(())
    }

    async fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().await.iter().find(|r| predicate(r)).cloned()
    }

    async fn page(&self, page: Page, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let rows = self.rows.read().await;
        let matching: Vec<&T> = rows.iter().filter(|r| predicate(r)).collect();
        page.slice(&matching).iter().map(|r| (*r).clone()).collect()
    }

    async fn snapshot(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    fn missing(&self, row: &T) -> DomainError {
        DomainError::new(
            ErrorCode::RecordNotFound,
            format!("{} is not stored", self.entity),
        )
        .with_detail("id", format!("{:?}", row.id()))
    }
}

fn detached<T: AggregateRoot>(mut row: T) -> T {
    row.clear_domain_events();
    row
}
