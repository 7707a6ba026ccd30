//! In-memory clients repository.

use async_trait::async_trait;

use super::Table;
use crate::domain::client::Client;
use crate::domain::foundation::{
    ClientId, DomainError, Entity, OwnedBySalesRep, Page, SalespersonId,
};
use crate::ports::ClientsRepository;

/// Clients repository backed by a vector.
#[derive(Debug)]
pub struct InMemoryClientsRepository {
    table: Table<Client>,
}

impl InMemoryClientsRepository {
    pub fn new() -> Self {
        Self::with(Vec::new())
    }

    pub fn with(clients: Vec<Client>) -> Self {
        Self {
            table: Table::new("Client", clients),
        }
    }

    pub async fn all(&self) -> Vec<Client> {
        self.table.snapshot().await
    }
}

impl Default for InMemoryClientsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientsRepository for InMemoryClientsRepository {
    async fn create(&self, client: &Client) -> Result<(), DomainError> {
        self.table.insert(client).await
    }

    async fn save(&self, client: &Client) -> Result<(), DomainError> {
        self.table.replace(client).await
    }

    async fn delete(&self, client: &Client) -> Result<(), DomainError> {
        self.table.remove(client).await
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError> {
        Ok(self.table.find(|c| c.id() == *id).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, DomainError> {
        Ok(self.table.find(|c| c.email() == email).await)
    }

    async fn find_many_by_sales_rep_id(
        &self,
        sales_rep_id: &SalespersonId,
        page: Page,
    ) -> Result<Vec<Client>, DomainError> {
        Ok(self.table.page(page, |c| c.is_owned_by(sales_rep_id)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::client_for;

    #[tokio::test]
    async fn find_by_email_matches_exactly() {
        let client = client_for(SalespersonId::new());
        let repo = InMemoryClientsRepository::with(vec![client.clone()]);

        assert_eq!(
            repo.find_by_email(client.email()).await.unwrap(),
            Some(client)
        );
        assert!(repo.find_by_email("nobody@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lists_only_the_reps_clients() {
        let rep = SalespersonId::new();
        let mine = client_for(rep);
        let theirs = client_for(SalespersonId::new());
        let repo = InMemoryClientsRepository::with(vec![mine.clone(), theirs]);

        let page = repo
            .find_many_by_sales_rep_id(&rep, Page::first())
            .await
            .unwrap();
        assert_eq!(page, vec![mine]);
    }

    #[tokio::test]
    async fn pagination_applies_after_filtering() {
        let rep = SalespersonId::new();
        let mut rows = Vec::new();
        for _ in 0..22 {
            rows.push(client_for(rep));
            rows.push(client_for(SalespersonId::new()));
        }
        let mine: Vec<Client> = rows.iter().filter(|c| c.is_owned_by(&rep)).cloned().collect();
        let repo = InMemoryClientsRepository::with(rows);

        let page = repo
            .find_many_by_sales_rep_id(&rep, Page::new(2).unwrap())
            .await
            .unwrap();
        assert_eq!(page, mine[20..].to_vec());
    }

    #[tokio::test]
    async fn save_persists_changes() {
        let mut client = client_for(SalespersonId::new());
        let repo = InMemoryClientsRepository::with(vec![client.clone()]);
        client.inactivate();
        repo.save(&client).await.unwrap();

        let loaded = repo.find_by_id(&client.id()).await.unwrap().unwrap();
        assert_eq!(loaded.status(), client.status());
    }
}
