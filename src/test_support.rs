//! Builders shared by unit tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::events::DomainEvents;
use crate::domain::client::Client;
use crate::domain::events::{CrmEvent, EventKind};
use crate::domain::foundation::{AggregateRoot, ClientId, DomainError, SalespersonId};
use crate::domain::sales_opportunity::{SalesOpportunity, SalesOpportunityStatus};
use crate::domain::salesperson::{Salesperson, SalespersonRole};
use crate::ports::EventHandler;

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Password every builder-made salesperson is hashed from (with `FakeHasher`).
pub const PASSWORD: &str = "123456";

fn person(role: SalespersonRole) -> Salesperson {
    let n = next();
    let mut salesperson = Salesperson::new(
        format!("Person {}", n),
        format!("person{}@crm.com", n),
        format!("{}-hashed", PASSWORD),
        "+55 11 99999-0000",
        role,
    );
    salesperson.clear_domain_events();
    salesperson
}

/// An active rep without pending events.
pub fn salesperson() -> Salesperson {
    person(SalespersonRole::Salesperson)
}

/// An active manager without pending events.
pub fn manager() -> Salesperson {
    person(SalespersonRole::Manager)
}

/// A lead owned by `sales_rep_id`, with its `ClientCreated` still pending.
pub fn client_for(sales_rep_id: SalespersonId) -> Client {
    let n = next();
    Client::new(
        format!("Client {}", n),
        format!("client{}@acme.com", n),
        "+55 11 98888-0000",
        "retail",
        sales_rep_id,
        None,
    )
}

/// An open opportunity worth 1000 owned by `sales_rep_id`, with its
/// `SalesOpportunityCreated` still pending.
pub fn opportunity_for(sales_rep_id: SalespersonId) -> SalesOpportunity {
    let n = next();
    SalesOpportunity::new(
        sales_rep_id,
        ClientId::new(),
        sales_rep_id,
        format!("Deal {}", n),
        "Fleet renewal",
        1000.0,
    )
}

/// An opportunity already at `status`, without pending events.
pub fn opportunity_in(sales_rep_id: SalespersonId, status: SalesOpportunityStatus) -> SalesOpportunity {
    let mut opportunity = opportunity_for(sales_rep_id);
    opportunity.update_status(status);
    opportunity.clear_domain_events();
    opportunity
}

/// Kinds of every event dispatched through a [`DomainEvents`], in order.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<EventKind>>>);

impl EventLog {
    pub fn kinds(&self) -> Vec<EventKind> {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventHandler for EventLog {
    async fn handle(&self, event: &CrmEvent) -> Result<(), DomainError> {
        self.0.lock().unwrap().push(event.kind());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "EventLog"
    }
}

/// Subscribes a fresh [`EventLog`] to every event kind.
pub fn record_events(events: &DomainEvents) -> EventLog {
    let log = EventLog::default();
    events.register_all(Arc::new(log.clone()), &EventKind::ALL);
    log
}
