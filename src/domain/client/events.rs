//! Client domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, ClientId, EventId, SalespersonId, Timestamp};

/// Published when a new client is registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientCreated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the created client.
    pub client_id: ClientId,

    /// Salesperson responsible for the client.
    pub sales_rep_id: SalespersonId,

    /// Salesperson who registered the client.
    pub creator_id: SalespersonId,

    pub name: String,

    pub email: String,

    pub occurred_at: Timestamp,
}

domain_event!(
    ClientCreated,
    event_type = "client.created",
    aggregate_id = client_id,
    aggregate_type = "Client",
    occurred_at = occurred_at,
    event_id = event_id
);
