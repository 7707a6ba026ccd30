//! Salesperson domain events.

use serde::{Deserialize, Serialize};

use super::SalespersonRole;
use crate::domain::foundation::{domain_event, EventId, SalespersonId, Timestamp};

/// Published when a new salesperson account is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalespersonCreated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the created salesperson.
    pub salesperson_id: SalespersonId,

    pub name: String,

    pub email: String,

    pub role: SalespersonRole,

    /// When the account was created.
    pub occurred_at: Timestamp,
}

domain_event!(
    SalespersonCreated,
    event_type = "salesperson.created",
    aggregate_id = salesperson_id,
    aggregate_type = "Salesperson",
    occurred_at = occurred_at,
    event_id = event_id
);
