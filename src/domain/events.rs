//! The closed set of domain events raised by CRM aggregates.
//!
//! Handlers subscribe by [`EventKind`] and receive a [`CrmEvent`], matching
//! on the variant they registered for.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::client::ClientCreated;
use super::foundation::{AggregateId, DomainEvent, EventId, Timestamp};
use super::sales_opportunity::{
    SalesOpportunityCreated, SalesOpportunityDelivered, SalesOpportunityHighValue,
    SalesOpportunityLost, SalesOpportunityStatusUpdated,
};
use super::salesperson::SalespersonCreated;

/// Subscription key for event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SalespersonCreated,
    ClientCreated,
    SalesOpportunityCreated,
    SalesOpportunityHighValue,
    SalesOpportunityStatusUpdated,
    SalesOpportunityLost,
    SalesOpportunityDelivered,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::SalespersonCreated,
        EventKind::ClientCreated,
        EventKind::SalesOpportunityCreated,
        EventKind::SalesOpportunityHighValue,
        EventKind::SalesOpportunityStatusUpdated,
        EventKind::SalesOpportunityLost,
        EventKind::SalesOpportunityDelivered,
    ];

    /// Stable event-type name, identical to `DomainEvent::event_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::SalespersonCreated => "salesperson.created",
            EventKind::ClientCreated => "client.created",
            EventKind::SalesOpportunityCreated => "sales_opportunity.created",
            EventKind::SalesOpportunityHighValue => "sales_opportunity.high_value",
            EventKind::SalesOpportunityStatusUpdated => "sales_opportunity.status_updated",
            EventKind::SalesOpportunityLost => "sales_opportunity.lost",
            EventKind::SalesOpportunityDelivered => "sales_opportunity.delivered",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Any event raised by a CRM aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CrmEvent {
    SalespersonCreated(SalespersonCreated),
    ClientCreated(ClientCreated),
    SalesOpportunityCreated(SalesOpportunityCreated),
    SalesOpportunityHighValue(SalesOpportunityHighValue),
    SalesOpportunityStatusUpdated(SalesOpportunityStatusUpdated),
    SalesOpportunityLost(SalesOpportunityLost),
    SalesOpportunityDelivered(SalesOpportunityDelivered),
}

impl CrmEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            CrmEvent::SalespersonCreated(_) => EventKind::SalespersonCreated,
            CrmEvent::ClientCreated(_) => EventKind::ClientCreated,
            CrmEvent::SalesOpportunityCreated(_) => EventKind::SalesOpportunityCreated,
            CrmEvent::SalesOpportunityHighValue(_) => EventKind::SalesOpportunityHighValue,
            CrmEvent::SalesOpportunityStatusUpdated(_) => EventKind::SalesOpportunityStatusUpdated,
            CrmEvent::SalesOpportunityLost(_) => EventKind::SalesOpportunityLost,
            CrmEvent::SalesOpportunityDelivered(_) => EventKind::SalesOpportunityDelivered,
        }
    }

    fn inner(&self) -> &dyn DomainEvent {
        match self {
            CrmEvent::SalespersonCreated(e) => e,
            CrmEvent::ClientCreated(e) => e,
            CrmEvent::SalesOpportunityCreated(e) => e,
            CrmEvent::SalesOpportunityHighValue(e) => e,
            CrmEvent::SalesOpportunityStatusUpdated(e) => e,
            CrmEvent::SalesOpportunityLost(e) => e,
            CrmEvent::SalesOpportunityDelivered(e) => e,
        }
    }
}

impl DomainEvent for CrmEvent {
    fn event_type(&self) -> &'static str {
        self.inner().event_type()
    }

    fn aggregate_id(&self) -> AggregateId {
        self.inner().aggregate_id()
    }

    fn aggregate_type(&self) -> &'static str {
        self.inner().aggregate_type()
    }

    fn occurred_at(&self) -> Timestamp {
        self.inner().occurred_at()
    }

    fn event_id(&self) -> EventId {
        self.inner().event_id()
    }
}

macro_rules! impl_from_event {
    ($variant:ident) => {
        impl From<$variant> for CrmEvent {
            fn from(event: $variant) -> Self {
                CrmEvent::$variant(event)
            }
        }
    };
}

impl_from_event!(SalespersonCreated);
impl_from_event!(ClientCreated);
impl_from_event!(SalesOpportunityCreated);
impl_from_event!(SalesOpportunityHighValue);
impl_from_event!(SalesOpportunityStatusUpdated);
impl_from_event!(SalesOpportunityLost);
impl_from_event!(SalesOpportunityDelivered);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ClientId, SalespersonId};

    fn client_created() -> CrmEvent {
        ClientCreated {
            event_id: EventId::from_string("evt-1"),
            client_id: ClientId::new(),
            sales_rep_id: SalespersonId::new(),
            creator_id: SalespersonId::new(),
            name: "Acme".to_string(),
            email: "a@acme.com".to_string(),
            occurred_at: Timestamp::now(),
        }
        .into()
    }

    #[test]
    fn kind_name_matches_event_type() {
        let event = client_created();
        assert_eq!(event.kind(), EventKind::ClientCreated);
        assert_eq!(event.kind().as_str(), event.event_type());
    }

    #[test]
    fn delegates_identity_to_wrapped_event() {
        let event = client_created();
        let CrmEvent::ClientCreated(inner) = &event else {
            panic!("expected ClientCreated");
        };
        assert_eq!(event.aggregate_id(), AggregateId::from(inner.client_id));
        assert_eq!(event.aggregate_type(), "Client");
        assert_eq!(event.event_id().as_str(), "evt-1");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(client_created()).unwrap();
        assert_eq!(json["type"], "client_created");
        assert_eq!(json["payload"]["name"], "Acme");
    }

    #[test]
    fn all_kinds_have_distinct_names() {
        let mut names: Vec<_> = EventKind::ALL.iter().map(EventKind::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EventKind::ALL.len());
    }
}
