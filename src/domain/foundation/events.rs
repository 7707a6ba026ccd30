//! Event primitives shared by every aggregate.
//!
//! - `EventId` - Unique identifier for an event instance
//! - `DomainEvent` - Trait that all domain events implement
//! - `domain_event!` - Macro to simplify DomainEvent implementations

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{AggregateId, Timestamp};

/// Trait that all domain events must implement.
///
/// Provides the contract for event identification, routing and dispatch
/// indexing. Use the `domain_event!` macro to implement it.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "client.created").
    fn event_type(&self) -> &'static str;

    /// Returns the ID of the aggregate that raised this event.
    fn aggregate_id(&self) -> AggregateId;

    /// Returns the type of aggregate (e.g., "Client").
    fn aggregate_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;

    /// Returns the unique ID for this event instance.
    fn event_id(&self) -> EventId;
}

/// Macro to implement DomainEvent trait with minimal boilerplate.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct ClientCreated {
///     pub event_id: EventId,
///     pub client_id: ClientId,
///     pub occurred_at: Timestamp,
/// }
///
/// domain_event!(
///     ClientCreated,
///     event_type = "client.created",
///     aggregate_id = client_id,
///     aggregate_type = "Client",
///     occurred_at = occurred_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn aggregate_id(&self) -> $crate::domain::foundation::AggregateId {
                self.$agg_id_field.into()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

pub use domain_event;

/// Unique identifier for events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates an EventId from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ClientId;

    #[derive(Debug, Clone, Serialize)]
    struct SampleEvent {
        event_id: EventId,
        client_id: ClientId,
        occurred_at: Timestamp,
    }

    domain_event!(
        SampleEvent,
        event_type = "sample.happened",
        aggregate_id = client_id,
        aggregate_type = "Client",
        occurred_at = occurred_at,
        event_id = event_id
    );

    #[test]
    fn event_id_generates_unique_values() {
        assert_ne!(EventId::new(), EventId::new());
    }

    #[test]
    fn event_id_from_string_preserves_value() {
        let id = EventId::from_string("evt-1");
        assert_eq!(id.as_str(), "evt-1");
        assert_eq!(id.to_string(), "evt-1");
    }

    #[test]
    fn macro_implements_domain_event() {
        let client_id = ClientId::new();
        let event = SampleEvent {
            event_id: EventId::from_string("evt-2"),
            client_id,
            occurred_at: Timestamp::now(),
        };

        assert_eq!(event.event_type(), "sample.happened");
        assert_eq!(event.aggregate_type(), "Client");
        assert_eq!(event.aggregate_id(), AggregateId::from(client_id));
        assert_eq!(event.event_id().as_str(), "evt-2");
    }
}
