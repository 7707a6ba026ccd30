//! Entity and aggregate-root abstractions.
//!
//! Aggregates buffer the domain events raised by their own mutations in a
//! [`PendingEvents`] list. The buffer is drained exactly once, either by the
//! event dispatcher or explicitly through [`AggregateRoot::pull_domain_events`].

use std::fmt::Debug;
use std::hash::Hash;

use super::AggregateId;

/// Something with a stable identity. Two entities are equal iff their ids are.
pub trait Entity {
    type Id: Copy + Eq + Hash + Debug + Into<AggregateId>;

    /// Returns the entity identity.
    fn id(&self) -> Self::Id;

    /// Returns the identity as an untyped aggregate id.
    fn aggregate_id(&self) -> AggregateId {
        self.id().into()
    }

    /// Identity-based equality.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Ordered list of events raised but not yet dispatched.
#[derive(Debug, Clone)]
pub struct PendingEvents<E>(Vec<E>);

impl<E> PendingEvents<E> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, event: E) {
        self.0.push(event);
    }

    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<E> Default for PendingEvents<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// An entity owning its consistency boundary and the events it raises.
pub trait AggregateRoot: Entity {
    type Event;

    fn pending_events(&self) -> &PendingEvents<Self::Event>;

    fn pending_events_mut(&mut self) -> &mut PendingEvents<Self::Event>;

    /// Queues an event. Nothing is dispatched at this point.
    fn add_domain_event(&mut self, event: Self::Event) {
        self.pending_events_mut().push(event);
    }

    /// Returns queued events without removing them.
    fn domain_events(&self) -> &[Self::Event] {
        self.pending_events().as_slice()
    }

    /// Removes and returns queued events in raise order.
    fn pull_domain_events(&mut self) -> Vec<Self::Event> {
        self.pending_events_mut().drain()
    }

    /// Discards queued events.
    fn clear_domain_events(&mut self) {
        self.pending_events_mut().drain();
    }

    fn has_pending_events(&self) -> bool {
        !self.pending_events().is_empty()
    }
}
