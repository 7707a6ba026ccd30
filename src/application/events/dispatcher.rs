//! In-process domain event dispatcher.
//!
//! `DomainEvents` keeps two pieces of state:
//! - handlers registered per [`EventKind`], in registration order
//! - events waiting for dispatch, indexed by the aggregate that raised them
//!
//! Use cases persist an aggregate, then call [`DomainEvents::publish`], which
//! drains the aggregate's pending events into the index and dispatches them.
//! Delivery is synchronous from the caller's point of view and at-most-once:
//! nothing is retried or stored.
//!
//! A failing handler is logged and recorded in the [`DispatchReport`]; the
//! remaining handlers and events still run.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::domain::events::{CrmEvent, EventKind};
use crate::domain::foundation::{AggregateId, AggregateRoot, DomainEvent};
use crate::ports::{EventHandler, EventSubscriber};

/// A handler that returned an error for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    pub handler: &'static str,
    pub kind: EventKind,
    pub error: String,
}

/// Outcome of dispatching one aggregate's events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Events taken from the index.
    pub events: usize,

    /// Successful handler invocations.
    pub delivered: usize,

    pub failures: Vec<HandlerFailure>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Registry of event handlers plus the per-aggregate pending-event index.
pub struct DomainEvents {
    handlers: RwLock<HashMap<EventKind, Vec<Arc<dyn EventHandler>>>>,
    marked: RwLock<HashMap<AggregateId, Vec<CrmEvent>>>,
}

impl DomainEvents {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            marked: RwLock::new(HashMap::new()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Handler registry
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends `handler` to the subscribers of `kind`. No de-duplication.
    pub fn register(&self, handler: Arc<dyn EventHandler>, kind: EventKind) {
        debug!(handler = handler.name(), kind = %kind, "registering event handler");
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(kind)
            .or_default()
            .push(handler);
    }

    /// Registers one handler instance for several kinds.
    pub fn register_all(&self, handler: Arc<dyn EventHandler>, kinds: &[EventKind]) {
        for kind in kinds {
            self.register(Arc::clone(&handler), *kind);
        }
    }

    /// Removes every registered handler.
    pub fn clear_handlers(&self) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .map_or(0, Vec::len)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pending-event index
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves the aggregate's pending events into the dispatch index.
    pub fn mark_aggregate_for_dispatch<A>(&self, aggregate: &mut A)
    where
        A: AggregateRoot<Event = CrmEvent>,
    {
        let events = aggregate.pull_domain_events();
        if events.is_empty() {
            return;
        }
        self.marked
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(aggregate.aggregate_id())
            .or_default()
            .extend(events);
    }

    /// Number of events waiting for dispatch for one aggregate.
    pub fn pending_count(&self, aggregate_id: &AggregateId) -> usize {
        self.marked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(aggregate_id)
            .map_or(0, Vec::len)
    }

    /// Drops every waiting event without dispatching.
    pub fn clear_marked_aggregates(&self) {
        self.marked
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Delivers an aggregate's waiting events, in raise order, to the
    /// handlers of each event's kind, then forgets them.
    pub async fn dispatch_events_for_aggregate(&self, aggregate_id: &AggregateId) -> DispatchReport {
        let events = self
            .marked
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(aggregate_id)
            .unwrap_or_default();

        let mut report = DispatchReport {
            events: events.len(),
            ..DispatchReport::default()
        };

        for event in &events {
            self.deliver(event, &mut report).await;
        }
        report
    }

    /// Marks the aggregate and dispatches its events immediately.
    pub async fn publish<A>(&self, aggregate: &mut A) -> DispatchReport
    where
        A: AggregateRoot<Event = CrmEvent>,
    {
        self.mark_aggregate_for_dispatch(aggregate);
        self.dispatch_events_for_aggregate(&aggregate.aggregate_id())
            .await
    }

    async fn deliver(&self, event: &CrmEvent, report: &mut DispatchReport) {
        let kind = event.kind();

        // Clone handlers to release the lock before awaiting
        let subscribers: Vec<Arc<dyn EventHandler>> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .cloned()
            .unwrap_or_default();

        for handler in subscribers {
            match handler.handle(event).await {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    warn!(
                        handler = handler.name(),
                        kind = %kind,
                        event_id = %event.event_id(),
                        aggregate_id = %event.aggregate_id(),
                        error = %err,
                        "event handler failed"
                    );
                    report.failures.push(HandlerFailure {
                        handler: handler.name(),
                        kind,
                        error: err.to_string(),
                    });
                }
            }
        }
    }
}

impl Default for DomainEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSubscriber for DomainEvents {
    fn subscribe(&self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        self.register(handler, kind);
    }
}
