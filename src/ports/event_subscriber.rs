//! EventSubscriber port - Interface for subscribing to domain events.
//!
//! Handlers register interest in event kinds without knowing how events
//! are buffered or delivered.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::events::{CrmEvent, EventKind};
use crate::domain::foundation::DomainError;

/// Handler for processing domain events.
///
/// A failing handler is logged and skipped; it never stops delivery to
/// other handlers.
///
/// # Example
///
/// ```ignore
/// struct LostDealNotifier;
///
/// #[async_trait]
/// impl EventHandler for LostDealNotifier {
///     async fn handle(&self, event: &CrmEvent) -> Result<(), DomainError> {
///         if let CrmEvent::SalesOpportunityLost(lost) = event {
///             tracing::info!(title = %lost.title, "deal lost");
///         }
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "LostDealNotifier"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: &CrmEvent) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to one event kind. Duplicates are not filtered.
    fn subscribe(&self, kind: EventKind, handler: Arc<dyn EventHandler>);

    /// Subscribe the same handler instance to several event kinds.
    fn subscribe_all(&self, kinds: &[EventKind], handler: Arc<dyn EventHandler>) {
        for kind in kinds {
            self.subscribe(*kind, Arc::clone(&handler));
        }
    }
}
