//! Domain event dispatch and the subscribers wired at startup.

mod dispatcher;
mod notifications;

pub use dispatcher::{DispatchReport, DomainEvents, HandlerFailure};
pub use notifications::{
    register_notification_handlers, DeliveredSalesOpportunityNotifier, EventAuditLogger,
    HighValueSalesOpportunityNotifier, LostSalesOpportunityNotifier,
    SalesOpportunityCreatedNotifier, SalesOpportunityStatusNotifier,
};
