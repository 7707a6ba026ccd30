//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the outcome type, aggregate and event abstractions,
//! pagination, and error types that form the vocabulary of the CRM domain.

mod aggregate;
mod either;
mod errors;
mod events;
mod ids;
mod ownership;
mod pagination;
mod timestamp;

pub use aggregate::{AggregateRoot, Entity, PendingEvents};
pub use either::{left, right, Either, EitherExt};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventId};
pub use ids::{AggregateId, ClientId, SalesOpportunityId, SalespersonId};
pub use ownership::OwnedBySalesRep;
pub use pagination::{Page, PAGE_SIZE};
pub use timestamp::Timestamp;
