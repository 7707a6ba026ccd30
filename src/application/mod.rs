//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers return [`Either<CrmError, _>`](crate::domain::foundation::Either);
//! infrastructure failures surface as [`CrmError::Infrastructure`].

pub mod authorization;
pub mod errors;
pub mod events;
pub mod handlers;

pub use errors::{CrmError, ErrorCategory};
pub use events::{DispatchReport, DomainEvents, HandlerFailure};
pub use handlers::*;
