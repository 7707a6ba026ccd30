//! Salesperson domain module.
//!
//! Accounts of the people working the CRM, their roles and activity state.
//!
//! # Events
//!
//! - `SalespersonCreated` - Published when a new account is created

mod aggregate;
mod events;
mod role;

pub use aggregate::Salesperson;
pub use events::SalespersonCreated;
pub use role::SalespersonRole;
