//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, outcome type, aggregates, errors)
//! - `salesperson` - Salesperson accounts and roles
//! - `client` - Clients owned by a sales rep
//! - `sales_opportunity` - Deals and their pipeline state machine
//! - `events` - The closed set of domain events

pub mod client;
pub mod events;
pub mod foundation;
pub mod sales_opportunity;
pub mod salesperson;
