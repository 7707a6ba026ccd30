//! Client domain module.
//!
//! Companies or people a salesperson is selling to. Every client is owned
//! by exactly one sales rep.
//!
//! # Events
//!
//! - `ClientCreated` - Published when a new client is registered

mod aggregate;
mod events;
mod status;

pub use aggregate::Client;
pub use events::ClientCreated;
pub use status::ClientStatus;
