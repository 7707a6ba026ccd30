//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SalespersonsRepository`, `ClientsRepository`, `SalesOpportunitiesRepository`
//!
//! ## Cryptography Ports
//!
//! - `HashGenerator` / `HashComparer` - Password hashing
//! - `Encrypter` - Access-token issuance
//!
//! ## Event Ports
//!
//! - `EventHandler` - Handler that processes dispatched events
//! - `EventSubscriber` - Registration of handlers by event kind

mod clients_repository;
mod cryptography;
mod event_subscriber;
mod sales_opportunities_repository;
mod salespersons_repository;

pub use clients_repository::ClientsRepository;
pub use cryptography::{Encrypter, HashComparer, HashGenerator, TokenClaims};
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use sales_opportunities_repository::SalesOpportunitiesRepository;
pub use salespersons_repository::SalespersonsRepository;
