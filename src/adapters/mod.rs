//! Adapters - Implementations of port interfaces.
//!
//! - `crypto` - Password hashing and access-token signing
//! - `memory` - In-memory repositories

pub mod crypto;
pub mod memory;
