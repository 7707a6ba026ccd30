//! Sales CRM - salespeople, clients and sales opportunities
//!
//! This crate implements the core of a sales CRM: role-aware use cases over
//! three aggregates, with domain events dispatched in-process after each
//! successful write.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;

#[cfg(test)]
mod test_support;
