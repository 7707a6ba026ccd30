//! Sales-opportunity domain module.
//!
//! Deals tracked through the sales pipeline for a client.
//!
//! # Events
//!
//! - `SalesOpportunityCreated` - Published when an opportunity is registered
//! - `SalesOpportunityHighValue` - Published when the value reaches the threshold
//! - `SalesOpportunityStatusUpdated` - Published when an update changes the status
//! - `SalesOpportunityLost` - Published when marked as lost
//! - `SalesOpportunityDelivered` - Published when a won deal is delivered

mod aggregate;
mod errors;
mod events;
mod status;

pub use aggregate::{SalesOpportunity, HIGH_VALUE_THRESHOLD};
pub use errors::SalesOpportunityError;
pub use events::{
    SalesOpportunityCreated, SalesOpportunityDelivered, SalesOpportunityHighValue,
    SalesOpportunityLost, SalesOpportunityStatusUpdated,
};
pub use status::SalesOpportunityStatus;
