//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identity of any aggregate, used to index pending events for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregateId(Uuid);

/// Unique identifier for a salesperson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalespersonId(Uuid);

/// Unique identifier for a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);

/// Unique identifier for a sales opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesOpportunityId(Uuid);

macro_rules! impl_uuid_identifier {
    ($t:ident) => {
        impl $t {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $t {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

impl_uuid_identifier!(AggregateId);
impl_uuid_identifier!(SalespersonId);
impl_uuid_identifier!(ClientId);
impl_uuid_identifier!(SalesOpportunityId);

macro_rules! impl_into_aggregate_id {
    ($t:ident) => {
        impl From<$t> for AggregateId {
            fn from(id: $t) -> Self {
                AggregateId(id.0)
            }
        }
    };
}

impl_into_aggregate_id!(SalespersonId);
impl_into_aggregate_id!(ClientId);
impl_into_aggregate_id!(SalesOpportunityId);
