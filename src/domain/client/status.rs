//! ClientStatus enum for tracking a client's relationship stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship stage of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Lead,
    Active,
    Inactive,
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClientStatus::Lead => "lead",
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
        };
        write!(f, "{}", s)
    }
}
