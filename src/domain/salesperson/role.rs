//! SalespersonRole enum for authorization scope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Role of a salesperson. Managers may act on any resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SalespersonRole {
    #[default]
    Salesperson,
    Manager,
}

impl SalespersonRole {
    pub fn is_manager(&self) -> bool {
        matches!(self, SalespersonRole::Manager)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SalespersonRole::Salesperson => "salesperson",
            SalespersonRole::Manager => "manager",
        }
    }
}

impl fmt::Display for SalespersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SalespersonRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "salesperson" => Ok(SalespersonRole::Salesperson),
            "manager" => Ok(SalespersonRole::Manager),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}
