//! Sales-opportunity transition errors.

use thiserror::Error;

use super::SalesOpportunityStatus;

/// Invariant violations raised by `SalesOpportunity` transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalesOpportunityError {
    #[error("Cannot mark sales opportunity as lost when its status is '{status}'")]
    CantMarkAsLost { status: SalesOpportunityStatus },

    #[error("Sales opportunity has a wrong status for this operation")]
    WrongStatus { status: SalesOpportunityStatus },

    #[error("Photo URL is required to mark this sales opportunity as delivered")]
    PhotoUrlRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cant_mark_as_lost_names_current_status() {
        let err = SalesOpportunityError::CantMarkAsLost {
            status: SalesOpportunityStatus::Won,
        };
        assert_eq!(
            err.to_string(),
            "Cannot mark sales opportunity as lost when its status is 'won'"
        );
    }
}
