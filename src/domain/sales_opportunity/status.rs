//! SalesOpportunityStatus enum for tracking the sales pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage of a sales opportunity.
///
/// ```text
/// open ──► inProgress ──► won ──► delivered
///   \──────────┴────────────────► lost
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SalesOpportunityStatus {
    #[default]
    Open,
    InProgress,
    Won,
    Lost,
    Delivered,
}

impl SalesOpportunityStatus {
    /// Returns true if the pipeline diagram has an edge from self to target.
    pub fn can_transition_to(&self, target: &SalesOpportunityStatus) -> bool {
        use SalesOpportunityStatus::*;
        matches!(
            (self, target),
            (Open, InProgress) | (Open, Lost) | (InProgress, Won) | (InProgress, Lost) | (Won, Delivered)
        )
    }

    /// Only open or in-progress opportunities can be lost.
    pub fn can_be_lost(&self) -> bool {
        self.can_transition_to(&SalesOpportunityStatus::Lost)
    }

    /// Lost and delivered opportunities have no way forward.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SalesOpportunityStatus::Lost | SalesOpportunityStatus::Delivered
        )
    }
}

impl fmt::Display for SalesOpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SalesOpportunityStatus::Open => "open",
            SalesOpportunityStatus::InProgress => "inProgress",
            SalesOpportunityStatus::Won => "won",
            SalesOpportunityStatus::Lost => "lost",
            SalesOpportunityStatus::Delivered => "delivered",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SalesOpportunityStatus::*;

    #[test]
    fn default_is_open() {
        assert_eq!(SalesOpportunityStatus::default(), Open);
    }

    #[test]
    fn only_open_and_in_progress_can_be_lost() {
        assert!(Open.can_be_lost());
        assert!(InProgress.can_be_lost());
        assert!(!Won.can_be_lost());
        assert!(!Lost.can_be_lost());
        assert!(!Delivered.can_be_lost());
    }

    #[test]
    fn delivery_only_follows_won() {
        assert!(Won.can_transition_to(&Delivered));
        assert!(!Open.can_transition_to(&Delivered));
        assert!(!InProgress.can_transition_to(&Delivered));
    }

    #[test]
    fn terminal_statuses() {
        assert!(Lost.is_terminal());
        assert!(Delivered.is_terminal());
        assert!(!Won.is_terminal());
    }

    #[test]
    fn serializes_camel_case() {
        assert_eq!(serde_json::to_string(&InProgress).unwrap(), "\"inProgress\"");
        assert_eq!(InProgress.to_string(), "inProgress");
    }
}
