//! Use-case error union.
//!
//! Every handler returns `Either<CrmError, _>`. Callers branch on the variant
//! (or on [`CrmError::category`]), never on message text.

use thiserror::Error;

use crate::domain::foundation::{DomainError, SalespersonId};
use crate::domain::sales_opportunity::{SalesOpportunityError, SalesOpportunityStatus};

/// Coarse grouping of [`CrmError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    NotFound,
    Authorization,
    Conflict,
    Credential,
    InvariantViolation,
    Infrastructure,
}

/// Failure of a CRM use case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrmError {
    #[error("Salesperson not found")]
    SalespersonNotFound,

    #[error("Client not found")]
    ClientNotFound,

    #[error("Sales opportunity not found")]
    SalesOpportunityNotFound,

    #[error("Not allowed")]
    NotAllowed,

    #[error("Salesperson with {email} already exists")]
    SalespersonAlreadyExists { email: String },

    #[error("Client with {email} already exists")]
    ClientAlreadyExists { email: String },

    #[error("Credentials are not valid")]
    WrongCredentials,

    #[error("This account is not active")]
    SalespersonDeactive { salesperson_id: SalespersonId },

    #[error("Cannot mark sales opportunity as lost when its status is '{status}'")]
    CantMarkSalesOpportunityAsLost { status: SalesOpportunityStatus },

    #[error("Sales opportunity has a wrong status for this operation")]
    SalesOpportunityWrongStatus { status: SalesOpportunityStatus },

    #[error("Photo URL is required to mark this sales opportunity as delivered")]
    SalesOpportunityPhotoUrlRequired,

    /// A collaborator failed; not a business outcome.
    #[error("Unexpected failure: {0}")]
    Infrastructure(String),
}

impl CrmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CrmError::SalespersonNotFound
            | CrmError::ClientNotFound
            | CrmError::SalesOpportunityNotFound => ErrorCategory::NotFound,
            CrmError::NotAllowed => ErrorCategory::Authorization,
            CrmError::SalespersonAlreadyExists { .. } | CrmError::ClientAlreadyExists { .. } => {
                ErrorCategory::Conflict
            }
            CrmError::WrongCredentials | CrmError::SalespersonDeactive { .. } => {
                ErrorCategory::Credential
            }
            CrmError::CantMarkSalesOpportunityAsLost { .. }
            | CrmError::SalesOpportunityWrongStatus { .. }
            | CrmError::SalesOpportunityPhotoUrlRequired => ErrorCategory::InvariantViolation,
            CrmError::Infrastructure(_) => ErrorCategory::Infrastructure,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            CrmError::SalespersonNotFound => "SALESPERSON_NOT_FOUND",
            CrmError::ClientNotFound => "CLIENT_NOT_FOUND",
            CrmError::SalesOpportunityNotFound => "SALES_OPPORTUNITY_NOT_FOUND",
            CrmError::NotAllowed => "NOT_ALLOWED",
            CrmError::SalespersonAlreadyExists { .. } => "SALESPERSON_ALREADY_EXISTS",
            CrmError::ClientAlreadyExists { .. } => "CLIENT_ALREADY_EXISTS",
            CrmError::WrongCredentials => "WRONG_CREDENTIALS",
            CrmError::SalespersonDeactive { .. } => "SALESPERSON_DEACTIVE",
            CrmError::CantMarkSalesOpportunityAsLost { .. } => "CANT_MARK_SALES_OPPORTUNITY_AS_LOST",
            CrmError::SalesOpportunityWrongStatus { .. } => "SALES_OPPORTUNITY_WRONG_STATUS",
            CrmError::SalesOpportunityPhotoUrlRequired => "SALES_OPPORTUNITY_PHOTO_URL_REQUIRED",
            CrmError::Infrastructure(_) => "INTERNAL_ERROR",
        }
    }

    /// True for failures callers are expected to handle.
    pub fn is_business_error(&self) -> bool {
        self.category() != ErrorCategory::Infrastructure
    }
}

impl From<SalesOpportunityError> for CrmError {
    fn from(err: SalesOpportunityError) -> Self {
        match err {
            SalesOpportunityError::CantMarkAsLost { status } => {
                CrmError::CantMarkSalesOpportunityAsLost { status }
            }
            SalesOpportunityError::WrongStatus { status } => {
                CrmError::SalesOpportunityWrongStatus { status }
            }
            SalesOpportunityError::PhotoUrlRequired => CrmError::SalesOpportunityPhotoUrlRequired,
        }
    }
}

impl From<DomainError> for CrmError {
    fn from(err: DomainError) -> Self {
        CrmError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(CrmError::ClientNotFound.to_string(), "Client not found");
        assert_eq!(
            CrmError::SalespersonAlreadyExists {
                email: "a@crm.com".to_string()
            }
            .to_string(),
            "Salesperson with a@crm.com already exists"
        );
    }

    #[test]
    fn entity_errors_flatten_into_invariant_violations() {
        let err: CrmError = SalesOpportunityError::PhotoUrlRequired.into();
        assert_eq!(err, CrmError::SalesOpportunityPhotoUrlRequired);
        assert_eq!(err.category(), ErrorCategory::InvariantViolation);

        let err: CrmError = SalesOpportunityError::CantMarkAsLost {
            status: SalesOpportunityStatus::Won,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Cannot mark sales opportunity as lost when its status is 'won'"
        );
    }

    #[test]
    fn collaborator_failures_are_infrastructure() {
        let err: CrmError = DomainError::storage("disk full").into();
        assert_eq!(err.category(), ErrorCategory::Infrastructure);
        assert!(!err.is_business_error());
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn categories_group_variants() {
        assert_eq!(CrmError::NotAllowed.category(), ErrorCategory::Authorization);
        assert_eq!(CrmError::WrongCredentials.category(), ErrorCategory::Credential);
        assert_eq!(
            CrmError::ClientAlreadyExists {
                email: String::new()
            }
            .category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            CrmError::SalesOpportunityNotFound.category(),
            ErrorCategory::NotFound
        );
    }
}
