//! Authorization checks shared by every use case.
//!
//! Checks follow one pattern:
//! 1. Resolve the executor from the salespersons repository
//! 2. Apply the manager-only or rep-or-manager rule
//! 3. Log denials
//! 4. Return `NotAllowed` on denial

use tracing::debug;

use super::CrmError;
use crate::domain::foundation::{Entity, SalespersonId};
use crate::domain::salesperson::Salesperson;
use crate::ports::SalespersonsRepository;

/// Loads the salesperson executing a use case.
///
/// # Errors
///
/// - `SalespersonNotFound` if no salesperson has `executor_id`
pub async fn load_executor(
    salespersons: &dyn SalespersonsRepository,
    executor_id: &SalespersonId,
) -> Result<Salesperson, CrmError> {
    salespersons
        .find_by_id(executor_id)
        .await?
        .ok_or(CrmError::SalespersonNotFound)
}

/// Loads a salesperson referenced by a request (not the executor).
///
/// # Errors
///
/// - `SalespersonNotFound` if no salesperson has `id`
pub async fn load_salesperson(
    salespersons: &dyn SalespersonsRepository,
    id: &SalespersonId,
) -> Result<Salesperson, CrmError> {
    salespersons
        .find_by_id(id)
        .await?
        .ok_or(CrmError::SalespersonNotFound)
}

/// Manager-only rule.
///
/// # Errors
///
/// - `NotAllowed` unless the executor is a manager
pub fn require_manager(executor: &Salesperson) -> Result<(), CrmError> {
    if executor.is_manager() {
        return Ok(());
    }
    debug!(
        executor_id = %executor.id(),
        role = %executor.role(),
        "denied: manager role required"
    );
    Err(CrmError::NotAllowed)
}

/// Rep-or-manager rule against the owning sales rep.
///
/// # Errors
///
/// - `NotAllowed` unless the executor is a manager or is `sales_rep_id`
pub fn require_rep_or_manager(
    executor: &Salesperson,
    sales_rep_id: &SalespersonId,
) -> Result<(), CrmError> {
    if executor.can_act_for(sales_rep_id) {
        return Ok(());
    }
    debug!(
        executor_id = %executor.id(),
        sales_rep_id = %sales_rep_id,
        "denied: executor neither owns the resource nor is a manager"
    );
    Err(CrmError::NotAllowed)
}
