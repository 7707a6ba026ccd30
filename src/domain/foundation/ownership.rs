//! Ownership trait for resources assigned to a sales representative.
//!
//! Clients and sales opportunities both belong to exactly one salesperson
//! (their sales rep). Authorization checks read the owner through this
//! trait instead of reaching into each aggregate's fields.
//!
//! # Example
//!
//! ```ignore
//! impl OwnedBySalesRep for Client {
//!     fn sales_rep_id(&self) -> SalespersonId {
//!         self.sales_rep_id
//!     }
//! }
//!
//! if client.is_owned_by(&executor_id) { /* ... */ }
//! ```

use super::SalespersonId;

/// Trait for aggregates with a single owning sales representative.
pub trait OwnedBySalesRep {
    /// Returns the ID of the salesperson who owns this resource.
    fn sales_rep_id(&self) -> SalespersonId;

    /// Checks if the given salesperson is the owner.
    fn is_owned_by(&self, salesperson_id: &SalespersonId) -> bool {
        self.sales_rep_id() == *salesperson_id
    }
}
