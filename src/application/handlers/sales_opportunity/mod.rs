//! Sales-opportunity command and query handlers.
//!
//! Every operation follows the rep-or-manager rule against the owning
//! sales rep. Listing additionally lets managers choose any salesperson.

mod fetch_sales_opportunities;
mod get_sales_opportunity_by_id;
mod mark_sales_opportunity_as_delivered;
mod mark_sales_opportunity_as_lost;
mod register_sales_opportunity;
mod update_sales_opportunity;

pub use fetch_sales_opportunities::{
    FetchSalesOpportunitiesHandler, FetchSalesOpportunitiesQuery, FetchSalesOpportunitiesResult,
};
pub use get_sales_opportunity_by_id::{
    GetSalesOpportunityByIdHandler, GetSalesOpportunityByIdQuery, GetSalesOpportunityByIdResult,
};
pub use mark_sales_opportunity_as_delivered::{
    MarkSalesOpportunityAsDeliveredCommand, MarkSalesOpportunityAsDeliveredHandler,
    MarkSalesOpportunityAsDeliveredResult,
};
pub use mark_sales_opportunity_as_lost::{
    MarkSalesOpportunityAsLostCommand, MarkSalesOpportunityAsLostHandler,
    MarkSalesOpportunityAsLostResult,
};
pub use register_sales_opportunity::{
    RegisterSalesOpportunityCommand, RegisterSalesOpportunityHandler,
    RegisterSalesOpportunityResult,
};
pub use update_sales_opportunity::{
    UpdateSalesOpportunityCommand, UpdateSalesOpportunityHandler, UpdateSalesOpportunityResult,
};

use crate::application::CrmError;
use crate::domain::foundation::SalesOpportunityId;
use crate::domain::sales_opportunity::SalesOpportunity;
use crate::ports::SalesOpportunitiesRepository;

async fn load_opportunity(
    opportunities: &dyn SalesOpportunitiesRepository,
    id: &SalesOpportunityId,
) -> Result<SalesOpportunity, CrmError> {
    opportunities
        .find_by_id(id)
        .await?
        .ok_or(CrmError::SalesOpportunityNotFound)
}
