//! Sales-opportunity domain events.
//!
//! - `SalesOpportunityCreated` - New opportunity registered
//! - `SalesOpportunityHighValue` - Value raised to the high-value threshold or above
//! - `SalesOpportunityStatusUpdated` - Status changed through an update
//! - `SalesOpportunityLost` - Opportunity marked as lost
//! - `SalesOpportunityDelivered` - Won opportunity delivered with proof photo

use serde::{Deserialize, Serialize};

use super::SalesOpportunityStatus;
use crate::domain::foundation::{
    domain_event, ClientId, EventId, SalesOpportunityId, SalespersonId, Timestamp,
};

// ════════════════════════════════════════════════════════════════════════════
// SalesOpportunityCreated
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOpportunityCreated {
    pub event_id: EventId,
    pub sales_opportunity_id: SalesOpportunityId,
    pub client_id: ClientId,
    pub sales_rep_id: SalespersonId,
    pub title: String,
    pub value: f64,
    pub occurred_at: Timestamp,
}

domain_event!(
    SalesOpportunityCreated,
    event_type = "sales_opportunity.created",
    aggregate_id = sales_opportunity_id,
    aggregate_type = "SalesOpportunity",
    occurred_at = occurred_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// SalesOpportunityHighValue
// ════════════════════════════════════════════════════════════════════════════

/// Published when an opportunity's value changes to at least the
/// high-value threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOpportunityHighValue {
    pub event_id: EventId,
    pub sales_opportunity_id: SalesOpportunityId,
    pub sales_rep_id: SalespersonId,
    pub title: String,

    /// Value before the change.
    pub previous_value: f64,

    /// New value, at or above the threshold.
    pub value: f64,

    pub occurred_at: Timestamp,
}

domain_event!(
    SalesOpportunityHighValue,
    event_type = "sales_opportunity.high_value",
    aggregate_id = sales_opportunity_id,
    aggregate_type = "SalesOpportunity",
    occurred_at = occurred_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// SalesOpportunityStatusUpdated
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOpportunityStatusUpdated {
    pub event_id: EventId,
    pub sales_opportunity_id: SalesOpportunityId,
    pub sales_rep_id: SalespersonId,
    pub title: String,
    pub previous_status: SalesOpportunityStatus,
    pub status: SalesOpportunityStatus,
    pub occurred_at: Timestamp,
}

domain_event!(
    SalesOpportunityStatusUpdated,
    event_type = "sales_opportunity.status_updated",
    aggregate_id = sales_opportunity_id,
    aggregate_type = "SalesOpportunity",
    occurred_at = occurred_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// SalesOpportunityLost
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOpportunityLost {
    pub event_id: EventId,
    pub sales_opportunity_id: SalesOpportunityId,
    pub sales_rep_id: SalespersonId,
    pub title: String,
    pub value: f64,

    /// Status the opportunity was lost from.
    pub previous_status: SalesOpportunityStatus,

    pub occurred_at: Timestamp,
}

domain_event!(
    SalesOpportunityLost,
    event_type = "sales_opportunity.lost",
    aggregate_id = sales_opportunity_id,
    aggregate_type = "SalesOpportunity",
    occurred_at = occurred_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// SalesOpportunityDelivered
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOpportunityDelivered {
    pub event_id: EventId,
    pub sales_opportunity_id: SalesOpportunityId,
    pub sales_rep_id: SalespersonId,
    pub title: String,
    pub value: f64,
    pub delivery_photo_url: String,
    pub occurred_at: Timestamp,
}

domain_event!(
    SalesOpportunityDelivered,
    event_type = "sales_opportunity.delivered",
    aggregate_id = sales_opportunity_id,
    aggregate_type = "SalesOpportunity",
    occurred_at = occurred_at,
    event_id = event_id
);
