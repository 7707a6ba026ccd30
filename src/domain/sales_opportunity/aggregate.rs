//! SalesOpportunity aggregate entity.
//!
//! A sales opportunity is a potential deal with a client, tracked through
//! the pipeline from `open` to either `lost` or `delivered`.
//!
//! # State machine
//!
//! `mark_as_lost` and `mark_as_delivered` are guarded transitions.
//! `update_status` is an unguarded setter used by the update use case.

use super::{
    SalesOpportunityCreated, SalesOpportunityDelivered, SalesOpportunityError,
    SalesOpportunityHighValue, SalesOpportunityLost, SalesOpportunityStatus,
    SalesOpportunityStatusUpdated,
};
use crate::domain::events::CrmEvent;
use crate::domain::foundation::{
    AggregateRoot, ClientId, Entity, EventId, OwnedBySalesRep, PendingEvents, SalesOpportunityId,
    SalespersonId, Timestamp,
};

/// Values at or above this raise `SalesOpportunityHighValue`.
pub const HIGH_VALUE_THRESHOLD: f64 = 10_000.0;

/// SalesOpportunity aggregate.
///
/// # Invariants
///
/// - `mark_as_lost` only succeeds from `open` or `in_progress`
/// - `mark_as_delivered` only succeeds from `won`, with a non-blank photo URL
/// - `delivery_photo_url` is only ever set by `mark_as_delivered`
///
/// [`update_status`](Self::update_status) bypasses both guards, so a deal
/// moved to `delivered` through it has no photo.
#[derive(Debug, Clone)]
pub struct SalesOpportunity {
    id: SalesOpportunityId,
    creator_id: SalespersonId,
    client_id: ClientId,
    sales_rep_id: SalespersonId,
    title: String,
    description: String,
    value: f64,
    status: SalesOpportunityStatus,
    delivery_photo_url: Option<String>,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
    events: PendingEvents<CrmEvent>,
}

impl SalesOpportunity {
    /// Create a new open opportunity and raise `SalesOpportunityCreated`.
    pub fn new(
        creator_id: SalespersonId,
        client_id: ClientId,
        sales_rep_id: SalespersonId,
        title: impl Into<String>,
        description: impl Into<String>,
        value: f64,
    ) -> Self {
        let mut opportunity = Self {
            id: SalesOpportunityId::new(),
            creator_id,
            client_id,
            sales_rep_id,
            title: title.into(),
            description: description.into(),
            value,
            status: SalesOpportunityStatus::Open,
            delivery_photo_url: None,
            created_at: Timestamp::now(),
            updated_at: None,
            events: PendingEvents::new(),
        };

        let event = SalesOpportunityCreated {
            event_id: EventId::new(),
            sales_opportunity_id: opportunity.id,
            client_id,
            sales_rep_id,
            title: opportunity.title.clone(),
            value,
            occurred_at: opportunity.created_at,
        };
        opportunity.add_domain_event(event.into());
        opportunity
    }

    /// Reconstitute an opportunity from persistence (no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SalesOpportunityId,
        creator_id: SalespersonId,
        client_id: ClientId,
        sales_rep_id: SalespersonId,
        title: String,
        description: String,
        value: f64,
        status: SalesOpportunityStatus,
        delivery_photo_url: Option<String>,
        created_at: Timestamp,
        updated_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            creator_id,
            client_id,
            sales_rep_id,
            title,
            description,
            value,
            status,
            delivery_photo_url,
            created_at,
            updated_at,
            events: PendingEvents::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn creator_id(&self) -> SalespersonId {
        self.creator_id
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn status(&self) -> SalesOpportunityStatus {
        self.status
    }

    pub fn delivery_photo_url(&self) -> Option<&str> {
        self.delivery_photo_url.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn update_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    /// Set the value. A change to [`HIGH_VALUE_THRESHOLD`] or more raises
    /// `SalesOpportunityHighValue`.
    pub fn update_value(&mut self, value: f64) {
        let previous_value = self.value;
        self.value = value;
        self.touch();

        if value != previous_value && value >= HIGH_VALUE_THRESHOLD {
            let event = SalesOpportunityHighValue {
                event_id: EventId::new(),
                sales_opportunity_id: self.id,
                sales_rep_id: self.sales_rep_id,
                title: self.title.clone(),
                previous_value,
                value,
                occurred_at: Timestamp::now(),
            };
            self.add_domain_event(event.into());
        }
    }

    /// Set the status without transition checks. A change raises
    /// `SalesOpportunityStatusUpdated`.
    ///
    /// Skips the state machine: `lost` and `delivered` are reachable from
    /// any status, and `delivery_photo_url` is left untouched.
    pub fn update_status(&mut self, status: SalesOpportunityStatus) {
        let previous_status = self.status;
        self.status = status;
        self.touch();

        if status != previous_status {
            let event = SalesOpportunityStatusUpdated {
                event_id: EventId::new(),
                sales_opportunity_id: self.id,
                sales_rep_id: self.sales_rep_id,
                title: self.title.clone(),
                previous_status,
                status,
                occurred_at: Timestamp::now(),
            };
            self.add_domain_event(event.into());
        }
    }

    /// Mark the opportunity as lost.
    ///
    /// # Errors
    ///
    /// - `CantMarkAsLost` unless the status is `open` or `in_progress`
    pub fn mark_as_lost(&mut self) -> Result<(), SalesOpportunityError> {
        if !self.status.can_be_lost() {
            return Err(SalesOpportunityError::CantMarkAsLost {
                status: self.status,
            });
        }

        let previous_status = self.status;
        self.status = SalesOpportunityStatus::Lost;
        self.touch();

        let event = SalesOpportunityLost {
            event_id: EventId::new(),
            sales_opportunity_id: self.id,
            sales_rep_id: self.sales_rep_id,
            title: self.title.clone(),
            value: self.value,
            previous_status,
            occurred_at: Timestamp::now(),
        };
        self.add_domain_event(event.into());
        Ok(())
    }

    /// Mark a won opportunity as delivered, keeping the proof photo.
    ///
    /// # Errors
    ///
    /// - `WrongStatus` unless the status is `won` (checked first)
    /// - `PhotoUrlRequired` if `photo_url` is blank
    pub fn mark_as_delivered(
        &mut self,
        photo_url: impl Into<String>,
    ) -> Result<(), SalesOpportunityError> {
        if self.status != SalesOpportunityStatus::Won {
            return Err(SalesOpportunityError::WrongStatus {
                status: self.status,
            });
        }

        let photo_url = photo_url.into();
        if photo_url.trim().is_empty() {
            return Err(SalesOpportunityError::PhotoUrlRequired);
        }

        self.status = SalesOpportunityStatus::Delivered;
        self.delivery_photo_url = Some(photo_url.clone());
        self.touch();

        let event = SalesOpportunityDelivered {
            event_id: EventId::new(),
            sales_opportunity_id: self.id,
            sales_rep_id: self.sales_rep_id,
            title: self.title.clone(),
            value: self.value,
            delivery_photo_url: photo_url,
            occurred_at: Timestamp::now(),
        };
        self.add_domain_event(event.into());
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Some(Timestamp::now());
    }
}

impl Entity for SalesOpportunity {
    type Id = SalesOpportunityId;

    fn id(&self) -> SalesOpportunityId {
        self.id
    }
}

impl AggregateRoot for SalesOpportunity {
    type Event = CrmEvent;

    fn pending_events(&self) -> &PendingEvents<CrmEvent> {
        &self.events
    }

    fn pending_events_mut(&mut self) -> &mut PendingEvents<CrmEvent> {
        &mut self.events
    }
}

impl OwnedBySalesRep for SalesOpportunity {
    fn sales_rep_id(&self) -> SalespersonId {
        self.sales_rep_id
    }
}

impl PartialEq for SalesOpportunity {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for SalesOpportunity {}
