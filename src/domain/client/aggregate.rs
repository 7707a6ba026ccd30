//! Client aggregate entity.

use super::{ClientCreated, ClientStatus};
use crate::domain::events::CrmEvent;
use crate::domain::foundation::{
    AggregateRoot, ClientId, Entity, EventId, OwnedBySalesRep, PendingEvents, SalespersonId,
    Timestamp,
};

/// Client aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `sales_rep_id` always names the owning salesperson
/// - `email` uniqueness is enforced by the use cases
#[derive(Debug, Clone)]
pub struct Client {
    id: ClientId,
    creator_id: SalespersonId,
    name: String,
    email: String,
    phone: String,
    segment: String,
    status: ClientStatus,
    sales_rep_id: SalespersonId,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
    events: PendingEvents<CrmEvent>,
}

impl Client {
    /// Create a new lead and raise `ClientCreated`.
    ///
    /// The creator defaults to the sales rep when not given.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        segment: impl Into<String>,
        sales_rep_id: SalespersonId,
        creator_id: Option<SalespersonId>,
    ) -> Self {
        let mut client = Self {
            id: ClientId::new(),
            creator_id: creator_id.unwrap_or(sales_rep_id),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            segment: segment.into(),
            status: ClientStatus::Lead,
            sales_rep_id,
            created_at: Timestamp::now(),
            updated_at: None,
            events: PendingEvents::new(),
        };

        let event = ClientCreated {
            event_id: EventId::new(),
            client_id: client.id,
            sales_rep_id: client.sales_rep_id,
            creator_id: client.creator_id,
            name: client.name.clone(),
            email: client.email.clone(),
            occurred_at: client.created_at,
        };
        client.add_domain_event(event.into());
        client
    }

    /// Reconstitute a client from persistence (no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ClientId,
        creator_id: SalespersonId,
        name: String,
        email: String,
        phone: String,
        segment: String,
        status: ClientStatus,
        sales_rep_id: SalespersonId,
        created_at: Timestamp,
        updated_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            creator_id,
            name,
            email,
            phone,
            segment,
            status,
            sales_rep_id,
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

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Free-text market segment.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn status(&self) -> ClientStatus {
        self.status
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

    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn update_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.touch();
    }

    pub fn update_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
        self.touch();
    }

    pub fn update_segment(&mut self, segment: impl Into<String>) {
        self.segment = segment.into();
        self.touch();
    }

    /// Reassign the client to another salesperson.
    pub fn update_sales_rep_id(&mut self, sales_rep_id: SalespersonId) {
        self.sales_rep_id = sales_rep_id;
        self.touch();
    }

    pub fn activate(&mut self) {
        self.status = ClientStatus::Active;
        self.touch();
    }

    pub fn inactivate(&mut self) {
        self.status = ClientStatus::Inactive;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Timestamp::now());
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> ClientId {
        self.id
    }
}

impl AggregateRoot for Client {
    type Event = CrmEvent;

    fn pending_events(&self) -> &PendingEvents<CrmEvent> {
        &self.events
    }

    fn pending_events_mut(&mut self) -> &mut PendingEvents<CrmEvent> {
        &mut self.events
    }
}

impl OwnedBySalesRep for Client {
    fn sales_rep_id(&self) -> SalespersonId {
        self.sales_rep_id
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Client {}
