//! Salesperson aggregate entity.
//!
//! Salespeople are the accounts that authenticate and act on the CRM.
//! Their role decides which operations they may perform on resources
//! owned by other salespeople.

use super::{SalespersonCreated, SalespersonRole};
use crate::domain::events::CrmEvent;
use crate::domain::foundation::{
    AggregateRoot, Entity, EventId, PendingEvents, SalespersonId, Timestamp,
};

/// Salesperson aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `email` uniqueness is enforced by the use cases, not here
/// - `password_hash` is never the plaintext password
#[derive(Debug, Clone)]
pub struct Salesperson {
    id: SalespersonId,
    name: String,
    email: String,
    password_hash: String,
    phone: String,
    role: SalespersonRole,
    is_active: bool,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
    events: PendingEvents<CrmEvent>,
}

impl Salesperson {
    /// Create a new, active salesperson and raise `SalespersonCreated`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        phone: impl Into<String>,
        role: SalespersonRole,
    ) -> Self {
        let mut salesperson = Self {
            id: SalespersonId::new(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            phone: phone.into(),
            role,
            is_active: true,
            created_at: Timestamp::now(),
            updated_at: None,
            events: PendingEvents::new(),
        };

        let event = SalespersonCreated {
            event_id: EventId::new(),
            salesperson_id: salesperson.id,
            name: salesperson.name.clone(),
            email: salesperson.email.clone(),
            role: salesperson.role,
            occurred_at: salesperson.created_at,
        };
        salesperson.add_domain_event(event.into());
        salesperson
    }

    /// Reconstitute a salesperson from persistence (no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SalespersonId,
        name: String,
        email: String,
        password_hash: String,
        phone: String,
        role: SalespersonRole,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            phone,
            role,
            is_active,
            created_at,
            updated_at,
            events: PendingEvents::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn role(&self) -> SalespersonRole {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the salesperson was last modified, if ever.
    pub fn updated_at(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }

    /// Managers may act for anyone; others only for themselves.
    pub fn can_act_for(&self, sales_rep_id: &SalespersonId) -> bool {
        self.is_manager() || self.id == *sales_rep_id
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

    pub fn update_role(&mut self, role: SalespersonRole) {
        self.role = role;
        self.touch();
    }

    pub fn update_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.touch();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Timestamp::now());
    }
}

impl Entity for Salesperson {
    type Id = SalespersonId;

    fn id(&self) -> SalespersonId {
        self.id
    }
}

impl AggregateRoot for Salesperson {
    type Event = CrmEvent;

    fn pending_events(&self) -> &PendingEvents<CrmEvent> {
        &self.events
    }

    fn pending_events_mut(&mut self) -> &mut PendingEvents<CrmEvent> {
        &mut self.events
    }
}

impl PartialEq for Salesperson {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Salesperson {}
