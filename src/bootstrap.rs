//! Composition root.
//!
//! [`CrmApp`] owns the dispatcher, the repositories and the cryptography
//! collaborators, and constructs one handler per use case.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use crate::adapters::crypto::{HmacPasswordHasher, JwtEncrypter};
use crate::adapters::memory::{
    InMemoryClientsRepository, InMemorySalesOpportunitiesRepository,
    InMemorySalespersonsRepository,
};
use crate::application::events::{register_notification_handlers, DomainEvents};
use crate::application::handlers::*;
use crate::application::CrmError;
use crate::config::{AppConfig, SeedConfig};
use crate::domain::foundation::{Entity, SalespersonId};
use crate::domain::salesperson::{Salesperson, SalespersonRole};
use crate::ports::{
    ClientsRepository, Encrypter, HashComparer, HashGenerator, SalesOpportunitiesRepository,
    SalespersonsRepository,
};

/// Collaborators every handler is built from.
pub struct CrmDependencies {
    pub salespersons: Arc<dyn SalespersonsRepository>,
    pub clients: Arc<dyn ClientsRepository>,
    pub opportunities: Arc<dyn SalesOpportunitiesRepository>,
    pub hash_generator: Arc<dyn HashGenerator>,
    pub hash_comparer: Arc<dyn HashComparer>,
    pub encrypter: Arc<dyn Encrypter>,
}

pub struct SalespersonHandlers {
    pub authenticate: AuthenticateSalespersonHandler,
    pub register: RegisterSalespersonHandler,
    pub update: UpdateSalespersonHandler,
    pub update_password: UpdateSalespersonPasswordHandler,
    pub inactivate: InactivateSalespersonHandler,
    pub fetch: FetchSalespersonsHandler,
    pub get_by_id: GetSalespersonByIdHandler,
}

pub struct ClientHandlers {
    pub register: RegisterClientHandler,
    pub update: UpdateClientHandler,
    pub inactivate: InactivateClientHandler,
    pub get_by_id: GetClientByIdHandler,
    pub fetch: FetchClientsHandler,
}

pub struct SalesOpportunityHandlers {
    pub register: RegisterSalesOpportunityHandler,
    pub update: UpdateSalesOpportunityHandler,
    pub get_by_id: GetSalesOpportunityByIdHandler,
    pub fetch: FetchSalesOpportunitiesHandler,
    pub mark_as_lost: MarkSalesOpportunityAsLostHandler,
    pub mark_as_delivered: MarkSalesOpportunityAsDeliveredHandler,
}

/// What [`CrmApp::seed_admin`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Disabled,
    AlreadyPresent(SalespersonId),
    Created(SalespersonId),
}

/// The wired application: every use case, sharing one dispatcher.
pub struct CrmApp {
    pub events: Arc<DomainEvents>,
    pub salespersons: SalespersonHandlers,
    pub clients: ClientHandlers,
    pub sales_opportunities: SalesOpportunityHandlers,
    deps: CrmDependencies,
}

impl CrmApp {
    /// Builds every handler over `deps`. Event subscriptions are left to the caller.
    pub fn new(deps: CrmDependencies, events: Arc<DomainEvents>) -> Self {
        let salespersons = SalespersonHandlers {
            authenticate: AuthenticateSalespersonHandler::new(
                deps.salespersons.clone(),
                deps.hash_comparer.clone(),
                deps.encrypter.clone(),
            ),
            register: RegisterSalespersonHandler::new(
                deps.salespersons.clone(),
                deps.hash_generator.clone(),
                events.clone(),
            ),
            update: UpdateSalespersonHandler::new(deps.salespersons.clone(), events.clone()),
            update_password: UpdateSalespersonPasswordHandler::new(
                deps.salespersons.clone(),
                deps.hash_generator.clone(),
                events.clone(),
            ),
            inactivate: InactivateSalespersonHandler::new(deps.salespersons.clone(), events.clone()),
            fetch: FetchSalespersonsHandler::new(deps.salespersons.clone()),
            get_by_id: GetSalespersonByIdHandler::new(deps.salespersons.clone()),
        };

        let clients = ClientHandlers {
            register: RegisterClientHandler::new(
                deps.salespersons.clone(),
                deps.clients.clone(),
                events.clone(),
            ),
            update: UpdateClientHandler::new(
                deps.salespersons.clone(),
                deps.clients.clone(),
                events.clone(),
            ),
            inactivate: InactivateClientHandler::new(
                deps.salespersons.clone(),
                deps.clients.clone(),
                events.clone(),
            ),
            get_by_id: GetClientByIdHandler::new(deps.salespersons.clone(), deps.clients.clone()),
            fetch: FetchClientsHandler::new(deps.salespersons.clone(), deps.clients.clone()),
        };

        let sales_opportunities = SalesOpportunityHandlers {
            register: RegisterSalesOpportunityHandler::new(
                deps.salespersons.clone(),
                deps.clients.clone(),
                deps.opportunities.clone(),
                events.clone(),
            ),
            update: UpdateSalesOpportunityHandler::new(
                deps.salespersons.clone(),
                deps.opportunities.clone(),
                events.clone(),
            ),
            get_by_id: GetSalesOpportunityByIdHandler::new(
                deps.salespersons.clone(),
                deps.opportunities.clone(),
            ),
            fetch: FetchSalesOpportunitiesHandler::new(
                deps.salespersons.clone(),
                deps.opportunities.clone(),
            ),
            mark_as_lost: MarkSalesOpportunityAsLostHandler::new(
                deps.salespersons.clone(),
                deps.opportunities.clone(),
                events.clone(),
            ),
            mark_as_delivered: MarkSalesOpportunityAsDeliveredHandler::new(
                deps.salespersons.clone(),
                deps.opportunities.clone(),
                events.clone(),
            ),
        };

        Self {
            events,
            salespersons,
            clients,
            sales_opportunities,
            deps,
        }
    }

    /// In-memory storage, HMAC password hashes, JWT tokens and the
    /// notification subscribers.
    pub fn in_memory(config: &AppConfig) -> Self {
        let hasher = Arc::new(HmacPasswordHasher::new(reveal_copy(
            &config.auth.password_pepper,
        )));
        let encrypter = JwtEncrypter::new(
            reveal_copy(&config.auth.jwt_secret),
            config.auth.token_ttl_secs,
            config.auth.issuer.clone(),
        );

        let deps = CrmDependencies {
            salespersons: Arc::new(InMemorySalespersonsRepository::new()),
            clients: Arc::new(InMemoryClientsRepository::new()),
            opportunities: Arc::new(InMemorySalesOpportunitiesRepository::new()),
            hash_generator: hasher.clone(),
            hash_comparer: hasher,
            encrypter: Arc::new(encrypter),
        };

        let events = Arc::new(DomainEvents::new());
        register_notification_handlers(&events);
        Self::new(deps, events)
    }

    /// Ensures a manager account exists for the configured admin email.
    ///
    /// Running it again with the same email is a no-op.
    pub async fn seed_admin(&self, seed: &SeedConfig) -> Result<SeedOutcome, CrmError> {
        if !seed.enabled {
            return Ok(SeedOutcome::Disabled);
        }

        if let Some(existing) = self.deps.salespersons.find_by_email(&seed.admin_email).await? {
            info!(salesperson_id = %existing.id(), "admin account already present");
            return Ok(SeedOutcome::AlreadyPresent(existing.id()));
        }

        let Some(password) = seed.admin_password.as_ref() else {
            warn!("seed enabled without an admin password; skipping");
            return Ok(SeedOutcome::Disabled);
        };

        let password_hash = self
            .deps
            .hash_generator
            .hash(password.expose_secret())
            .await?;
        let mut admin = Salesperson::new(
            seed.admin_name.clone(),
            seed.admin_email.clone(),
            password_hash,
            seed.admin_phone.clone(),
            SalespersonRole::Manager,
        );
        self.deps.salespersons.create(&admin).await?;
        self.events.publish(&mut admin).await;

        info!(salesperson_id = %admin.id(), "admin account created");
        Ok(SeedOutcome::Created(admin.id()))
    }
}

// `SecretString` is not `Clone`; adapters take their own copy.
fn reveal_copy(secret: &SecretString) -> SecretString {
    SecretString::new(secret.expose_secret().clone())
}
