//! End-to-end flows through the wired application.
//!
//! Uses the in-memory repositories with the fake hasher and encrypter, so
//! every test is hermetic.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secrecy::SecretString;

use sales_crm::adapters::crypto::{FakeEncrypter, FakeHasher};
use sales_crm::adapters::memory::{
    InMemoryClientsRepository, InMemorySalesOpportunitiesRepository,
    InMemorySalespersonsRepository,
};
use sales_crm::application::events::DomainEvents;
use sales_crm::application::handlers::*;
use sales_crm::application::CrmError;
use sales_crm::bootstrap::{CrmApp, CrmDependencies, SeedOutcome};
use sales_crm::config::SeedConfig;
use sales_crm::domain::events::{CrmEvent, EventKind};
use sales_crm::domain::foundation::{DomainError, Entity, Page, SalespersonId};
use sales_crm::domain::sales_opportunity::SalesOpportunityStatus;
use sales_crm::ports::EventHandler;

// =============================================================================
// Test Infrastructure
// =============================================================================

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<EventKind>>>);

impl Recorder {
    fn kinds(&self) -> Vec<EventKind> {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventHandler for Recorder {
    async fn handle(&self, event: &CrmEvent) -> Result<(), DomainError> {
        self.0.lock().unwrap().push(event.kind());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Recorder"
    }
}

fn app() -> CrmApp {
    let hasher = Arc::new(FakeHasher);
    let deps = CrmDependencies {
        salespersons: Arc::new(InMemorySalespersonsRepository::new()),
        clients: Arc::new(InMemoryClientsRepository::new()),
        opportunities: Arc::new(InMemorySalesOpportunitiesRepository::new()),
        hash_generator: hasher.clone(),
        hash_comparer: hasher,
        encrypter: Arc::new(FakeEncrypter),
    };
    CrmApp::new(deps, Arc::new(DomainEvents::new()))
}

async fn seed_manager(app: &CrmApp) -> SalespersonId {
    let seed = SeedConfig {
        enabled: true,
        admin_email: "manager@crm.com".to_string(),
        admin_password: Some(SecretString::new("123456".to_string())),
        ..Default::default()
    };
    match app.seed_admin(&seed).await.unwrap() {
        SeedOutcome::Created(id) => id,
        other => panic!("expected a new manager, got {:?}", other),
    }
}

async fn register_rep(app: &CrmApp, manager_id: SalespersonId, email: &str) -> SalespersonId {
    app.salespersons
        .register
        .handle(RegisterSalespersonCommand {
            executor_id: manager_id,
            name: "Rep".to_string(),
            email: email.to_string(),
            password: "123456".to_string(),
            phone: "+55 11 99999-0000".to_string(),
        })
        .await
        .unwrap()
        .salesperson
        .id()
}

fn login(email: &str, password: &str) -> AuthenticateSalespersonCommand {
    AuthenticateSalespersonCommand {
        email: email.to_string(),
        password: password.to_string(),
    }
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn registered_rep_can_log_in_until_inactivated() {
    let app = app();
    let manager_id = seed_manager(&app).await;
    let rep_id = register_rep(&app, manager_id, "rep@crm.com").await;

    let token = app
        .salespersons
        .authenticate
        .handle(login("rep@crm.com", "123456"))
        .await;
    assert!(token.is_ok_and(|t| !t.access_token.is_empty()));

    let wrong = app
        .salespersons
        .authenticate
        .handle(login("rep@crm.com", "654321"))
        .await;
    assert_eq!(wrong, Err(CrmError::WrongCredentials));

    app.salespersons
        .inactivate
        .handle(InactivateSalespersonCommand {
            executor_id: manager_id,
            salesperson_id: rep_id,
        })
        .await
        .unwrap();

    let inactive = app
        .salespersons
        .authenticate
        .handle(login("rep@crm.com", "123456"))
        .await;
    assert_eq!(
        inactive,
        Err(CrmError::SalespersonDeactive {
            salesperson_id: rep_id
        })
    );
}

#[tokio::test]
async fn unknown_email_is_not_found() {
    let app = app();
    let result = app
        .salespersons
        .authenticate
        .handle(login("nobody@crm.com", "123456"))
        .await;
    assert_eq!(result, Err(CrmError::SalespersonNotFound));
}

// =============================================================================
// Clients
// =============================================================================

#[tokio::test]
async fn reps_register_clients_only_for_themselves() {
    let app = app();
    let manager_id = seed_manager(&app).await;
    let owner = register_rep(&app, manager_id, "owner@crm.com").await;
    let other = register_rep(&app, manager_id, "other@crm.com").await;

    let command = |executor_id| RegisterClientCommand {
        executor_id,
        name: "Acme".to_string(),
        email: "buyer@acme.com".to_string(),
        phone: "+55 11 98888-0000".to_string(),
        segment: "retail".to_string(),
        sales_rep_id: owner,
    };

    let denied = app.clients.register.handle(command(other)).await;
    assert_eq!(denied, Err(CrmError::NotAllowed));

    let client = app.clients.register.handle(command(owner)).await.unwrap().client;
    assert_eq!(client.creator_id(), owner);

    let duplicate = app.clients.register.handle(command(manager_id)).await;
    assert_eq!(
        duplicate,
        Err(CrmError::ClientAlreadyExists {
            email: "buyer@acme.com".to_string()
        })
    );
}

// =============================================================================
// Sales opportunity pipeline
// =============================================================================

#[tokio::test]
async fn opportunity_pipeline_dispatches_events_in_order() {
    let app = app();
    let recorder = Recorder::default();
    app.events
        .register_all(Arc::new(recorder.clone()), &EventKind::ALL);

    let manager_id = seed_manager(&app).await;
    let rep_id = register_rep(&app, manager_id, "rep@crm.com").await;
    let client = app
        .clients
        .register
        .handle(RegisterClientCommand {
            executor_id: rep_id,
            name: "Acme".to_string(),
            email: "buyer@acme.com".to_string(),
            phone: String::new(),
            segment: "retail".to_string(),
            sales_rep_id: rep_id,
        })
        .await
        .unwrap()
        .client;

    let opportunity = app
        .sales_opportunities
        .register
        .handle(RegisterSalesOpportunityCommand {
            executor_id: rep_id,
            client_id: client.id(),
            sales_rep_id: None,
            title: "Fleet renewal".to_string(),
            description: "40 vans".to_string(),
            value: 1_000.0,
        })
        .await
        .unwrap()
        .sales_opportunity;

    app.sales_opportunities
        .update
        .handle(UpdateSalesOpportunityCommand {
            executor_id: rep_id,
            sales_opportunity_id: opportunity.id(),
            title: "Fleet renewal".to_string(),
            description: "40 vans".to_string(),
            value: 50_000.0,
            status: SalesOpportunityStatus::Won,
        })
        .await
        .unwrap();

    let delivered = app
        .sales_opportunities
        .mark_as_delivered
        .handle(MarkSalesOpportunityAsDeliveredCommand {
            executor_id: rep_id,
            sales_opportunity_id: opportunity.id(),
            delivery_photo_url: "https://cdn.crm.com/proof.jpg".to_string(),
        })
        .await
        .unwrap()
        .sales_opportunity;

    assert_eq!(delivered.status(), SalesOpportunityStatus::Delivered);
    assert_eq!(
        recorder.kinds(),
        vec![
            EventKind::SalespersonCreated,
            EventKind::SalespersonCreated,
            EventKind::ClientCreated,
            EventKind::SalesOpportunityCreated,
            EventKind::SalesOpportunityHighValue,
            EventKind::SalesOpportunityStatusUpdated,
            EventKind::SalesOpportunityDelivered,
        ]
    );

    let lost = app
        .sales_opportunities
        .mark_as_lost
        .handle(MarkSalesOpportunityAsLostCommand {
            executor_id: rep_id,
            sales_opportunity_id: opportunity.id(),
        })
        .await;
    assert_eq!(
        lost,
        Err(CrmError::CantMarkSalesOpportunityAsLost {
            status: SalesOpportunityStatus::Delivered
        })
    );
    assert_eq!(recorder.kinds().len(), 7);
}

#[tokio::test]
async fn reps_only_see_their_own_opportunities() {
    let app = app();
    let manager_id = seed_manager(&app).await;
    let rep_id = register_rep(&app, manager_id, "rep@crm.com").await;
    let other_id = register_rep(&app, manager_id, "other@crm.com").await;

    let client = app
        .clients
        .register
        .handle(RegisterClientCommand {
            executor_id: manager_id,
            name: "Acme".to_string(),
            email: "buyer@acme.com".to_string(),
            phone: String::new(),
            segment: "retail".to_string(),
            sales_rep_id: rep_id,
        })
        .await
        .unwrap()
        .client;
    app.sales_opportunities
        .register
        .handle(RegisterSalesOpportunityCommand {
            executor_id: rep_id,
            client_id: client.id(),
            sales_rep_id: None,
            title: "Fleet renewal".to_string(),
            description: String::new(),
            value: 1_000.0,
        })
        .await
        .unwrap();

    let fetch = |executor_id, salesperson_id| FetchSalesOpportunitiesQuery {
        executor_id,
        salesperson_id,
        page: Page::first(),
    };

    let own = app
        .sales_opportunities
        .fetch
        .handle(fetch(rep_id, None))
        .await
        .unwrap();
    assert_eq!(own.sales_opportunities.len(), 1);

    let managed = app
        .sales_opportunities
        .fetch
        .handle(fetch(manager_id, Some(rep_id)))
        .await
        .unwrap();
    assert_eq!(managed.sales_opportunities.len(), 1);

    let snooping = app
        .sales_opportunities
        .fetch
        .handle(fetch(other_id, Some(rep_id)))
        .await;
    assert_eq!(snooping, Err(CrmError::NotAllowed));
}

// =============================================================================
// Dispatcher isolation
// =============================================================================

#[tokio::test]
async fn cleared_handlers_see_nothing() {
    let app = app();
    let recorder = Recorder::default();
    app.events
        .register(Arc::new(recorder.clone()), EventKind::SalespersonCreated);

    app.events.clear_handlers();
    seed_manager(&app).await;

    assert!(recorder.kinds().is_empty());
}
