use std::error::Error;

use sales_crm::bootstrap::{CrmApp, SeedOutcome};
use sales_crm::config::AppConfig;
use sales_crm::observability::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 1. Load and validate configuration
    let config = AppConfig::load()?;
    config.validate()?;

    // 2. Initialize tracing
    init_tracing(&config.logging);
    info!(environment = ?config.logging.environment, "starting sales-crm");

    // 3. Wire the application
    let app = CrmApp::in_memory(&config);

    // 4. Seed the admin account
    if let SeedOutcome::Created(id) = app.seed_admin(&config.seed).await? {
        info!(salesperson_id = %id, "seeded admin account");
    }

    info!("sales-crm ready; press ctrl-c to stop");
    tokio::signal::ctrl_c().await?;
    info!("shutting down");

    Ok(())
}
