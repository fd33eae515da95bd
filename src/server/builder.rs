//! Server assembly and startup

use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::config::ServerConfig;
use crate::core::crm::{CrmClient, CrmConfig};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::Result;

/// Build the shared state and run the HTTP server until shutdown.
///
/// CRM connection settings are read here but not validated: their absence
/// surfaces on the first CRM operation, not at startup.
pub async fn run_server() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    let crm = CrmClient::new(CrmConfig::from_env())?;
    let state = AppState::new(config.clone(), crm);

    state.limiter.clone().start_cleanup_task();

    info!("lead gateway listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
