//! CRM connection probe

use actix_web::{HttpResponse, web};
use tracing::debug;

use crate::server::state::AppState;

/// GET /api/crm/test — attempt authentication and report the outcome.
/// Never fails the HTTP call; the status lives in the body.
pub async fn test_connection(state: web::Data<AppState>) -> HttpResponse {
    debug!("CRM connection probe requested");
    let status = state.crm.test_connection().await;
    HttpResponse::Ok().json(status)
}
