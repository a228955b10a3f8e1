// catalog_service/src/web/handlers/health_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use super::reply_to_response;
use crate::errors::AppError;
use crate::state::AppState;

/// Reports whether the database answers a trivial probe.
#[instrument(name = "handler::health_check", skip(app_state))]
pub async fn health_check_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  reply_to_response(app_state.catalog.health().await)
}
