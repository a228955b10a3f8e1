// catalog_service/src/web/handlers/mod.rs

// Declare handler modules
pub mod health_handlers;
pub mod product_handlers;

use crate::errors::AppError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use catalog_core::Reply;

/// Renders a classified catalog reply as an HTTP response.
pub(crate) fn reply_to_response(reply: Reply) -> Result<HttpResponse, AppError> {
  let status = StatusCode::from_u16(reply.status)
    .map_err(|e| AppError::Internal(format!("Invalid status code {}: {}", reply.status, e)))?;
  Ok(HttpResponse::build(status).json(reply.body))
}
