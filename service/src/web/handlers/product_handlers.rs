// catalog_service/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::instrument;

use super::reply_to_response;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub search: Option<String>,
}

#[instrument(name = "handler::list_products", skip(app_state, query_params), fields(search = ?query_params.search))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let reply = app_state.catalog.list_products(query_params.search.as_deref()).await;
  reply_to_response(reply)
}

// The id stays a raw string here so that malformed ids get the catalog's
// JSON client-error reply instead of actix's plain-text path error.
#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let raw_id = path.into_inner();
  let reply = app_state.catalog.product_detail(&raw_id).await;
  reply_to_response(reply)
}
