// catalog_service/src/web/routes.rs

use crate::errors::AppError;
use crate::web::handlers::{health_handlers, product_handlers};
use actix_web::web;

/// Registers the catalog routes at the root and again under `/api`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(
      web::QueryConfig::default()
        .error_handler(|_err, _req| AppError::Validation("Invalid query string".to_string()).into()),
    )
    .service(web::scope("/api").configure(catalog_routes))
    .configure(catalog_routes);
}

fn catalog_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Health Check Route
    .route("/health", web::get().to(health_handlers::health_check_handler))
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
    );
}
