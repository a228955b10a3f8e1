// catalog_service/src/main.rs

use actix_cors::Cors;
use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use catalog_service::config::AppConfig;
use catalog_service::db::{self, PgCatalogStore};
use catalog_service::state::AppState;
use catalog_service::web::configure_app_routes;
use std::env;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing() {
  // RUST_LOG overrides the default INFO level; LOG_FORMAT=json switches to JSON lines.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  let json = env::var("LOG_FORMAT").map(|v| v.eq_ignore_ascii_case("json")).unwrap_or(false);
  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok(); // LOG_FORMAT may come from .env
  init_tracing();

  tracing::info!("Starting product catalog server...");

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;

  let db_pool = db::connect_pool(&app_config.database)
    .await
    .context("Failed to create the database connection pool")?;

  let app_state = AppState::new(Arc::new(PgCatalogStore::new(db_pool.clone())));

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  // actix-web stops the server on SIGINT/SIGTERM; `run()` resolves once it has.
  HttpServer::new(move || {
    let cors = Cors::default()
      .allow_any_origin()
      .allowed_methods(vec!["GET"])
      .allow_any_header()
      .max_age(3600);

    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(cors)
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .shutdown_timeout(app_config.shutdown_grace.as_secs())
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")?;

  tracing::info!("Server stopped.");
  db::close_pool(&db_pool, app_config.shutdown_grace).await;
  Ok(())
}
