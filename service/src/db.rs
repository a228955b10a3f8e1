// catalog_service/src/db.rs

//! PostgreSQL side of the service: pool construction, shutdown draining, and
//! the `CatalogStore` implementation the handlers run through.

use crate::config::DatabaseConfig;
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use catalog_core::{BindValue, CatalogStore, DriverFault, Product, ProductSummary, QueryOutcome, QuerySpec};
use rust_decimal::Decimal;
use sqlx::postgres::{PgArguments, PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Builds connect options from `DATABASE_URL` when present, otherwise from
/// the individual settings.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions> {
  match &config.url {
    Some(url) => url
      .parse::<PgConnectOptions>()
      .map_err(|e| AppError::Config(format!("Invalid DATABASE_URL: {}", e))),
    None => Ok(
      PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database),
    ),
  }
}

/// Creates the bounded pool and checks that at least one connection can be
/// opened.
#[instrument(name = "db::connect_pool", skip(config), fields(max_connections = config.max_connections))]
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool> {
  let options = connect_options(config)?;
  let pool = PgPoolOptions::new()
    .max_connections(config.max_connections)
    .acquire_timeout(config.acquire_timeout)
    .connect_with(options)
    .await?;
  info!("Database connection pool created.");
  Ok(pool)
}

/// Closes the pool, waiting up to `grace` for checked-out connections to come
/// back. A timeout is logged, not returned: the process is exiting anyway.
pub async fn close_pool(pool: &PgPool, grace: Duration) {
  info!(grace_secs = grace.as_secs(), "Closing database connection pool...");
  match tokio::time::timeout(grace, pool.close()).await {
    Ok(()) => info!("Database connection pool closed."),
    Err(_) => warn!(
      in_use = pool.size().saturating_sub(pool.num_idle() as u32),
      "Timed out waiting for database connections to close."
    ),
  }
}

/// `CatalogStore` over a shared `PgPool`.
#[derive(Clone)]
pub struct PgCatalogStore {
  pool: PgPool,
}

impl PgCatalogStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Acquires one connection, runs `query` on it, and hands the connection
  /// back to the pool when the guard drops, whichever way this returns.
  async fn fetch_rows(&self, query: &QuerySpec) -> std::result::Result<Vec<PgRow>, DriverFault> {
    let mut conn = self.pool.acquire().await.map_err(driver_fault)?;
    let rows = bind_query(query).fetch_all(&mut *conn).await.map_err(driver_fault)?;
    debug!(rows = rows.len(), "Statement executed.");
    Ok(rows)
  }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
  async fn fetch_summaries(&self, query: &QuerySpec) -> QueryOutcome<ProductSummary> {
    let mapped = self
      .fetch_rows(query)
      .await
      .and_then(|rows| rows.iter().map(summary_from_row).collect::<std::result::Result<Vec<_>, _>>());
    QueryOutcome::from(mapped)
  }

  async fn fetch_products(&self, query: &QuerySpec) -> QueryOutcome<Product> {
    let mapped = self
      .fetch_rows(query)
      .await
      .and_then(|rows| rows.iter().map(product_from_row).collect::<std::result::Result<Vec<_>, _>>());
    QueryOutcome::from(mapped)
  }

  async fn probe(&self, query: &QuerySpec) -> std::result::Result<(), DriverFault> {
    let mut conn = self.pool.acquire().await.map_err(driver_fault)?;
    bind_query(query).execute(&mut *conn).await.map_err(driver_fault)?;
    Ok(())
  }
}

/// Turns a `QuerySpec` into an executable sqlx query.
///
/// Plain statements go out exactly as built and are not kept in the
/// connection's statement cache, since listing statements differ per search.
fn bind_query(query: &QuerySpec) -> Query<'_, Postgres, PgArguments> {
  let mut prepared = sqlx::query(query.statement());
  if !query.is_parameterized() {
    return prepared.persistent(false);
  }
  for param in query.params() {
    prepared = match &param.value {
      BindValue::BigInt(value) => prepared.bind(*value),
    };
  }
  prepared
}

fn summary_from_row(row: &PgRow) -> std::result::Result<ProductSummary, DriverFault> {
  Ok(ProductSummary {
    id: row.try_get::<i64, _>("id").map_err(driver_fault)?,
    name: row.try_get::<String, _>("name").map_err(driver_fault)?,
  })
}

fn product_from_row(row: &PgRow) -> std::result::Result<Product, DriverFault> {
  Ok(Product {
    id: row.try_get::<i64, _>("id").map_err(driver_fault)?,
    name: row.try_get::<String, _>("name").map_err(driver_fault)?,
    category: row.try_get::<Option<String>, _>("category").map_err(driver_fault)?,
    price: row.try_get::<Decimal, _>("price").map_err(driver_fault)?,
    description: row.try_get::<Option<String>, _>("description").map_err(driver_fault)?,
  })
}

/// Keeps the SQLSTATE for server-side errors; everything else (pool
/// timeouts, I/O, decode failures) becomes a fault without a code.
pub fn driver_fault(err: sqlx::Error) -> DriverFault {
  match &err {
    sqlx::Error::Database(db_err) => DriverFault::new(db_err.code().map(|code| code.into_owned()), db_err.message()),
    sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
      error!(error = %err, "Could not acquire a database connection.");
      DriverFault::without_code(err.to_string())
    }
    _ => DriverFault::without_code(err.to_string()),
  }
}
