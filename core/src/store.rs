// src/store.rs

//! Defines the `CatalogStore` trait, the seam between the catalog flow and
//! whatever executes statements.

use crate::model::{DriverFault, Product, ProductSummary, QueryOutcome};
use crate::query::QuerySpec;
use async_trait::async_trait;

/// Executes catalog statements.
///
/// Each call runs exactly one statement on one connection, and implementors
/// must give that connection back on every exit path. Failures are reported
/// as [`QueryOutcome::DriverError`] (or `Err` for the probe) and never
/// retried.
#[async_trait]
pub trait CatalogStore: Send + Sync {
  /// Runs a listing statement and maps each row to `{id, name}`.
  async fn fetch_summaries(&self, query: &QuerySpec) -> QueryOutcome<ProductSummary>;

  /// Runs a lookup statement and maps each row to a full product.
  async fn fetch_products(&self, query: &QuerySpec) -> QueryOutcome<Product>;

  /// Runs the connectivity probe, discarding its result.
  async fn probe(&self, query: &QuerySpec) -> Result<(), DriverFault>;
}
