// src/catalog.rs

//! Per-request flow for the catalog endpoints: build the statement, log it,
//! execute it on the store, classify the outcome.

use crate::classify::{classify_listing, classify_lookup, classify_probe, ErrorDisclosure, Reply};
use crate::error::CatalogError;
use crate::model::QueryOutcome;
use crate::query::{build_list_query, build_lookup_query, build_probe_query, parse_product_id, QuerySpec};
use crate::store::CatalogStore;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Runs catalog requests against a shared store.
///
/// Cloning is cheap; every clone talks to the same store.
#[derive(Clone)]
pub struct Catalog {
  store: Arc<dyn CatalogStore>,
}

impl Catalog {
  pub fn new(store: Arc<dyn CatalogStore>) -> Self {
    Self { store }
  }

  /// Lists products, optionally filtered by `search` through the unescaped
  /// listing statement.
  #[instrument(name = "catalog::list_products", skip(self))]
  pub async fn list_products(&self, search: Option<&str>) -> Reply {
    let query = build_list_query(search);
    log_statement("listing", &query);

    let outcome = self.store.fetch_summaries(&query).await;
    log_outcome("listing", &outcome);
    classify_listing(outcome)
  }

  /// Looks up one product. `raw_id` is the untouched path segment; anything
  /// that is not an integer is rejected before a statement is built.
  #[instrument(name = "catalog::product_detail", skip(self))]
  pub async fn product_detail(&self, raw_id: &str) -> Reply {
    let id = match parse_product_id(raw_id) {
      Ok(id) => id,
      Err(e) => {
        warn!(error = %e, "Rejected product lookup with malformed id.");
        return e.reply(ErrorDisclosure::Opaque);
      }
    };

    let query = build_lookup_query(id);
    log_statement("lookup", &query);

    let outcome = self.store.fetch_products(&query).await;
    log_outcome("lookup", &outcome);
    if matches!(outcome, QueryOutcome::Empty) {
      info!(product_id = id, "Product not found.");
    }
    classify_lookup(id, outcome)
  }

  /// Probes database connectivity.
  #[instrument(name = "catalog::health", skip(self))]
  pub async fn health(&self) -> Reply {
    let query = build_probe_query();
    debug!(statement = %query.statement(), "Running health probe.");

    let result = self.store.probe(&query).await;
    if let Err(fault) = &result {
      let err = CatalogError::PoolUnavailable { fault: fault.clone() };
      error!(error = %err, "Health check failed.");
    }
    classify_probe(result)
  }
}

fn log_statement(endpoint: &'static str, query: &QuerySpec) {
  info!(endpoint, statement = %query.statement(), "Executing catalog query.");
  for param in query.params() {
    debug!(endpoint, param = param.name, value = %param.value, "Bound parameter.");
  }
}

fn log_outcome<T>(endpoint: &'static str, outcome: &QueryOutcome<T>) {
  match outcome {
    QueryOutcome::Rows(rows) => debug!(endpoint, rows = rows.len(), "Query returned rows."),
    QueryOutcome::Empty => debug!(endpoint, "Query returned no rows."),
    QueryOutcome::DriverError(fault) => {
      let classified = CatalogError::from_driver_fault(fault.clone());
      match classified {
        CatalogError::DriverCoercion { .. } => {
          warn!(endpoint, code = ?fault.code, message = %fault.message, "Invalid number coercion during query.")
        }
        _ => error!(endpoint, code = ?fault.code, message = %fault.message, "Query failed."),
      }
    }
  }
}
