// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use async_trait::async_trait;
use catalog_core::{CatalogStore, DriverFault, Product, ProductSummary, QueryOutcome, QuerySpec};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::Level;

// --- Sample rows ---
pub fn laptop() -> Product {
  Product {
    id: 1,
    name: "Laptop Pro 14".to_string(),
    category: Some("Electronics".to_string()),
    price: Decimal::new(129900, 2),
    description: Some("14-inch laptop".to_string()),
  }
}

pub fn headphones() -> Product {
  Product {
    id: 2,
    name: "Wireless Headphones".to_string(),
    category: Some("Audio".to_string()),
    price: Decimal::new(8950, 2),
    description: None,
  }
}

pub fn sample_summaries() -> Vec<ProductSummary> {
  vec![laptop().into(), headphones().into()]
}

pub fn coercion_fault() -> DriverFault {
  DriverFault::with_code("22P02", "invalid input syntax for type integer: \"XYZ\"")
}

pub fn syntax_fault() -> DriverFault {
  DriverFault::with_code("42601", "syntax error at or near \"--\"")
}

// --- Scripted store ---

/// A store that answers every call with a fixed outcome and records each
/// statement it was asked to run.
pub struct ScriptedStore {
  listing: QueryOutcome<ProductSummary>,
  lookup: QueryOutcome<Product>,
  probe: Result<(), DriverFault>,
  executed: Mutex<Vec<QuerySpec>>,
}

impl ScriptedStore {
  pub fn new() -> Self {
    Self {
      listing: QueryOutcome::Empty,
      lookup: QueryOutcome::Empty,
      probe: Ok(()),
      executed: Mutex::new(Vec::new()),
    }
  }

  pub fn with_listing(mut self, outcome: QueryOutcome<ProductSummary>) -> Self {
    self.listing = outcome;
    self
  }

  pub fn with_lookup(mut self, outcome: QueryOutcome<Product>) -> Self {
    self.lookup = outcome;
    self
  }

  pub fn with_probe(mut self, result: Result<(), DriverFault>) -> Self {
    self.probe = result;
    self
  }

  pub fn executed(&self) -> Vec<QuerySpec> {
    self.executed.lock().clone()
  }

  pub fn into_shared(self) -> Arc<Self> {
    Arc::new(self)
  }
}

#[async_trait]
impl CatalogStore for ScriptedStore {
  async fn fetch_summaries(&self, query: &QuerySpec) -> QueryOutcome<ProductSummary> {
    self.executed.lock().push(query.clone());
    self.listing.clone()
  }

  async fn fetch_products(&self, query: &QuerySpec) -> QueryOutcome<Product> {
    self.executed.lock().push(query.clone());
    self.lookup.clone()
  }

  async fn probe(&self, query: &QuerySpec) -> Result<(), DriverFault> {
    self.executed.lock().push(query.clone());
    self.probe.clone()
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
