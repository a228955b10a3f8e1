// src/classify.rs

//! Turns query outcomes into HTTP status codes and JSON envelopes.
//!
//! Every body has a boolean `success`. Successful bodies carry `data`
//! (plus `total` on the listing); failures carry a fixed `message`.
//!
//! The listing and the lookup deliberately differ in how much they reveal
//! about a driver failure. The listing names an invalid-number failure as a
//! possible injection ([`ErrorDisclosure::Diagnostic`]); the lookup answers
//! every driver failure with the same opaque message
//! ([`ErrorDisclosure::Opaque`]).

use crate::error::CatalogError;
use crate::model::{DriverFault, Product, ProductSummary, QueryOutcome};
use serde::Serialize;
use serde_json::{json, Value};

/// PostgreSQL `invalid_text_representation`, raised by `CAST('XYZ' AS INTEGER)`.
pub const INVALID_NUMBER_SQLSTATE: &str = "22P02";

pub const COERCION_MESSAGE: &str = "Database error occurred (Possible SQL Injection - Invalid Number)";

pub const HEALTHY_MESSAGE: &str = "Server and Database connected";

/// How much a failure reply may say about what went wrong in the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDisclosure {
  /// Distinguish the invalid-number failure from other driver errors.
  Diagnostic,
  /// One generic message for every driver error.
  Opaque,
}

/// A classified response: status code plus JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
  pub status: u16,
  pub body: Value,
}

impl Reply {
  pub fn ok(body: Value) -> Self {
    Self { status: 200, body }
  }

  pub fn failure(status: u16, message: &str) -> Self {
    Self {
      status,
      body: json!({ "success": false, "message": message }),
    }
  }

  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Classifies the listing outcome. Zero rows is still a success here.
pub fn classify_listing(outcome: QueryOutcome<ProductSummary>) -> Reply {
  match outcome {
    QueryOutcome::Rows(rows) => listing_reply(rows),
    QueryOutcome::Empty => listing_reply(Vec::new()),
    QueryOutcome::DriverError(fault) => {
      CatalogError::from_driver_fault(fault).reply(ErrorDisclosure::Diagnostic)
    }
  }
}

fn listing_reply(rows: Vec<ProductSummary>) -> Reply {
  let total = rows.len();
  Reply::ok(json!({
    "success": true,
    "data": rows,
    "total": total,
  }))
}

/// Classifies the lookup outcome for product `id`.
pub fn classify_lookup(id: i64, outcome: QueryOutcome<Product>) -> Reply {
  match outcome {
    QueryOutcome::Rows(rows) => match rows.into_iter().next() {
      Some(product) => Reply::ok(json!({
        "success": true,
        "data": product,
      })),
      None => CatalogError::NotFound { id }.reply(ErrorDisclosure::Opaque),
    },
    QueryOutcome::Empty => CatalogError::NotFound { id }.reply(ErrorDisclosure::Opaque),
    QueryOutcome::DriverError(fault) => CatalogError::from_driver_fault(fault).reply(ErrorDisclosure::Opaque),
  }
}

/// Classifies the connectivity probe. There is no partial state: either the
/// probe ran or the database is reported unavailable.
pub fn classify_probe(result: Result<(), DriverFault>) -> Reply {
  match result {
    Ok(()) => Reply::ok(json!({
      "success": true,
      "message": HEALTHY_MESSAGE,
    })),
    Err(fault) => CatalogError::PoolUnavailable { fault }.reply(ErrorDisclosure::Opaque),
  }
}
