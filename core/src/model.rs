// src/model.rs

//! Records read from the `products` table and the outcome of running a
//! statement against it.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A full product row, as returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub category: Option<String>,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub description: Option<String>,
}

/// The `{id, name}` projection returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
  pub id: i64,
  pub name: String,
}

impl From<Product> for ProductSummary {
  fn from(product: Product) -> Self {
    Self {
      id: product.id,
      name: product.name,
    }
  }
}

/// A failure reported by the database driver while executing a statement.
///
/// `code` is the vendor error code (a SQLSTATE for PostgreSQL). It is `None`
/// for failures that never reached the server, such as pool timeouts or
/// broken connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverFault {
  pub code: Option<String>,
  pub message: String,
}

impl DriverFault {
  pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
    Self {
      code,
      message: message.into(),
    }
  }

  /// A fault that carries a vendor code.
  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    Self::new(Some(code.into()), message)
  }

  /// A fault raised before the statement reached the server.
  pub fn without_code(message: impl Into<String>) -> Self {
    Self::new(None, message)
  }
}

impl fmt::Display for DriverFault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.code {
      Some(code) => write!(f, "[{}] {}", code, self.message),
      None => f.write_str(&self.message),
    }
  }
}

/// What came back from executing one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<T> {
  /// At least one row.
  Rows(Vec<T>),
  /// The statement succeeded and produced no rows.
  Empty,
  DriverError(DriverFault),
}

impl<T> QueryOutcome<T> {
  /// Wraps fetched rows, folding an empty result into [`QueryOutcome::Empty`].
  pub fn from_rows(rows: Vec<T>) -> Self {
    if rows.is_empty() {
      QueryOutcome::Empty
    } else {
      QueryOutcome::Rows(rows)
    }
  }

  pub fn is_driver_error(&self) -> bool {
    matches!(self, QueryOutcome::DriverError(_))
  }

  /// Number of rows carried; zero for `Empty` and `DriverError`.
  pub fn row_count(&self) -> usize {
    match self {
      QueryOutcome::Rows(rows) => rows.len(),
      QueryOutcome::Empty | QueryOutcome::DriverError(_) => 0,
    }
  }
}

impl<T> From<Result<Vec<T>, DriverFault>> for QueryOutcome<T> {
  fn from(result: Result<Vec<T>, DriverFault>) -> Self {
    match result {
      Ok(rows) => QueryOutcome::from_rows(rows),
      Err(fault) => QueryOutcome::DriverError(fault),
    }
  }
}
