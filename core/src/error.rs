// src/error.rs
use crate::classify::{ErrorDisclosure, Reply, COERCION_MESSAGE, INVALID_NUMBER_SQLSTATE};
use crate::model::DriverFault;
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "Invalid product id";
pub const NOT_FOUND_MESSAGE: &str = "Product not found";
pub const GENERIC_DB_MESSAGE: &str = "Database error occurred";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const DB_UNAVAILABLE_MESSAGE: &str = "Database connection failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
  #[error("Invalid product id: {raw:?}")]
  ClientInput { raw: String },

  #[error("Product {id} not found")]
  NotFound { id: i64 },

  /// The database could not coerce a value to a number. On the listing this
  /// is the injection signal.
  #[error("Invalid number coercion: {fault}")]
  DriverCoercion { fault: DriverFault },

  #[error("Database error: {fault}")]
  DriverGeneric { fault: DriverFault },

  #[error("Database unavailable: {fault}")]
  PoolUnavailable { fault: DriverFault },
}

impl CatalogError {
  /// Sorts a statement failure into the coercion branch or the catch-all.
  pub fn from_driver_fault(fault: DriverFault) -> Self {
    if fault.code.as_deref() == Some(INVALID_NUMBER_SQLSTATE) {
      CatalogError::DriverCoercion { fault }
    } else {
      CatalogError::DriverGeneric { fault }
    }
  }

  pub fn status_code(&self) -> u16 {
    match self {
      CatalogError::ClientInput { .. } => 400,
      CatalogError::NotFound { .. } => 404,
      CatalogError::DriverCoercion { .. } | CatalogError::DriverGeneric { .. } => 500,
      CatalogError::PoolUnavailable { .. } => 503,
    }
  }

  /// The message a client sees. Driver text is never included.
  pub fn public_message(&self, disclosure: ErrorDisclosure) -> &'static str {
    match (self, disclosure) {
      (CatalogError::ClientInput { .. }, _) => INVALID_ID_MESSAGE,
      (CatalogError::NotFound { .. }, _) => NOT_FOUND_MESSAGE,
      (CatalogError::DriverCoercion { .. }, ErrorDisclosure::Diagnostic) => COERCION_MESSAGE,
      (CatalogError::DriverGeneric { .. }, ErrorDisclosure::Diagnostic) => GENERIC_DB_MESSAGE,
      (CatalogError::DriverCoercion { .. } | CatalogError::DriverGeneric { .. }, ErrorDisclosure::Opaque) => {
        INTERNAL_ERROR_MESSAGE
      }
      (CatalogError::PoolUnavailable { .. }, _) => DB_UNAVAILABLE_MESSAGE,
    }
  }

  pub fn reply(&self, disclosure: ErrorDisclosure) -> Reply {
    Reply::failure(self.status_code(), self.public_message(disclosure))
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
