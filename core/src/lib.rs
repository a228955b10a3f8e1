// src/lib.rs

//! Catalog core: query construction and response classification for the
//! product catalog service.
//!
//! The crate keeps two query paths side by side:
//!  - The product listing, whose search term is spliced into the statement
//!    text unescaped. A non-matching row makes PostgreSQL raise an
//!    invalid-number error, which the listing reports as a possible injection.
//!  - The product lookup, which always binds its id as a parameter and never
//!    discloses driver details.
//!
//! Everything that touches a database goes through the [`CatalogStore`] trait,
//! so the flow in [`Catalog`] runs the same against PostgreSQL or a test fake.

pub mod catalog;
pub mod classify;
pub mod error;
pub mod model;
pub mod query;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::catalog::Catalog;
pub use crate::classify::{
  classify_listing, classify_lookup, classify_probe, ErrorDisclosure, Reply, COERCION_MESSAGE,
  INVALID_NUMBER_SQLSTATE,
};
pub use crate::error::{CatalogError, CatalogResult};
pub use crate::model::{DriverFault, Product, ProductSummary, QueryOutcome};
pub use crate::query::{
  build_list_query, build_lookup_query, build_probe_query, parse_product_id, BindValue, BoundParam, QuerySpec,
};
pub use crate::store::CatalogStore;
