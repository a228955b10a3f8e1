// catalog_service/src/state.rs
use catalog_core::{Catalog, CatalogStore};
use std::sync::Arc;

/// Shared with every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
  pub catalog: Catalog,
}

impl AppState {
  pub fn new(store: Arc<dyn CatalogStore>) -> Self {
    Self {
      catalog: Catalog::new(store),
    }
  }
}
