// tea_store/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use tea_catalog::{Catalog, CatalogStore};

#[derive(Clone)]
pub struct AppState {
  pub catalog: Catalog,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Wires every catalog service to the one store handle acquired at startup.
  pub fn new<S: CatalogStore + 'static>(store: Arc<S>, config: Arc<AppConfig>) -> Self {
    AppState {
      catalog: Catalog::new(store),
      config,
    }
  }
}
