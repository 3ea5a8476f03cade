// tea_catalog/src/services/mod.rs

pub mod addresses;
pub mod categories;
pub mod leads;
pub mod products;

use std::sync::Arc;

pub use addresses::AddressService;
pub use categories::CategoryService;
pub use leads::LeadService;
pub use products::ProductService;

use crate::store::CatalogStore;

/// The catalog's services, all sharing one store handle.
#[derive(Clone)]
pub struct Catalog {
  pub products: ProductService,
  pub categories: CategoryService,
  pub leads: LeadService,
  pub addresses: AddressService,
}

impl Catalog {
  pub fn new<S: CatalogStore + 'static>(store: Arc<S>) -> Self {
    Catalog {
      products: ProductService::new(store.clone()),
      categories: CategoryService::new(store.clone()),
      leads: LeadService::new(store.clone()),
      addresses: AddressService::new(store),
    }
  }
}
