// tea_catalog/src/store/mod.rs

//! Persistence seams of the catalog.
//!
//! Services only ever see these traits, so the backing document store is
//! chosen once at startup and injected. Implementations must never leak
//! driver types through the signatures below.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::CatalogResult;
use crate::models::{
  Address, AddressDraft, Category, CategoryDraft, Lead, LeadInput, Product, ProductDraft, ProductFilter,
  ProductSummary,
};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Persists a new product under a freshly assigned identifier.
  ///
  /// Returns `Err(CatalogError::DuplicateSlug)` if the slug is taken.
  async fn insert_product(&self, draft: ProductDraft) -> CatalogResult<Product>;

  async fn find_product_by_id(&self, id: ObjectId) -> CatalogResult<Option<Product>>;

  async fn find_product_by_slug(&self, slug: &str) -> CatalogResult<Option<Product>>;

  /// Summaries of the products matching `filter`, in the store's natural
  /// order, windowed by `skip`/`limit`.
  async fn list_products(&self, filter: &ProductFilter) -> CatalogResult<Vec<ProductSummary>>;

  /// Overwrites the whole stored document with `product`.
  ///
  /// Returns `Err(CatalogError::NotFound)` if no document has `product.id`
  /// and `Err(CatalogError::DuplicateSlug)` if the new slug is taken.
  async fn replace_product(&self, product: &Product) -> CatalogResult<()>;

  /// Returns whether a document was removed.
  async fn delete_product(&self, id: ObjectId) -> CatalogResult<bool>;
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
  /// Returns `Err(CatalogError::DuplicateName)` if the name is taken.
  async fn insert_category(&self, draft: CategoryDraft) -> CatalogResult<Category>;

  async fn find_category_by_id(&self, id: ObjectId) -> CatalogResult<Option<Category>>;

  async fn list_categories(&self) -> CatalogResult<Vec<Category>>;

  async fn replace_category(&self, category: &Category) -> CatalogResult<()>;

  async fn delete_category(&self, id: ObjectId) -> CatalogResult<bool>;
}

#[async_trait]
pub trait LeadStore: Send + Sync {
  async fn find_lead_by_phone(&self, phone: &str) -> CatalogResult<Option<Lead>>;

  async fn find_lead_by_email(&self, email: &str) -> CatalogResult<Option<Lead>>;

  /// Persists a new lead built from `input`, stamping both timestamps.
  async fn insert_lead(&self, input: LeadInput) -> CatalogResult<Lead>;

  async fn replace_lead(&self, lead: &Lead) -> CatalogResult<()>;
}

#[async_trait]
pub trait AddressStore: Send + Sync {
  async fn insert_address(&self, draft: AddressDraft) -> CatalogResult<Address>;
}

/// Everything a running storefront needs from its backing store.
#[async_trait]
pub trait CatalogStore: ProductStore + CategoryStore + LeadStore + AddressStore {
  /// Releases the underlying connection handle. Called once at process stop.
  async fn shutdown(&self);
}
