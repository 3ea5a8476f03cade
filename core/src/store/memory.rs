// tea_catalog/src/store/memory.rs

//! A process-local store used by tests and by `CATALOG_STORE=memory`.
//!
//! Documents live in insertion-ordered vectors behind a single
//! `parking_lot::RwLock`. Guards are never held across an `.await`.

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use parking_lot::RwLock;
use tracing::debug;

use super::{AddressStore, CatalogStore, CategoryStore, LeadStore, ProductStore};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
  Address, AddressDraft, Category, CategoryDraft, Lead, LeadInput, Product, ProductDraft, ProductFilter,
  ProductSummary,
};

#[derive(Debug, Default)]
struct Collections {
  products: Vec<Product>,
  categories: Vec<Category>,
  leads: Vec<Lead>,
  addresses: Vec<Address>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
  inner: RwLock<Collections>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl ProductStore for MemoryStore {
  async fn insert_product(&self, draft: ProductDraft) -> CatalogResult<Product> {
    let mut guard = self.inner.write();
    if guard.products.iter().any(|p| p.slug == draft.slug) {
      return Err(CatalogError::DuplicateSlug { slug: draft.slug });
    }
    let product = draft.into_product(ObjectId::new());
    guard.products.push(product.clone());
    debug!(product_id = %product.id, "memory store: product inserted");
    Ok(product)
  }

  async fn find_product_by_id(&self, id: ObjectId) -> CatalogResult<Option<Product>> {
    Ok(self.inner.read().products.iter().find(|p| p.id == id).cloned())
  }

  async fn find_product_by_slug(&self, slug: &str) -> CatalogResult<Option<Product>> {
    Ok(self.inner.read().products.iter().find(|p| p.slug == slug).cloned())
  }

  async fn list_products(&self, filter: &ProductFilter) -> CatalogResult<Vec<ProductSummary>> {
    let guard = self.inner.read();
    Ok(filter.window(guard.products.iter().filter(|p| filter.matches(p))))
  }

  async fn replace_product(&self, product: &Product) -> CatalogResult<()> {
    let mut guard = self.inner.write();
    if guard
      .products
      .iter()
      .any(|p| p.id != product.id && p.slug == product.slug)
    {
      return Err(CatalogError::DuplicateSlug {
        slug: product.slug.clone(),
      });
    }
    let slot = guard
      .products
      .iter_mut()
      .find(|p| p.id == product.id)
      .ok_or_else(|| CatalogError::not_found("Product", product.id.to_hex()))?;
    *slot = product.clone();
    Ok(())
  }

  async fn delete_product(&self, id: ObjectId) -> CatalogResult<bool> {
    let mut guard = self.inner.write();
    let before = guard.products.len();
    guard.products.retain(|p| p.id != id);
    Ok(guard.products.len() != before)
  }
}

#[async_trait]
impl CategoryStore for MemoryStore {
  async fn insert_category(&self, draft: CategoryDraft) -> CatalogResult<Category> {
    let mut guard = self.inner.write();
    if guard.categories.iter().any(|c| c.name == draft.name) {
      return Err(CatalogError::DuplicateName { name: draft.name });
    }
    let category = draft.into_category(ObjectId::new());
    guard.categories.push(category.clone());
    Ok(category)
  }

  async fn find_category_by_id(&self, id: ObjectId) -> CatalogResult<Option<Category>> {
    Ok(self.inner.read().categories.iter().find(|c| c.id == id).cloned())
  }

  async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
    Ok(self.inner.read().categories.clone())
  }

  async fn replace_category(&self, category: &Category) -> CatalogResult<()> {
    let mut guard = self.inner.write();
    if guard
      .categories
      .iter()
      .any(|c| c.id != category.id && c.name == category.name)
    {
      return Err(CatalogError::DuplicateName {
        name: category.name.clone(),
      });
    }
    let slot = guard
      .categories
      .iter_mut()
      .find(|c| c.id == category.id)
      .ok_or_else(|| CatalogError::not_found("Category", category.id.to_hex()))?;
    *slot = category.clone();
    Ok(())
  }

  async fn delete_category(&self, id: ObjectId) -> CatalogResult<bool> {
    let mut guard = self.inner.write();
    let before = guard.categories.len();
    guard.categories.retain(|c| c.id != id);
    Ok(guard.categories.len() != before)
  }
}

#[async_trait]
impl LeadStore for MemoryStore {
  async fn find_lead_by_phone(&self, phone: &str) -> CatalogResult<Option<Lead>> {
    Ok(
      self
        .inner
        .read()
        .leads
        .iter()
        .find(|l| l.phone.as_deref() == Some(phone))
        .cloned(),
    )
  }

  async fn find_lead_by_email(&self, email: &str) -> CatalogResult<Option<Lead>> {
    Ok(
      self
        .inner
        .read()
        .leads
        .iter()
        .find(|l| l.email.as_deref() == Some(email))
        .cloned(),
    )
  }

  async fn insert_lead(&self, input: LeadInput) -> CatalogResult<Lead> {
    let lead = input.into_lead(ObjectId::new(), Utc::now());
    self.inner.write().leads.push(lead.clone());
    Ok(lead)
  }

  async fn replace_lead(&self, lead: &Lead) -> CatalogResult<()> {
    let mut guard = self.inner.write();
    let slot = guard
      .leads
      .iter_mut()
      .find(|l| l.id == lead.id)
      .ok_or_else(|| CatalogError::not_found("Lead", lead.id.to_hex()))?;
    *slot = lead.clone();
    Ok(())
  }
}

#[async_trait]
impl AddressStore for MemoryStore {
  async fn insert_address(&self, draft: AddressDraft) -> CatalogResult<Address> {
    let address = draft.into_address(ObjectId::new(), Utc::now());
    self.inner.write().addresses.push(address.clone());
    Ok(address)
  }
}

#[async_trait]
impl CatalogStore for MemoryStore {
  async fn shutdown(&self) {
    debug!("memory store: nothing to release");
  }
}
