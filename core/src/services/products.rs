// tea_catalog/src/services/products.rs

//! Product lookup, filtering and write operations.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use tracing::{debug, info, instrument, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Product, ProductDraft, ProductFilter, ProductKey, ProductPatch, ProductSummary};
use crate::store::ProductStore;

#[derive(Clone)]
pub struct ProductService {
  store: Arc<dyn ProductStore>,
}

impl ProductService {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }

  #[instrument(name = "product_service::list", skip(self), err(Display))]
  pub async fn list(&self, filter: &ProductFilter) -> CatalogResult<Vec<ProductSummary>> {
    let products = self.store.list_products(filter).await?;
    debug!(count = products.len(), "Listed products.");
    Ok(products)
  }

  /// All products whose category equals `category` exactly, unpaginated.
  #[instrument(name = "product_service::list_by_category", skip(self), err(Display))]
  pub async fn list_by_category(&self, category: &str) -> CatalogResult<Vec<ProductSummary>> {
    if category.is_empty() {
      return Ok(Vec::new());
    }
    self.store.list_products(&ProductFilter::by_category(category)).await
  }

  /// Resolves a product by identifier or slug.
  ///
  /// An identifier that matches nothing is retried as a slug, since a slug
  /// may itself be 24 hex characters.
  #[instrument(name = "product_service::get", skip(self), fields(key = %key), err(Display))]
  pub async fn get(&self, key: &ProductKey) -> CatalogResult<Product> {
    let found = match key {
      ProductKey::Id { id, raw } => match self.store.find_product_by_id(*id).await? {
        Some(product) => Some(product),
        None => self.store.find_product_by_slug(raw).await?,
      },
      ProductKey::Slug(slug) => self.store.find_product_by_slug(slug).await?,
    };
    found.ok_or_else(|| {
      debug!("No product matched.");
      CatalogError::not_found("Product", key.to_string())
    })
  }

  #[instrument(name = "product_service::create", skip(self, draft), fields(slug = %draft.slug), err(Display))]
  pub async fn create(&self, draft: ProductDraft) -> CatalogResult<Product> {
    draft.validate()?;
    let product = self.store.insert_product(draft).await?;
    info!(product_id = %product.id, "Product created.");
    Ok(product)
  }

  /// Applies `patch` to the stored product and writes the merged document
  /// back. Identifier-only: slugs are not accepted on write paths.
  #[instrument(name = "product_service::update", skip(self, patch), fields(product_id = %id), err(Display))]
  pub async fn update(&self, id: ObjectId, patch: ProductPatch) -> CatalogResult<Product> {
    let mut product = self
      .store
      .find_product_by_id(id)
      .await?
      .ok_or_else(|| CatalogError::not_found("Product", id.to_hex()))?;

    if patch.is_empty() {
      warn!("Update carried no known product fields; nothing to change.");
      return Ok(product);
    }

    patch.apply_to(&mut product);
    product.validate()?;
    self.store.replace_product(&product).await?;
    info!("Product updated.");
    Ok(product)
  }

  #[instrument(name = "product_service::delete", skip(self), fields(product_id = %id), err(Display))]
  pub async fn delete(&self, id: ObjectId) -> CatalogResult<()> {
    if !self.store.delete_product(id).await? {
      return Err(CatalogError::not_found("Product", id.to_hex()));
    }
    info!("Product deleted.");
    Ok(())
  }
}
