// tea_catalog/src/services/categories.rs
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::error::{CatalogError, CatalogResult};
use crate::models::category::validate_category_name;
use crate::models::{Category, CategoryDraft, CategoryPatch};
use crate::store::CategoryStore;

#[derive(Clone)]
pub struct CategoryService {
  store: Arc<dyn CategoryStore>,
}

impl CategoryService {
  pub fn new(store: Arc<dyn CategoryStore>) -> Self {
    Self { store }
  }

  pub async fn list(&self) -> CatalogResult<Vec<Category>> {
    self.store.list_categories().await
  }

  pub async fn get(&self, id: ObjectId) -> CatalogResult<Category> {
    self
      .store
      .find_category_by_id(id)
      .await?
      .ok_or_else(|| CatalogError::not_found("Category", id.to_hex()))
  }

  #[instrument(name = "category_service::create", skip(self, draft), fields(name = %draft.name), err(Display))]
  pub async fn create(&self, draft: CategoryDraft) -> CatalogResult<Category> {
    validate_category_name(&draft.name)?;
    let category = self.store.insert_category(draft).await?;
    info!(category_id = %category.id, "Category created.");
    Ok(category)
  }

  #[instrument(name = "category_service::update", skip(self, patch), fields(category_id = %id), err(Display))]
  pub async fn update(&self, id: ObjectId, patch: CategoryPatch) -> CatalogResult<Category> {
    let mut category = self.get(id).await?;
    patch.apply_to(&mut category);
    validate_category_name(&category.name)?;
    self.store.replace_category(&category).await?;
    Ok(category)
  }

  /// Products that still name this category keep doing so.
  #[instrument(name = "category_service::delete", skip(self), fields(category_id = %id), err(Display))]
  pub async fn delete(&self, id: ObjectId) -> CatalogResult<()> {
    if !self.store.delete_category(id).await? {
      return Err(CatalogError::not_found("Category", id.to_hex()));
    }
    Ok(())
  }
}
