// tea_catalog/src/models/category.rs
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::patch::present;
use crate::error::{CatalogError, CatalogResult};

/// A catalog section. Products point at it by `name`, not by id, and nothing
/// cascades between the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryDraft {
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub image: Option<String>,
}

impl CategoryDraft {
  pub fn new(name: impl Into<String>) -> Self {
    CategoryDraft {
      name: name.into(),
      description: String::new(),
      image: None,
    }
  }

  pub fn into_category(self, id: ObjectId) -> Category {
    Category {
      id,
      name: self.name,
      description: self.description,
      image: self.image,
    }
  }
}

/// Partial update to a category; same conventions as `ProductPatch`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  #[serde(default, deserialize_with = "present")]
  pub image: Option<Option<String>>,
}

impl CategoryPatch {
  pub fn apply_to(self, category: &mut Category) {
    if let Some(v) = self.name {
      category.name = v;
    }
    if let Some(v) = self.description {
      category.description = v;
    }
    if let Some(v) = self.image {
      category.image = v;
    }
  }
}

pub fn validate_category_name(name: &str) -> CatalogResult<()> {
  if name.trim().is_empty() {
    return Err(CatalogError::validation("category name must not be empty"));
  }
  Ok(())
}
