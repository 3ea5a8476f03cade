// tea_catalog/src/models/product.rs

//! Product documents and the shapes used to create, patch and list them.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::patch::present;
use crate::error::{CatalogError, CatalogResult};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// Document fields returned by list endpoints. Long-form content (story,
/// ingredients, brewing parameters, hero image, variants) is left out.
pub const SUMMARY_FIELDS: &[&str] = &[
  "_id",
  "name",
  "description",
  "price",
  "original_price",
  "image",
  "category",
  "benefits",
  "in_stock",
  "rating",
  "reviews",
  "slug",
];

/// A purchasable option of a product (pack size, tin vs. pouch, ...).
///
/// Only `label` plus one of `price` / `price_delta` is understood by the
/// catalog; any other keys are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
  pub label: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price_delta: Option<f64>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// The full product document as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub price: f64,
  #[serde(default)]
  pub original_price: Option<f64>,
  #[serde(default)]
  pub image: String,
  pub category: String,
  #[serde(default)]
  pub benefits: Vec<String>,
  #[serde(default = "default_in_stock")]
  pub in_stock: bool,
  #[serde(default)]
  pub rating: f64,
  #[serde(default)]
  pub reviews: u32,
  pub slug: String,
  #[serde(default)]
  pub story: String,
  #[serde(default)]
  pub ingredients: Vec<String>,
  #[serde(default)]
  pub brew_temp_c: Option<f64>,
  #[serde(default)]
  pub brew_time_min: Option<f64>,
  #[serde(default)]
  pub hero_image: Option<String>,
  #[serde(default)]
  pub variants: Vec<Variant>,
}

/// The reduced record served by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub price: f64,
  #[serde(default)]
  pub original_price: Option<f64>,
  #[serde(default)]
  pub image: String,
  pub category: String,
  #[serde(default)]
  pub benefits: Vec<String>,
  #[serde(default = "default_in_stock")]
  pub in_stock: bool,
  #[serde(default)]
  pub rating: f64,
  #[serde(default)]
  pub reviews: u32,
  pub slug: String,
}

impl From<&Product> for ProductSummary {
  fn from(p: &Product) -> Self {
    ProductSummary {
      id: p.id,
      name: p.name.clone(),
      description: p.description.clone(),
      price: p.price,
      original_price: p.original_price,
      image: p.image.clone(),
      category: p.category.clone(),
      benefits: p.benefits.clone(),
      in_stock: p.in_stock,
      rating: p.rating,
      reviews: p.reviews,
      slug: p.slug.clone(),
    }
  }
}

/// Input for creating a product. `name`, `slug`, `price` and `category` are
/// required; everything else falls back to an empty/neutral value.
/// Unknown keys in the incoming payload are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDraft {
  pub name: String,
  pub slug: String,
  pub price: f64,
  pub category: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub original_price: Option<f64>,
  #[serde(default)]
  pub image: String,
  #[serde(default)]
  pub benefits: Vec<String>,
  #[serde(default = "default_in_stock")]
  pub in_stock: bool,
  #[serde(default)]
  pub rating: f64,
  #[serde(default)]
  pub reviews: u32,
  #[serde(default)]
  pub story: String,
  #[serde(default)]
  pub ingredients: Vec<String>,
  #[serde(default)]
  pub brew_temp_c: Option<f64>,
  #[serde(default)]
  pub brew_time_min: Option<f64>,
  #[serde(default)]
  pub hero_image: Option<String>,
  #[serde(default)]
  pub variants: Vec<Variant>,
}

impl ProductDraft {
  /// Minimal draft with every optional attribute at its default.
  pub fn new(name: impl Into<String>, slug: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
    ProductDraft {
      name: name.into(),
      slug: slug.into(),
      price,
      category: category.into(),
      description: String::new(),
      original_price: None,
      image: String::new(),
      benefits: Vec::new(),
      in_stock: default_in_stock(),
      rating: 0.0,
      reviews: 0,
      story: String::new(),
      ingredients: Vec::new(),
      brew_temp_c: None,
      brew_time_min: None,
      hero_image: None,
      variants: Vec::new(),
    }
  }

  pub fn validate(&self) -> CatalogResult<()> {
    validate_fields(ProductFields {
      name: &self.name,
      slug: &self.slug,
      price: self.price,
      original_price: self.original_price,
      rating: self.rating,
      brew_temp_c: self.brew_temp_c,
      brew_time_min: self.brew_time_min,
      variants: &self.variants,
    })
  }

  /// Attaches an identifier, producing the document to persist.
  pub fn into_product(self, id: ObjectId) -> Product {
    Product {
      id,
      name: self.name,
      description: self.description,
      price: self.price,
      original_price: self.original_price,
      image: self.image,
      category: self.category,
      benefits: self.benefits,
      in_stock: self.in_stock,
      rating: self.rating,
      reviews: self.reviews,
      slug: self.slug,
      story: self.story,
      ingredients: self.ingredients,
      brew_temp_c: self.brew_temp_c,
      brew_time_min: self.brew_time_min,
      hero_image: self.hero_image,
      variants: self.variants,
    }
  }
}

impl Product {
  pub fn validate(&self) -> CatalogResult<()> {
    validate_fields(ProductFields {
      name: &self.name,
      slug: &self.slug,
      price: self.price,
      original_price: self.original_price,
      rating: self.rating,
      brew_temp_c: self.brew_temp_c,
      brew_time_min: self.brew_time_min,
      variants: &self.variants,
    })
  }
}

/// The validated subset of a product, shared by drafts and stored documents.
struct ProductFields<'a> {
  name: &'a str,
  slug: &'a str,
  price: f64,
  original_price: Option<f64>,
  rating: f64,
  brew_temp_c: Option<f64>,
  brew_time_min: Option<f64>,
  variants: &'a [Variant],
}

fn validate_fields(fields: ProductFields<'_>) -> CatalogResult<()> {
  validate_name(fields.name)?;
  validate_slug(fields.slug)?;
  validate_amount("price", fields.price)?;
  if let Some(original) = fields.original_price {
    validate_amount("original_price", original)?;
  }
  validate_rating(fields.rating)?;
  validate_brewing(fields.brew_temp_c, fields.brew_time_min)?;
  validate_variants(fields.variants)
}

/// A partial update to a product.
///
/// Absent fields leave the stored value alone. For the nullable attributes
/// (`original_price`, `brew_temp_c`, `brew_time_min`, `hero_image`) an explicit
/// `null` clears the value. Keys that are not product attributes, including
/// `id` and `_id`, are ignored: the identifier can never be changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<f64>,
  #[serde(default, deserialize_with = "present")]
  pub original_price: Option<Option<f64>>,
  pub image: Option<String>,
  pub category: Option<String>,
  pub benefits: Option<Vec<String>>,
  pub in_stock: Option<bool>,
  pub rating: Option<f64>,
  pub reviews: Option<u32>,
  pub slug: Option<String>,
  pub story: Option<String>,
  pub ingredients: Option<Vec<String>>,
  #[serde(default, deserialize_with = "present")]
  pub brew_temp_c: Option<Option<f64>>,
  #[serde(default, deserialize_with = "present")]
  pub brew_time_min: Option<Option<f64>>,
  #[serde(default, deserialize_with = "present")]
  pub hero_image: Option<Option<String>>,
  pub variants: Option<Vec<Variant>>,
}

impl ProductPatch {
  pub fn is_empty(&self) -> bool {
    *self == ProductPatch::default()
  }

  /// Copies every supplied field onto `product`. Validation is left to the
  /// caller so the merged document is checked as a whole.
  pub fn apply_to(self, product: &mut Product) {
    if let Some(v) = self.name {
      product.name = v;
    }
    if let Some(v) = self.description {
      product.description = v;
    }
    if let Some(v) = self.price {
      product.price = v;
    }
    if let Some(v) = self.original_price {
      product.original_price = v;
    }
    if let Some(v) = self.image {
      product.image = v;
    }
    if let Some(v) = self.category {
      product.category = v;
    }
    if let Some(v) = self.benefits {
      product.benefits = v;
    }
    if let Some(v) = self.in_stock {
      product.in_stock = v;
    }
    if let Some(v) = self.rating {
      product.rating = v;
    }
    if let Some(v) = self.reviews {
      product.reviews = v;
    }
    if let Some(v) = self.slug {
      product.slug = v;
    }
    if let Some(v) = self.story {
      product.story = v;
    }
    if let Some(v) = self.ingredients {
      product.ingredients = v;
    }
    if let Some(v) = self.brew_temp_c {
      product.brew_temp_c = v;
    }
    if let Some(v) = self.brew_time_min {
      product.brew_time_min = v;
    }
    if let Some(v) = self.hero_image {
      product.hero_image = v;
    }
    if let Some(v) = self.variants {
      product.variants = v;
    }
  }
}

fn default_in_stock() -> bool {
  true
}

fn validate_name(name: &str) -> CatalogResult<()> {
  if name.trim().is_empty() {
    return Err(CatalogError::validation("name must not be empty"));
  }
  Ok(())
}

/// Slugs appear verbatim in URLs, so only ASCII alphanumerics, `-` and `_`
/// are accepted.
pub fn validate_slug(slug: &str) -> CatalogResult<()> {
  if slug.is_empty() {
    return Err(CatalogError::validation("slug must not be empty"));
  }
  if let Some(bad) = slug
    .chars()
    .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
  {
    return Err(CatalogError::validation(format!(
      "slug '{}' contains invalid character '{}'",
      slug, bad
    )));
  }
  Ok(())
}

fn validate_amount(field: &str, amount: f64) -> CatalogResult<()> {
  if !amount.is_finite() || amount < 0.0 {
    return Err(CatalogError::validation(format!(
      "{} must be a non-negative amount, got {}",
      field, amount
    )));
  }
  Ok(())
}

fn validate_rating(rating: f64) -> CatalogResult<()> {
  if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
    return Err(CatalogError::validation(format!(
      "rating must be between 0 and {}, got {}",
      MAX_RATING, rating
    )));
  }
  Ok(())
}

fn validate_brewing(temp_c: Option<f64>, time_min: Option<f64>) -> CatalogResult<()> {
  if let Some(t) = temp_c {
    validate_amount("brew_temp_c", t)?;
  }
  if let Some(t) = time_min {
    validate_amount("brew_time_min", t)?;
  }
  Ok(())
}

fn validate_variants(variants: &[Variant]) -> CatalogResult<()> {
  for (idx, variant) in variants.iter().enumerate() {
    if variant.label.trim().is_empty() {
      return Err(CatalogError::validation(format!("variants[{}].label must not be empty", idx)));
    }
    match (variant.price, variant.price_delta) {
      (None, None) => {
        return Err(CatalogError::validation(format!(
          "variants[{}] needs a price or a price_delta",
          idx
        )));
      }
      (Some(price), _) => validate_amount(&format!("variants[{}].price", idx), price)?,
      (None, Some(delta)) if !delta.is_finite() => {
        return Err(CatalogError::validation(format!(
          "variants[{}].price_delta must be a finite number",
          idx
        )));
      }
      (None, Some(_)) => {}
    }
  }
  Ok(())
}
