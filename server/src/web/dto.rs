// tea_store/src/web/dto.rs

//! Wire shapes. Identifiers always leave the server as hex strings.

use serde::{Deserialize, Serialize};
use tea_catalog::{Category, Product, ProductFilter, ProductSummary, Variant, DEFAULT_LIST_LIMIT};

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub category: Option<String>,
  pub in_stock: Option<bool>,
  #[serde(default = "default_limit")]
  pub limit: u32,
  #[serde(default)]
  pub skip: u64,
}

fn default_limit() -> u32 {
  DEFAULT_LIST_LIMIT
}

impl From<ListProductsQuery> for ProductFilter {
  fn from(q: ListProductsQuery) -> Self {
    ProductFilter {
      // An empty `?category=` imposes no constraint.
      category: q.category.filter(|c| !c.is_empty()),
      in_stock: q.in_stock,
      skip: q.skip,
      limit: Some(q.limit),
    }
  }
}

#[derive(Serialize, Debug)]
pub struct ProductSummaryResponse {
  pub id: String,
  pub name: String,
  pub description: String,
  pub price: f64,
  pub original_price: Option<f64>,
  pub image: String,
  pub category: String,
  pub benefits: Vec<String>,
  pub in_stock: bool,
  pub rating: f64,
  pub reviews: u32,
  pub slug: String,
}

impl From<ProductSummary> for ProductSummaryResponse {
  fn from(p: ProductSummary) -> Self {
    ProductSummaryResponse {
      id: p.id.to_hex(),
      name: p.name,
      description: p.description,
      price: p.price,
      original_price: p.original_price,
      image: p.image,
      category: p.category,
      benefits: p.benefits,
      in_stock: p.in_stock,
      rating: p.rating,
      reviews: p.reviews,
      slug: p.slug,
    }
  }
}

#[derive(Serialize, Debug)]
pub struct ProductResponse {
  pub id: String,
  pub name: String,
  pub description: String,
  pub price: f64,
  pub original_price: Option<f64>,
  pub image: String,
  pub category: String,
  pub benefits: Vec<String>,
  pub in_stock: bool,
  pub rating: f64,
  pub reviews: u32,
  pub slug: String,
  pub story: String,
  pub ingredients: Vec<String>,
  pub brew_temp_c: Option<f64>,
  pub brew_time_min: Option<f64>,
  pub hero_image: Option<String>,
  pub variants: Vec<Variant>,
}

impl From<Product> for ProductResponse {
  fn from(p: Product) -> Self {
    ProductResponse {
      id: p.id.to_hex(),
      name: p.name,
      description: p.description,
      price: p.price,
      original_price: p.original_price,
      image: p.image,
      category: p.category,
      benefits: p.benefits,
      in_stock: p.in_stock,
      rating: p.rating,
      reviews: p.reviews,
      slug: p.slug,
      story: p.story,
      ingredients: p.ingredients,
      brew_temp_c: p.brew_temp_c,
      brew_time_min: p.brew_time_min,
      hero_image: p.hero_image,
      variants: p.variants,
    }
  }
}

#[derive(Serialize, Debug)]
pub struct CategoryResponse {
  pub id: String,
  pub name: String,
  pub description: String,
  pub image: Option<String>,
}

impl From<Category> for CategoryResponse {
  fn from(c: Category) -> Self {
    CategoryResponse {
      id: c.id.to_hex(),
      name: c.name,
      description: c.description,
      image: c.image,
    }
  }
}

/// `{"id", "message"}` returned by create and update endpoints.
#[derive(Serialize, Debug)]
pub struct WriteResponse {
  pub id: String,
  pub message: &'static str,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
  pub message: &'static str,
}

#[derive(Serialize, Debug)]
pub struct IdResponse {
  pub id: String,
}
