// tea_catalog/src/models/filter.rs
use mongodb::bson::{doc, Document};

use super::product::{Product, ProductSummary};

pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Conjunctive product filter plus an offset window. `None` filters impose
/// no constraint; `limit: None` means unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
  pub category: Option<String>,
  pub in_stock: Option<bool>,
  pub skip: u64,
  pub limit: Option<u32>,
}

impl ProductFilter {
  pub fn by_category(category: impl Into<String>) -> Self {
    ProductFilter {
      category: Some(category.into()),
      ..Default::default()
    }
  }

  pub fn matches(&self, product: &Product) -> bool {
    self.category.as_deref().map_or(true, |c| product.category == c)
      && self.in_stock.map_or(true, |s| product.in_stock == s)
  }

  /// Applies the offset window to an already-filtered, naturally ordered
  /// sequence.
  pub fn window<'a, I>(&self, matching: I) -> Vec<ProductSummary>
  where
    I: Iterator<Item = &'a Product>,
  {
    let skipped = matching.skip(usize::try_from(self.skip).unwrap_or(usize::MAX));
    match self.limit {
      Some(limit) => skipped.take(limit as usize).map(ProductSummary::from).collect(),
      None => skipped.map(ProductSummary::from).collect(),
    }
  }

  /// Query document for the supplied filters only.
  pub fn to_document(&self) -> Document {
    let mut query = doc! {};
    if let Some(category) = &self.category {
      query.insert("category", category.as_str());
    }
    if let Some(in_stock) = self.in_stock {
      query.insert("in_stock", in_stock);
    }
    query
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::ProductDraft;
  use mongodb::bson::oid::ObjectId;

  fn product(slug: &str, category: &str, in_stock: bool) -> Product {
    let mut draft = ProductDraft::new(slug, slug, 100.0, category);
    draft.in_stock = in_stock;
    draft.into_product(ObjectId::new())
  }

  #[test]
  fn empty_filter_builds_empty_query() {
    assert_eq!(ProductFilter::default().to_document(), doc! {});
  }

  #[test]
  fn query_contains_only_supplied_filters() {
    let f = ProductFilter {
      in_stock: Some(false),
      ..Default::default()
    };
    assert_eq!(f.to_document(), doc! { "in_stock": false });
    let f = ProductFilter {
      category: Some("green".into()),
      in_stock: Some(true),
      ..Default::default()
    };
    assert_eq!(f.to_document(), doc! { "category": "green", "in_stock": true });
  }

  #[test]
  fn matches_is_conjunctive() {
    let f = ProductFilter {
      category: Some("green".into()),
      in_stock: Some(true),
      ..Default::default()
    };
    assert!(f.matches(&product("a", "green", true)));
    assert!(!f.matches(&product("b", "green", false)));
    assert!(!f.matches(&product("c", "black", true)));
  }

  #[test]
  fn window_skips_then_limits() {
    let items: Vec<Product> = (0..5).map(|i| product(&format!("p{}", i), "green", true)).collect();
    let f = ProductFilter {
      skip: 1,
      limit: Some(2),
      ..Default::default()
    };
    let page = f.window(items.iter());
    let slugs: Vec<_> = page.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["p1", "p2"]);
  }
}
