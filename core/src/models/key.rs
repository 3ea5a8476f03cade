// tea_catalog/src/models/key.rs
use std::fmt;

use mongodb::bson::oid::ObjectId;

use crate::error::{CatalogError, CatalogResult};

/// How a caller addresses a single product on read paths.
///
/// Resolved once from the raw path segment: text that parses as a store
/// identifier becomes `Id`, everything else is a `Slug`. `Id` keeps the
/// text as sent, which is what a slug fallback must compare against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKey {
  Id { id: ObjectId, raw: String },
  Slug(String),
}

impl ProductKey {
  pub fn parse(raw: &str) -> Self {
    match ObjectId::parse_str(raw) {
      Ok(id) => ProductKey::Id {
        id,
        raw: raw.to_string(),
      },
      Err(_) => ProductKey::Slug(raw.to_string()),
    }
  }

  /// Key for an identifier already in hand.
  pub fn id(id: ObjectId) -> Self {
    ProductKey::Id { raw: id.to_hex(), id }
  }
}

impl fmt::Display for ProductKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProductKey::Id { raw, .. } => write!(f, "id:{}", raw),
      ProductKey::Slug(slug) => write!(f, "slug:{}", slug),
    }
  }
}

/// Parses an identifier for write paths, where slugs are not accepted.
pub fn parse_id(entity: &str, raw: &str) -> CatalogResult<ObjectId> {
  ObjectId::parse_str(raw)
    .map_err(|_| CatalogError::validation(format!("'{}' is not a valid {} id", raw, entity)))
}
