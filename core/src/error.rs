// tea_catalog/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("{entity} not found: {key}")]
  NotFound { entity: &'static str, key: String },

  #[error("Validation failed: {0}")]
  Validation(String),

  #[error("A product with slug '{slug}' already exists")]
  DuplicateSlug { slug: String },

  #[error("A category named '{name}' already exists")]
  DuplicateName { name: String },

  /// Anything the store raised that the catalog did not anticipate:
  /// unreachable server, timeouts, malformed documents.
  #[error("Store operation failed: {source}")]
  Store {
    #[source]
    source: AnyhowError,
  },
}

impl CatalogError {
  pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
    CatalogError::NotFound {
      entity,
      key: key.into(),
    }
  }

  pub fn validation(message: impl Into<String>) -> Self {
    CatalogError::Validation(message.into())
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, CatalogError::NotFound { .. })
  }
}

impl From<AnyhowError> for CatalogError {
  fn from(err: AnyhowError) -> Self {
    CatalogError::Store { source: err }
  }
}

impl From<mongodb::error::Error> for CatalogError {
  fn from(err: mongodb::error::Error) -> Self {
    CatalogError::Store { source: err.into() }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
