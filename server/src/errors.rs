// tea_store/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use tea_catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For anything the handlers did not anticipate
}

// Not-found and bad input are expected outcomes; only store failures are 500s.
impl From<CatalogError> for AppError {
  fn from(err: CatalogError) -> Self {
    match err {
      CatalogError::NotFound { .. } => AppError::NotFound(err.to_string()),
      CatalogError::Validation(m) => AppError::Validation(m),
      CatalogError::DuplicateSlug { .. } | CatalogError::DuplicateName { .. } => {
        AppError::Validation(err.to_string())
      }
      CatalogError::Store { source } => AppError::Internal(source.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Validation(m) => {
        tracing::warn!(application_error = %self, "Rejecting request");
        HttpResponse::BadRequest().json(json!({"error": m}))
      }
      AppError::NotFound(m) => {
        tracing::info!(application_error = %self, "Responding with not found");
        HttpResponse::NotFound().json(json!({"error": m}))
      }
      AppError::Config(m) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Internal(m) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn catalog_errors_map_to_distinct_statuses() {
    let not_found: AppError = CatalogError::not_found("Product", "slug:oolong").into();
    assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

    let invalid: AppError = CatalogError::validation("price must be a non-negative amount").into();
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

    let dup: AppError = CatalogError::DuplicateSlug {
      slug: "green-tea".into(),
    }
    .into();
    assert_eq!(dup.status_code(), StatusCode::BAD_REQUEST);

    let store: AppError = CatalogError::from(anyhow::anyhow!("server selection timeout")).into();
    assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(store.to_string().contains("server selection timeout"));
  }
}
