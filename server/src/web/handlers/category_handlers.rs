// tea_store/src/web/handlers/category_handlers.rs

use actix_web::{web, HttpResponse};
use tea_catalog::{parse_id, CategoryDraft, CategoryPatch};
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::dto::{CategoryResponse, MessageResponse, WriteResponse};

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = app_state.catalog.categories.list().await?;
  let body: Vec<CategoryResponse> = categories.into_iter().map(Into::into).collect();
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(name = "handler::get_category", skip(app_state, path), fields(category_id = %path.as_ref()))]
pub async fn get_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_id("category", &path.into_inner())?;
  let category = app_state.catalog.categories.get(id).await?;
  Ok(HttpResponse::Ok().json(CategoryResponse::from(category)))
}

#[instrument(name = "handler::create_category", skip(app_state, payload), fields(name = %payload.name))]
pub async fn create_category_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CategoryDraft>,
) -> Result<HttpResponse, AppError> {
  let category = app_state.catalog.categories.create(payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(WriteResponse {
    id: category.id.to_hex(),
    message: "Category created successfully",
  }))
}

#[instrument(name = "handler::update_category", skip(app_state, path, payload), fields(category_id = %path.as_ref()))]
pub async fn update_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<CategoryPatch>,
) -> Result<HttpResponse, AppError> {
  let id = parse_id("category", &path.into_inner())?;
  let category = app_state.catalog.categories.update(id, payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(WriteResponse {
    id: category.id.to_hex(),
    message: "Category updated successfully",
  }))
}

#[instrument(name = "handler::delete_category", skip(app_state, path), fields(category_id = %path.as_ref()))]
pub async fn delete_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_id("category", &path.into_inner())?;
  app_state.catalog.categories.delete(id).await?;
  Ok(HttpResponse::Ok().json(MessageResponse {
    message: "Category deleted successfully",
  }))
}
