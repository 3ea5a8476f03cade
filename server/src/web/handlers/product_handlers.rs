// tea_store/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tea_catalog::{parse_id, ProductDraft, ProductFilter, ProductKey, ProductPatch};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::dto::{
  ListProductsQuery, MessageResponse, ProductResponse, ProductSummaryResponse, WriteResponse,
};

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let filter: ProductFilter = query_params.into_inner().into();
  let products = app_state.catalog.products.list(&filter).await?;

  info!("Successfully fetched {} products.", products.len());
  let body: Vec<ProductSummaryResponse> = products.into_iter().map(Into::into).collect();
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_key = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let key = ProductKey::parse(&path.into_inner());
  let product = app_state.catalog.products.get(&key).await?;

  info!(product_id = %product.id, "Product fetched.");
  Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

#[instrument(name = "handler::products_by_category", skip(app_state, path), fields(category = %path.as_ref()))]
pub async fn products_by_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let category = path.into_inner();
  let products = app_state.catalog.products.list_by_category(&category).await?;

  let body: Vec<ProductSummaryResponse> = products.into_iter().map(Into::into).collect();
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(name = "handler::create_product", skip(app_state, payload), fields(slug = %payload.slug))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductDraft>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.catalog.products.create(payload.into_inner()).await?;

  Ok(HttpResponse::Created().json(WriteResponse {
    id: product.id.to_hex(),
    message: "Product created successfully",
  }))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<ProductPatch>,
) -> Result<HttpResponse, AppError> {
  let id = parse_id("product", &path.into_inner())?;
  let product = app_state.catalog.products.update(id, payload.into_inner()).await?;

  Ok(HttpResponse::Ok().json(WriteResponse {
    id: product.id.to_hex(),
    message: "Product updated successfully",
  }))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_id("product", &path.into_inner())?;
  app_state.catalog.products.delete(id).await?;

  Ok(HttpResponse::Ok().json(MessageResponse {
    message: "Product deleted successfully",
  }))
}
