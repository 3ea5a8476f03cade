// tea_store/src/web/handlers/address_handlers.rs

use actix_web::{web, HttpResponse};
use tea_catalog::AddressDraft;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::dto::IdResponse;

#[instrument(name = "handler::create_address", skip(app_state, payload))]
pub async fn create_address_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddressDraft>,
) -> Result<HttpResponse, AppError> {
  let address = app_state.catalog.addresses.create(payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(IdResponse {
    id: address.id.to_hex(),
  }))
}
