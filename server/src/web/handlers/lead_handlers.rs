// tea_store/src/web/handlers/lead_handlers.rs

use actix_web::{web, HttpResponse};
use tea_catalog::LeadInput;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::dto::IdResponse;

/// Creates a lead, or updates the one already registered under the same
/// phone number (or email).
#[instrument(name = "handler::capture_lead", skip(app_state, payload))]
pub async fn capture_lead_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<LeadInput>,
) -> Result<HttpResponse, AppError> {
  let lead = app_state.catalog.leads.upsert(payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(IdResponse { id: lead.id.to_hex() }))
}
