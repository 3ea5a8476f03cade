// tea_store/src/web/cors.rs
use actix_cors::Cors;

use crate::config::CorsOrigins;

/// Browser access policy for the storefront API.
pub fn build_cors(origins: &CorsOrigins) -> Cors {
  match origins {
    CorsOrigins::Any => Cors::default()
      .allow_any_origin()
      .allow_any_method()
      .allow_any_header()
      .supports_credentials()
      .max_age(3600),
    CorsOrigins::List(list) => list
      .iter()
      .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
      .allow_any_method()
      .allow_any_header()
      .supports_credentials()
      .max_age(3600),
  }
}
