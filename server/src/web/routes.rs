// tea_store/src/web/routes.rs

use actix_web::{error, web, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{address_handlers, category_handlers, lead_handlers, product_handlers};

async fn status_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Malformed bodies, query strings and path segments are client errors and
// share the API's error body.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .error_handler(|err, _req| error::Error::from(AppError::Validation(format!("Invalid JSON body: {}", err))))
}

fn query_config() -> web::QueryConfig {
  web::QueryConfig::default()
    .error_handler(|err, _req| error::Error::from(AppError::Validation(format!("Invalid query string: {}", err))))
}

fn path_config() -> web::PathConfig {
  web::PathConfig::default()
    .error_handler(|err, _req| error::Error::from(AppError::Validation(format!("Invalid path: {}", err))))
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .app_data(query_config())
    .app_data(path_config())
    .route("/", web::get().to(status_handler))
    .service(
      web::scope("/api/products")
        .service(
          web::resource(["", "/"])
            .route(web::get().to(product_handlers::list_products_handler))
            .route(web::post().to(product_handlers::create_product_handler)),
        )
        // Registered before `/{product_id}` so "category" is never read as a slug.
        .route(
          "/category/{category_name}",
          web::get().to(product_handlers::products_by_category_handler),
        )
        .service(
          web::resource("/{product_id}")
            .route(web::get().to(product_handlers::get_product_handler))
            .route(web::put().to(product_handlers::update_product_handler))
            .route(web::delete().to(product_handlers::delete_product_handler)),
        ),
    )
    .service(
      web::scope("/api/categories")
        .service(
          web::resource(["", "/"])
            .route(web::get().to(category_handlers::list_categories_handler))
            .route(web::post().to(category_handlers::create_category_handler)),
        )
        .service(
          web::resource("/{category_id}")
            .route(web::get().to(category_handlers::get_category_handler))
            .route(web::put().to(category_handlers::update_category_handler))
            .route(web::delete().to(category_handlers::delete_category_handler)),
        ),
    )
    .service(web::resource(["/leads", "/leads/"]).route(web::post().to(lead_handlers::capture_lead_handler)))
    .service(
      web::resource(["/addresses", "/addresses/"]).route(web::post().to(address_handlers::create_address_handler)),
    );
}
