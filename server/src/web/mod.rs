// tea_store/src/web/mod.rs

// Declare child modules
pub mod cors;
pub mod dto;
pub mod handlers;
pub mod routes;

pub use cors::build_cors;
pub use routes::configure_app_routes;
