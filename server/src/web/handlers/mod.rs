// tea_store/src/web/handlers/mod.rs

// Declare handler modules
pub mod address_handlers;
pub mod category_handlers;
pub mod lead_handlers;
pub mod product_handlers;
