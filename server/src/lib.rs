// tea_store/src/lib.rs

//! HTTP surface of the tea store: configuration, lifecycle glue, error
//! mapping and the actix-web routes over the `tea_catalog` services.

pub mod config;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
