// tea_store/src/main.rs

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tea_catalog::{CatalogStore, MemoryStore, MongoStore};
use tea_store::config::{AppConfig, StoreBackend};
use tea_store::state::AppState;
use tea_store::telemetry::init_tracing;
use tea_store::web::{build_cors, configure_app_routes};

const STORE_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Load application configuration before logging so LOG_FORMAT is honoured
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);
  init_tracing(app_config.log_format);

  tracing::info!("Starting tea store API server...");

  match app_config.store_backend {
    StoreBackend::Mongo => {
      let store = MongoStore::connect(&app_config.mongodb_url, &app_config.mongodb_db)
        .await
        .context("Failed to connect to MongoDB")?;
      serve(Arc::new(store), app_config).await
    }
    StoreBackend::Memory => {
      tracing::warn!("Using the in-memory store; data is lost on restart.");
      serve(Arc::new(MemoryStore::new()), app_config).await
    }
  }
}

/// Runs the HTTP server until it is stopped, then releases the store.
async fn serve<S: CatalogStore + 'static>(store: Arc<S>, app_config: Arc<AppConfig>) -> anyhow::Result<()> {
  let app_state = AppState::new(store.clone(), app_config.clone());

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let server = HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(build_cors(&app_state.config.cors_origins))
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await;

  tracing::info!("HTTP server stopped; releasing store.");
  if tokio::time::timeout(STORE_SHUTDOWN_TIMEOUT, store.shutdown()).await.is_err() {
    tracing::warn!("Store did not shut down within {:?}.", STORE_SHUTDOWN_TIMEOUT);
  }

  server.context("HTTP server failed")
}
