// tea_store/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use tea_catalog::store::mongo::{DEFAULT_DATABASE, DEFAULT_MONGODB_URL};

/// Which document store backs the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
  Mongo,
  Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
  Any,
  List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub mongodb_url: String,
  pub mongodb_db: String,
  pub store_backend: StoreBackend,
  pub cors_origins: CorsOrigins,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the
  /// process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "8000")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let mongodb_url = get_or("MONGODB_URL", DEFAULT_MONGODB_URL);
    let mongodb_db = get_or("MONGODB_DB", DEFAULT_DATABASE);
    if mongodb_db.trim().is_empty() {
      return Err(AppError::Config("MONGODB_DB must not be empty".to_string()));
    }

    let store_backend = match get_or("CATALOG_STORE", "mongo").to_ascii_lowercase().as_str() {
      "mongo" | "mongodb" => StoreBackend::Mongo,
      "memory" => StoreBackend::Memory,
      other => {
        return Err(AppError::Config(format!(
          "Invalid CATALOG_STORE '{}': expected 'mongo' or 'memory'",
          other
        )))
      }
    };

    let cors_origins = parse_cors_origins(&get_or("CORS_ALLOWED_ORIGINS", "*"))?;

    let log_format = match get_or("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
      "pretty" | "text" => LogFormat::Pretty,
      "json" => LogFormat::Json,
      other => {
        return Err(AppError::Config(format!(
          "Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'",
          other
        )))
      }
    };

    // The connection string may carry credentials, so it is not logged.
    tracing::debug!(
      host = %server_host,
      port = server_port,
      database = %mongodb_db,
      backend = ?store_backend,
      "Application configuration loaded."
    );

    Ok(Self {
      server_host,
      server_port,
      mongodb_url,
      mongodb_db,
      store_backend,
      cors_origins,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins> {
  if raw.trim() == "*" {
    return Ok(CorsOrigins::Any);
  }
  let origins: Vec<String> = raw
    .split(',')
    .map(str::trim)
    .filter(|o| !o.is_empty())
    .map(str::to_string)
    .collect();
  if origins.is_empty() {
    return Err(AppError::Config(
      "CORS_ALLOWED_ORIGINS must be '*' or a comma-separated list of origins".to_string(),
    ));
  }
  Ok(CorsOrigins::List(origins))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|name| vars.get(name).cloned())
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.bind_address(), "127.0.0.1:8000");
    assert_eq!(cfg.mongodb_url, "mongodb://localhost:27017");
    assert_eq!(cfg.mongodb_db, "tea_store");
    assert_eq!(cfg.store_backend, StoreBackend::Mongo);
    assert_eq!(cfg.cors_origins, CorsOrigins::Any);
    assert_eq!(cfg.log_format, LogFormat::Pretty);
  }

  #[test]
  fn overrides_are_read() {
    let cfg = config_from(&[
      ("SERVER_PORT", "9090"),
      ("MONGODB_DB", "tea_store_staging"),
      ("CATALOG_STORE", "memory"),
      ("CORS_ALLOWED_ORIGINS", "https://shop.example.com, http://localhost:3000"),
      ("LOG_FORMAT", "json"),
    ])
    .unwrap();
    assert_eq!(cfg.server_port, 9090);
    assert_eq!(cfg.mongodb_db, "tea_store_staging");
    assert_eq!(cfg.store_backend, StoreBackend::Memory);
    assert_eq!(
      cfg.cors_origins,
      CorsOrigins::List(vec!["https://shop.example.com".into(), "http://localhost:3000".into()])
    );
    assert_eq!(cfg.log_format, LogFormat::Json);
  }

  #[test]
  fn bad_values_are_config_errors() {
    assert!(matches!(config_from(&[("SERVER_PORT", "http")]), Err(AppError::Config(_))));
    assert!(matches!(config_from(&[("CATALOG_STORE", "redis")]), Err(AppError::Config(_))));
    assert!(matches!(config_from(&[("CORS_ALLOWED_ORIGINS", " , ")]), Err(AppError::Config(_))));
  }
}
