//! HTTP server for the fall report backend.
//!
//! Mounts the JSON API from [`fallreport_api`] under `/api` and wraps it in a
//! single-origin CORS policy and request tracing.

use std::{path::PathBuf, sync::Arc};

use axum::{Router, http::HeaderValue};
use fallreport_core::store::ReportStore;
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
  /// The only origin allowed to call the API from a browser.
  pub cors_origin:   String,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "0.0.0.0";
  pub const DEFAULT_PORT: u16 = 3000;
  pub const DEFAULT_DATABASE_PATH: &'static str = "./elderly_reports.db";
  pub const DEFAULT_CORS_ORIGIN: &'static str = "http://localhost:5173";
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the top-level [`Router`]: the API under `/api`, restricted to
/// `cors_origin`.
pub fn router<S>(store: Arc<S>, cors_origin: HeaderValue) -> Router
where
  S: ReportStore + Send + Sync + 'static,
{
  let cors = CorsLayer::new()
    .allow_origin(cors_origin)
    .allow_methods(Any)
    .allow_headers(Any);

  Router::new()
    .nest("/api", fallreport_api::api_router(store))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}
