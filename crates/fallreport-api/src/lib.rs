//! JSON REST API for fall reports.
//!
//! Exposes an axum [`Router`] backed by any
//! [`fallreport_core::store::ReportStore`]. CORS, tracing and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", fallreport_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod reports;

use std::sync::Arc;

use axum::{Router, routing::get};
use fallreport_core::store::ReportStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ReportStore + Send + Sync + 'static,
{
  Router::new()
    .route("/reports", get(reports::list::<S>).post(reports::create::<S>))
    .with_state(store)
}
