//! The `ReportStore` trait.
//!
//! Implemented by storage backends (e.g. `fallreport-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::report::{NewReport, Report, ReportId};

/// Abstraction over a fall report store backend.
///
/// Reports are write-once: there is no update or delete. All methods return
/// `Send` futures so the trait can be used from axum handlers.
pub trait ReportStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a report and all of its collection values atomically.
  ///
  /// Either everything is stored and the new id is returned, or nothing is.
  fn create_report(
    &self,
    input: NewReport,
  ) -> impl Future<Output = Result<ReportId, Self::Error>> + Send + '_;

  /// Return every stored report with its collections attached, in storage
  /// order. An empty store yields an empty `Vec`.
  fn list_reports(
    &self,
  ) -> impl Future<Output = Result<Vec<Report>, Self::Error>> + Send + '_;
}
