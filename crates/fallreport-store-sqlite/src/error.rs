//! Error type for `fallreport-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// Every insert succeeded but `COMMIT` did not; nothing was persisted.
  #[error("transaction commit failed: {0}")]
  Commit(#[source] rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
