//! [`SqliteStore`] — the SQLite implementation of [`ReportStore`].

use std::path::Path;

use fallreport_core::{
  collection::{CollectionKind, Collections},
  report::{NewReport, Report, ReportId},
  store::ReportStore,
};
use rusqlite::TransactionBehavior;
use strum::IntoEnumIterator as _;

use crate::{
  encode::{collection_table, RawReport, REPORT_COLUMNS},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A fall report store backed by a single SQLite file.
///
/// Cloning is cheap — every clone talks to the same background connection.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  pub(crate) async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Close the underlying connection. Other clones of this store fail with a
  /// database error afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }
}

// ─── Statement helpers ───────────────────────────────────────────────────────

fn insert_report(
  conn:  &rusqlite::Connection,
  input: &NewReport,
) -> rusqlite::Result<ReportId> {
  conn
    .prepare_cached(
      "INSERT INTO reports (
         elderly_name, was_fall_last_3_months, accident_date, accident_time,
         accident_place, witness, additional_content, person_number,
         was_fall_inside
       ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?
    .execute(rusqlite::params![
      input.elderly_name,
      input.was_fall_last_3_months,
      input.accident_date,
      input.accident_time,
      input.accident_place,
      input.witness,
      input.additional_content,
      input.person_number,
      input.was_fall_inside,
    ])?;
  Ok(conn.last_insert_rowid())
}

fn insert_values(
  conn:      &rusqlite::Connection,
  report_id: ReportId,
  kind:      CollectionKind,
  values:    &[String],
) -> rusqlite::Result<()> {
  if values.is_empty() {
    return Ok(());
  }
  let (table, column) = collection_table(kind);
  let mut stmt = conn
    .prepare_cached(&format!("INSERT INTO {table} (report_id, {column}) VALUES (?1, ?2)"))?;
  for value in values {
    stmt.execute(rusqlite::params![report_id, value])?;
  }
  Ok(())
}

fn select_values(
  conn:      &rusqlite::Connection,
  report_id: ReportId,
  kind:      CollectionKind,
) -> rusqlite::Result<Vec<String>> {
  let (table, column) = collection_table(kind);
  let mut stmt =
    conn.prepare_cached(&format!("SELECT {column} FROM {table} WHERE report_id = ?1"))?;
  // Values are nullable in the schema; a NULL becomes an empty string rather
  // than failing the whole listing.
  stmt
    .query_map(rusqlite::params![report_id], |row| {
      Ok(row.get::<_, Option<String>>(0)?.unwrap_or_default())
    })?
    .collect()
}

// ─── ReportStore impl ────────────────────────────────────────────────────────

impl ReportStore for SqliteStore {
  type Error = Error;

  async fn create_report(&self, input: NewReport) -> Result<ReportId> {
    let value_count = input.collections.len();

    // The transaction guard rolls back on drop, so every early `?` below
    // leaves nothing behind. A failed COMMIT is kept apart from the other
    // failures so it can be reported as such.
    let committed = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let report_id = insert_report(&tx, &input)?;
        for kind in CollectionKind::iter() {
          insert_values(&tx, report_id, kind, input.collections.get(kind))?;
        }
        Ok(tx.commit().map(|()| report_id))
      })
      .await?;

    let report_id = committed.map_err(Error::Commit)?;
    tracing::debug!(report_id, value_count, "report inserted");
    Ok(report_id)
  }

  async fn list_reports(&self) -> Result<Vec<Report>> {
    let reports = self
      .conn
      .call(|conn| {
        // One read transaction so the parents and their children come from
        // the same snapshot.
        let tx = conn.transaction()?;

        let raws = {
          let mut stmt = tx.prepare(&format!("SELECT {REPORT_COLUMNS} FROM reports"))?;
          stmt
            .query_map([], RawReport::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };

        let mut reports = Vec::with_capacity(raws.len());
        for raw in raws {
          let mut collections = Collections::default();
          for kind in CollectionKind::iter() {
            *collections.get_mut(kind) = select_values(&tx, raw.id, kind)?;
          }
          reports.push(raw.into_report(collections));
        }

        tx.commit()?;
        Ok(reports)
      })
      .await?;

    tracing::debug!(count = reports.len(), "reports listed");
    Ok(reports)
  }
}
