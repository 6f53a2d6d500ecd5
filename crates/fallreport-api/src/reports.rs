//! Handlers for `/reports` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/reports` | Every report with its collections; `[]` if none |
//! | `POST` | `/reports` | Body: [`NewReportBody`]; returns `{message, reportId}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use fallreport_core::{
  collection::Collections,
  report::{NewReport, Report, ReportId},
  store::ReportStore,
  text,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /reports`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Report>>, ApiError>
where
  S: ReportStore,
{
  let reports = store.list_reports().await.map_err(|e| {
    tracing::error!(error = %e, "failed to list reports");
    ApiError::Store(Box::new(e))
  })?;
  Ok(Json(reports))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /reports`.
///
/// Every field is optional on the wire. A missing `elderlyname` is passed
/// through and rejected by the store's NOT NULL constraint. Text fields also
/// accept booleans and numbers, kept as their text form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReportBody {
  #[serde(rename = "elderlyname", default, deserialize_with = "text::opt")]
  pub elderly_name:           Option<String>,
  #[serde(default, deserialize_with = "text::opt")]
  pub was_fall_last_3_months: Option<String>,
  #[serde(default, deserialize_with = "text::opt")]
  pub accident_date:          Option<String>,
  #[serde(default, deserialize_with = "text::opt")]
  pub accident_time:          Option<String>,
  #[serde(default, deserialize_with = "text::opt")]
  pub accident_place:         Option<String>,
  #[serde(default, deserialize_with = "text::opt")]
  pub person_number:          Option<String>,
  pub was_fall_inside:        Option<bool>,
  #[serde(default, deserialize_with = "text::opt")]
  pub witness:                Option<String>,
  /// `""` when absent; an explicit `null` stays `None`.
  #[serde(default = "empty_text", deserialize_with = "text::opt")]
  pub additional_content:     Option<String>,
  #[serde(flatten)]
  pub collections:            Collections,
}

fn empty_text() -> Option<String> { Some(String::new()) }

impl From<NewReportBody> for NewReport {
  fn from(b: NewReportBody) -> Self {
    NewReport {
      elderly_name:           b.elderly_name,
      was_fall_last_3_months: b.was_fall_last_3_months,
      accident_date:          b.accident_date,
      accident_time:          b.accident_time,
      accident_place:         b.accident_place,
      witness:                b.witness,
      additional_content:     b.additional_content,
      person_number:          b.person_number,
      was_fall_inside:        b.was_fall_inside,
      collections:            b.collections,
    }
  }
}

/// Response body of a successful `POST /reports`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBody {
  pub message:   String,
  pub report_id: ReportId,
}

/// `POST /reports` — returns 200 + [`CreatedBody`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewReportBody>, JsonRejection>,
) -> Result<Json<CreatedBody>, ApiError>
where
  S: ReportStore,
{
  let Json(body) = body.inspect_err(|e| {
    tracing::warn!(error = %e, "rejected report body");
  })?;

  let report_id = store
    .create_report(NewReport::from(body))
    .await
    .map_err(|e| {
      tracing::error!(error = %e, "failed to insert report");
      ApiError::Store(Box::new(e))
    })?;

  tracing::info!(report_id, "report added");
  Ok(Json(CreatedBody {
    message: "Report successfully added".to_owned(),
    report_id,
  }))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn body_defaults() {
    let body: NewReportBody =
      serde_json::from_str(r#"{"elderlyname":"Jane Doe","wasFallInside":true,"fallReason":["slipped","dizzy"]}"#)
        .unwrap();
    let input = NewReport::from(body);

    assert_eq!(input.elderly_name.as_deref(), Some("Jane Doe"));
    assert_eq!(input.was_fall_inside, Some(true));
    assert_eq!(input.additional_content.as_deref(), Some(""));
    assert_eq!(input.collections.fall_reason, ["slipped", "dizzy"]);
    assert!(input.collections.photos.is_empty());
  }

  #[test]
  fn body_field_names() {
    let body: NewReportBody = serde_json::from_str(
      r#"{
        "elderlyname": "Jane Doe",
        "wasFallLast3Months": "no",
        "accidentDate": "2024-03-01",
        "accidentTime": "14:30",
        "accidentPlace": "garden",
        "personNumber": "1234",
        "witness": "neighbour",
        "additionalContent": "notes",
        "takenMeasures": ["ice pack"],
        "photos": ["a.jpg"]
      }"#,
    )
    .unwrap();

    assert_eq!(body.was_fall_last_3_months.as_deref(), Some("no"));
    assert_eq!(body.accident_date.as_deref(), Some("2024-03-01"));
    assert_eq!(body.accident_time.as_deref(), Some("14:30"));
    assert_eq!(body.accident_place.as_deref(), Some("garden"));
    assert_eq!(body.person_number.as_deref(), Some("1234"));
    assert_eq!(body.witness.as_deref(), Some("neighbour"));
    assert_eq!(body.additional_content.as_deref(), Some("notes"));
    assert_eq!(body.collections.taken_measures, ["ice pack"]);
    assert_eq!(body.collections.photos, ["a.jpg"]);
  }

  #[test]
  fn body_accepts_non_string_scalars() {
    let body: NewReportBody = serde_json::from_str(
      r#"{"elderlyname":"J","wasFallLast3Months":true,"personNumber":19400101,"fallReason":[3]}"#,
    )
    .unwrap();

    assert_eq!(body.was_fall_last_3_months.as_deref(), Some("true"));
    assert_eq!(body.person_number.as_deref(), Some("19400101"));
    assert_eq!(body.collections.fall_reason, ["3"]);
  }

  #[test]
  fn explicit_null_additional_content_stays_null() {
    let body: NewReportBody =
      serde_json::from_str(r#"{"elderlyname":"J","additionalContent":null}"#).unwrap();
    assert!(body.additional_content.is_none());
  }
}
