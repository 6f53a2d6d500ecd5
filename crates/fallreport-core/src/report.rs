//! Report — one documented fall incident.

use serde::{Deserialize, Serialize};

use crate::collection::Collections;

/// Store-generated report identifier.
pub type ReportId = i64;

/// Input to [`ReportStore::create_report`](crate::store::ReportStore::create_report).
///
/// Text fields are opaque: nothing here is parsed or validated. The store
/// enforces only its NOT NULL constraints, so a missing `elderly_name` fails
/// at insert time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReport {
  pub elderly_name:           Option<String>,
  /// Free text; not interpreted as a boolean.
  pub was_fall_last_3_months: Option<String>,
  pub accident_date:          Option<String>,
  pub accident_time:          Option<String>,
  pub accident_place:         Option<String>,
  pub witness:                Option<String>,
  /// `None` is stored as NULL; the API layer supplies `""` when the field is
  /// absent from the request.
  pub additional_content:     Option<String>,
  pub person_number:          Option<String>,
  pub was_fall_inside:        Option<bool>,
  pub collections:            Collections,
}

/// A stored report with its collections reassembled.
///
/// Parent fields serialize under their column names; the collections are
/// flattened in under their camelCase names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
  pub id:                     ReportId,
  pub elderly_name:           String,
  pub was_fall_last_3_months: Option<String>,
  pub accident_date:          Option<String>,
  pub accident_time:          Option<String>,
  pub accident_place:         Option<String>,
  pub witness:                Option<String>,
  pub additional_content:     Option<String>,
  pub person_number:          Option<String>,
  pub was_fall_inside:        bool,
  #[serde(flatten)]
  pub collections:            Collections,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn report_serializes_flat() {
    let report = Report {
      id:                     7,
      elderly_name:           "Jane Doe".into(),
      was_fall_last_3_months: Some("unsure".into()),
      accident_date:          None,
      accident_time:          None,
      accident_place:         Some("kitchen".into()),
      witness:                None,
      additional_content:     Some(String::new()),
      person_number:          None,
      was_fall_inside:        true,
      collections:            Collections {
        fall_reason: vec!["slipped".into()],
        ..Default::default()
      },
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["elderly_name"], "Jane Doe");
    assert_eq!(json["was_fall_last_3_months"], "unsure");
    assert_eq!(json["was_fall_inside"], true);
    assert_eq!(json["fallReason"], serde_json::json!(["slipped"]));
    assert_eq!(json["photos"], serde_json::json!([]));
    assert!(json.get("collections").is_none());
  }
}
