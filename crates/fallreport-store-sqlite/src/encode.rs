//! Mapping between domain types and the SQLite tables and column values that
//! hold them.

use fallreport_core::{
  collection::{CollectionKind, Collections},
  report::{Report, ReportId},
};
use rusqlite::types::Value;

// ─── CollectionKind ──────────────────────────────────────────────────────────

/// The `(table, value column)` pair that stores a collection kind.
pub fn collection_table(kind: CollectionKind) -> (&'static str, &'static str) {
  match kind {
    CollectionKind::FallReason => ("fall_reasons", "reason"),
    CollectionKind::UserActivity => ("user_activities", "activity"),
    CollectionKind::PrecedingSymptoms => ("preceding_symptoms", "symptom"),
    CollectionKind::FallConsequence => ("fall_consequences", "consequence"),
    CollectionKind::InjuryType => ("injury_types", "injury"),
    CollectionKind::TakenMeasures => ("taken_measures", "measure"),
    CollectionKind::Photos => ("report_photos", "photo_uri"),
  }
}

// ─── Boolean ─────────────────────────────────────────────────────────────────

/// Read a `BOOLEAN` column loosely: SQLite has no real boolean type, so any
/// non-zero number or a `"true"`/`"1"` string counts as set. NULL is `false`.
pub fn decode_bool(v: &Value) -> bool {
  match v {
    Value::Integer(i) => *i != 0,
    Value::Real(f) => *f != 0.0,
    Value::Text(s) => {
      let s = s.trim();
      s == "1" || s.eq_ignore_ascii_case("true")
    }
    Value::Null | Value::Blob(_) => false,
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list for [`RawReport::from_row`], in order.
pub const REPORT_COLUMNS: &str = "id, elderly_name, was_fall_last_3_months, \
  accident_date, accident_time, accident_place, witness, additional_content, \
  person_number, was_fall_inside";

/// Values read directly from a `reports` row.
pub struct RawReport {
  pub id:                     ReportId,
  pub elderly_name:           String,
  pub was_fall_last_3_months: Option<String>,
  pub accident_date:          Option<String>,
  pub accident_time:          Option<String>,
  pub accident_place:         Option<String>,
  pub witness:                Option<String>,
  pub additional_content:     Option<String>,
  pub person_number:          Option<String>,
  pub was_fall_inside:        Value,
}

impl RawReport {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawReport {
      id:                     row.get(0)?,
      elderly_name:           row.get(1)?,
      was_fall_last_3_months: row.get(2)?,
      accident_date:          row.get(3)?,
      accident_time:          row.get(4)?,
      accident_place:         row.get(5)?,
      witness:                row.get(6)?,
      additional_content:     row.get(7)?,
      person_number:          row.get(8)?,
      was_fall_inside:        row.get(9)?,
    })
  }

  pub fn into_report(self, collections: Collections) -> Report {
    Report {
      id:                     self.id,
      elderly_name:           self.elderly_name,
      was_fall_last_3_months: self.was_fall_last_3_months,
      accident_date:          self.accident_date,
      accident_time:          self.accident_time,
      accident_place:         self.accident_place,
      witness:                self.witness,
      additional_content:     self.additional_content,
      person_number:          self.person_number,
      was_fall_inside:        decode_bool(&self.was_fall_inside),
      collections,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bool_decoding() {
    assert!(decode_bool(&Value::Integer(1)));
    assert!(decode_bool(&Value::Integer(-3)));
    assert!(!decode_bool(&Value::Integer(0)));
    assert!(!decode_bool(&Value::Null));
    assert!(decode_bool(&Value::Text("true".into())));
    assert!(decode_bool(&Value::Text("1".into())));
    assert!(!decode_bool(&Value::Text("false".into())));
    assert!(!decode_bool(&Value::Text("".into())));
  }

  #[test]
  fn collection_tables_are_distinct() {
    use strum::IntoEnumIterator as _;

    let mut tables: Vec<_> =
      CollectionKind::iter().map(|k| collection_table(k).0).collect();
    tables.sort_unstable();
    tables.dedup();
    assert_eq!(tables.len(), 7);
  }
}
