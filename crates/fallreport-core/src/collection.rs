//! Child collections — the multi-valued text attributes of a report.
//!
//! Every report owns exactly seven collections. Each one is an unordered bag
//! of free-text values; duplicates are allowed.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

// ─── Kind ────────────────────────────────────────────────────────────────────

/// The seven kinds of child collection attached to a report.
///
/// The string form is the JSON field name the collection travels under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum CollectionKind {
  FallReason,
  UserActivity,
  PrecedingSymptoms,
  FallConsequence,
  InjuryType,
  TakenMeasures,
  /// URIs of externally stored photos, not the image data itself.
  Photos,
}

impl CollectionKind {
  /// JSON field name, e.g. `"fallReason"`.
  pub fn field_name(self) -> &'static str { self.into() }
}

// ─── Values ──────────────────────────────────────────────────────────────────

/// The values of all seven collections of one report.
///
/// Missing fields deserialize as empty, so a body that omits a collection is
/// equivalent to one that sends `[]`. Non-string scalar items are kept as
/// their text form (see [`crate::text`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Collections {
  #[serde(deserialize_with = "crate::text::list")]
  pub fall_reason:        Vec<String>,
  #[serde(deserialize_with = "crate::text::list")]
  pub user_activity:      Vec<String>,
  #[serde(deserialize_with = "crate::text::list")]
  pub preceding_symptoms: Vec<String>,
  #[serde(deserialize_with = "crate::text::list")]
  pub fall_consequence:   Vec<String>,
  #[serde(deserialize_with = "crate::text::list")]
  pub injury_type:        Vec<String>,
  #[serde(deserialize_with = "crate::text::list")]
  pub taken_measures:     Vec<String>,
  #[serde(deserialize_with = "crate::text::list")]
  pub photos:             Vec<String>,
}

impl Collections {
  pub fn get(&self, kind: CollectionKind) -> &[String] {
    match kind {
      CollectionKind::FallReason => &self.fall_reason,
      CollectionKind::UserActivity => &self.user_activity,
      CollectionKind::PrecedingSymptoms => &self.preceding_symptoms,
      CollectionKind::FallConsequence => &self.fall_consequence,
      CollectionKind::InjuryType => &self.injury_type,
      CollectionKind::TakenMeasures => &self.taken_measures,
      CollectionKind::Photos => &self.photos,
    }
  }

  pub fn get_mut(&mut self, kind: CollectionKind) -> &mut Vec<String> {
    match kind {
      CollectionKind::FallReason => &mut self.fall_reason,
      CollectionKind::UserActivity => &mut self.user_activity,
      CollectionKind::PrecedingSymptoms => &mut self.preceding_symptoms,
      CollectionKind::FallConsequence => &mut self.fall_consequence,
      CollectionKind::InjuryType => &mut self.injury_type,
      CollectionKind::TakenMeasures => &mut self.taken_measures,
      CollectionKind::Photos => &mut self.photos,
    }
  }

  /// Total number of values across all collections.
  pub fn len(&self) -> usize {
    use strum::IntoEnumIterator as _;
    CollectionKind::iter().map(|k| self.get(k).len()).sum()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator as _;

  use super::*;

  #[test]
  fn field_names_match_serde_names() {
    let mut c = Collections::default();
    for kind in CollectionKind::iter() {
      c.get_mut(kind).push(kind.field_name().to_owned());
    }

    let json = serde_json::to_value(&c).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 7);
    for kind in CollectionKind::iter() {
      assert_eq!(obj[kind.field_name()], serde_json::json!([kind.field_name()]));
    }
  }

  #[test]
  fn missing_fields_default_to_empty() {
    let c: Collections =
      serde_json::from_str(r#"{"photos":["file:///a.jpg"]}"#).unwrap();
    assert!(c.fall_reason.is_empty());
    assert_eq!(c.photos, ["file:///a.jpg"]);
    assert_eq!(c.len(), 1);
  }

  #[test]
  fn scalar_items_are_kept_as_text() {
    let c: Collections =
      serde_json::from_str(r#"{"injuryType":["bruise",2],"takenMeasures":[true]}"#).unwrap();
    assert_eq!(c.injury_type, ["bruise", "2"]);
    assert_eq!(c.taken_measures, ["true"]);
  }
}
