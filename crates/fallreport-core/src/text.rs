//! Lenient deserialization for opaque text fields.
//!
//! Report fields are free text, but clients are not consistent about quoting:
//! `"wasFallLast3Months": true` or `"personNumber": 19400101` are stored as
//! their text form (`"true"`, `"19400101"`) rather than rejected.

use std::fmt;

use serde::{Deserialize, Deserializer, de};

/// A JSON scalar (string, bool or number) read as its text form.
struct Scalar(String);

impl<'de> Deserialize<'de> for Scalar {
  fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    d.deserialize_any(ScalarVisitor).map(Scalar)
  }
}

struct ScalarVisitor;

impl de::Visitor<'_> for ScalarVisitor {
  type Value = String;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("a string, boolean or number")
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> { Ok(v.to_owned()) }

  fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> { Ok(v) }

  fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> { Ok(v.to_string()) }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> { Ok(v.to_string()) }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> { Ok(v.to_string()) }

  fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> { Ok(v.to_string()) }
}

/// `deserialize_with` for `Option<String>`; `null` is `None`.
pub fn opt<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
  Ok(Option::<Scalar>::deserialize(d)?.map(|s| s.0))
}

/// `deserialize_with` for `Vec<String>`.
pub fn list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
  Ok(Vec::<Scalar>::deserialize(d)?.into_iter().map(|s| s.0).collect())
}
