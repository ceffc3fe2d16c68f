//! Tolerant readers for the optional posting fields.
//!
//! A value of the wrong shape is dropped with a warning instead of failing
//! the whole document. Values pass through `serde_yaml::Value`, which keeps
//! mapping order and accepts input from either format.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::posting::{ApplicationInfo, Qualifications, ScalarValue, TeamStructure, TextOrList};

fn raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
  Ok(Option::<Value>::deserialize(deserializer)?.filter(|v| !v.is_null()))
}

fn shaped<T: DeserializeOwned>(field: &str, value: Value) -> Option<T> {
  match serde_yaml::from_value(value) {
    Ok(parsed) => Some(parsed),
    Err(e) => {
      tracing::warn!(field, error = %e, "ignoring malformed posting field");
      None
    }
  }
}

fn mapping_key(field: &str, key: &Value) -> Option<String> {
  match key {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    _ => {
      tracing::warn!(field, "ignoring non-scalar key");
      None
    }
  }
}

pub(crate) fn skills<'de, D: Deserializer<'de>>(d: D) -> Result<Option<TextOrList>, D::Error> {
  Ok(raw(d)?.and_then(|v| shaped("skills", v)))
}

pub(crate) fn benefits<'de, D: Deserializer<'de>>(d: D) -> Result<Option<TextOrList>, D::Error> {
  Ok(raw(d)?.and_then(|v| shaped("benefits", v)))
}

pub(crate) fn application<'de, D: Deserializer<'de>>(
  d: D,
) -> Result<Option<ApplicationInfo>, D::Error> {
  Ok(raw(d)?.and_then(|v| shaped("application", v)))
}

pub(crate) fn job_type<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
  Ok(raw(d)?.and_then(|v| shaped("jobType", v)))
}

/// Text, or a mapping whose malformed categories are skipped one by one
pub(crate) fn qualifications<'de, D: Deserializer<'de>>(
  d: D,
) -> Result<Option<Qualifications>, D::Error> {
  const FIELD: &str = "qualifications";

  Ok(match raw(d)? {
    None => None,
    Some(Value::String(text)) => Some(Qualifications::Text(text)),
    Some(Value::Mapping(map)) => {
      let mut categories = IndexMap::new();
      for (key, value) in map {
        let Some(key) = mapping_key(FIELD, &key) else {
          continue;
        };
        if let Some(entry) = shaped::<TextOrList>(FIELD, value) {
          categories.insert(key, entry);
        }
      }
      Some(Qualifications::Categories(categories))
    }
    Some(_) => {
      tracing::warn!(field = FIELD, "expected text or mapping, ignoring");
      None
    }
  })
}

/// Text, or a mapping of scalars. Entries holding lists, maps or null are skipped.
pub(crate) fn team_structure<'de, D: Deserializer<'de>>(
  d: D,
) -> Result<Option<TeamStructure>, D::Error> {
  const FIELD: &str = "teamStructure";

  Ok(match raw(d)? {
    None => None,
    Some(Value::String(text)) => Some(TeamStructure::Text(text)),
    Some(Value::Mapping(map)) => {
      let mut fields = IndexMap::new();
      for (key, value) in map {
        let Some(key) = mapping_key(FIELD, &key) else {
          continue;
        };
        match scalar(value) {
          Some(value) => {
            fields.insert(key, value);
          }
          None => tracing::warn!(field = FIELD, key = %key, "ignoring non-scalar entry"),
        }
      }
      Some(TeamStructure::Fields(fields))
    }
    Some(_) => {
      tracing::warn!(field = FIELD, "expected text or mapping, ignoring");
      None
    }
  })
}

fn scalar(value: Value) -> Option<ScalarValue> {
  match value {
    Value::Bool(b) => Some(ScalarValue::Flag(b)),
    Value::Number(n) => match n.as_i64() {
      Some(i) => Some(ScalarValue::Integer(i)),
      None => n.as_f64().map(ScalarValue::Float),
    },
    Value::String(s) => Some(ScalarValue::Text(s)),
    _ => None,
  }
}
