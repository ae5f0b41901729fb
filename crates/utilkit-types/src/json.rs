//! Conversion between [`Value`] and JSON.
//!
//! JSON has no `undefined` and no date type, so the mapping is lossy in one
//! direction:
//!
//! - `Undefined` object entries are omitted, and `Undefined` array items
//!   become `null` (the `JSON.stringify` convention).
//! - `DateTime` becomes an RFC 3339 string.
//! - Non-finite numbers become `null`.
//!
//! Parsing never produces `Undefined` or `DateTime`.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;

use crate::error::TypeResult;
use crate::value::{Structure, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::DateTime(dt) => serde_json::Value::String(dt.to_rfc3339()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .filter(|(_, v)| !v.is_undefined())
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

/// Integral numbers keep an integer JSON representation so that `1` does not
/// print as `1.0`.
fn number_to_json(n: f64) -> serde_json::Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return serde_json::Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => number_to_json(*n).serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::DateTime(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let defined = map.iter().filter(|(_, v)| !v.is_undefined());
                let mut out = serializer.serialize_map(None)?;
                for (k, v) in defined {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

/// Parse a JSON document into a [`Value`].
pub fn from_json_str(input: &str) -> TypeResult<Value> {
    Ok(serde_json::from_str::<serde_json::Value>(input)?.into())
}

/// Parse a JSON document that must be an object.
pub fn structure_from_json_str(input: &str) -> TypeResult<Structure> {
    from_json_str(input)?.into_structure()
}

/// Render a value as pretty-printed JSON.
pub fn to_json_string_pretty(value: &Value) -> TypeResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::{TypeError, ValueKind};

    #[test]
    fn json_object_becomes_structure() {
        let value = Value::from(json!({"a": 1, "b": [true, null], "c": {"d": "x"}}));
        let map = value.as_object().unwrap();
        assert_eq!(map["a"], Value::Number(1.0));
        assert_eq!(
            map["b"],
            Value::Array(vec![Value::Bool(true), Value::Null])
        );
        assert_eq!(map["c"].get("d"), Some(&Value::from("x")));
    }

    #[test]
    fn undefined_entries_are_omitted() {
        let mut map = Structure::new();
        map.insert("kept".into(), Value::from(1));
        map.insert("gone".into(), Value::Undefined);
        let json = serde_json::Value::from(Value::Object(map));
        assert_eq!(json, json!({"kept": 1}));
    }

    #[test]
    fn undefined_array_items_become_null() {
        let value = Value::Array(vec![Value::Undefined, Value::from(2)]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!([null, 2]));
    }

    #[test]
    fn integral_numbers_stay_integers() {
        assert_eq!(serde_json::to_string(&Value::from(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Value::from(2.5)).unwrap(), "2.5");
        assert_eq!(serde_json::to_string(&Value::Number(f64::NAN)).unwrap(), "null");
    }

    #[test]
    fn datetime_serializes_as_rfc3339() {
        let dt = Utc.with_ymd_and_hms(2023, 9, 5, 12, 0, 0).unwrap();
        let json = serde_json::Value::from(Value::from(dt));
        assert_eq!(json, json!("2023-09-05T12:00:00+00:00"));
    }

    #[test]
    fn serialize_matches_conversion() {
        let value = Value::from(json!({"a": [1, {"b": 2.5}], "c": "s"}));
        let via_serde = serde_json::to_value(&value).unwrap();
        let via_from = serde_json::Value::from(&value);
        assert_eq!(via_serde, via_from);
    }

    #[test]
    fn deserialize_through_serde() {
        let value: Value = serde_json::from_str(r#"{"x": [1, 2]}"#).unwrap();
        assert_eq!(value.get("x").and_then(Value::as_array).map(Vec::len), Some(2));
    }

    #[test]
    fn structure_parse_rejects_arrays() {
        let err = structure_from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, TypeError::NotAnObject { kind: ValueKind::Array }));
        assert!(matches!(structure_from_json_str("{"), Err(TypeError::Json(_))));
    }
}
