//! Key projections over a [`Structure`].
//!
//! None of these recurse into nested values or touch the input.

use utilkit_types::{Structure, Value};

/// Keep only the requested keys that exist in `obj`.
///
/// ```
/// use utilkit_merge::pick;
/// use utilkit_types::{Structure, Value};
///
/// let obj: Structure = [("a", 1), ("b", 2), ("c", 3)]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), Value::from(v)))
///     .collect();
/// let picked = pick(&obj, ["a", "c", "missing"]);
/// assert_eq!(picked.keys().collect::<Vec<_>>(), ["a", "c"]);
/// ```
pub fn pick<I, K>(obj: &Structure, keys: I) -> Structure
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    keys.into_iter()
        .filter_map(|key| {
            let key = key.as_ref();
            obj.get_key_value(key).map(|(k, v)| (k.clone(), v.clone()))
        })
        .collect()
}

/// Keep every requested key; keys absent from `obj` map to [`Value::Undefined`].
pub fn inclusive_pick<I, K>(obj: &Structure, keys: I) -> Structure
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    keys.into_iter()
        .map(|key| {
            let key = key.as_ref();
            let value = obj.get(key).cloned().unwrap_or(Value::Undefined);
            (key.to_string(), value)
        })
        .collect()
}

/// Keep every key of `obj` except the requested ones.
pub fn omit<I, K>(obj: &Structure, keys: I) -> Structure
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let excluded: Vec<K> = keys.into_iter().collect();
    obj.iter()
        .filter(|(k, _)| !excluded.iter().any(|e| e.as_ref() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// The object-likeness test.
pub fn is_plain_object(value: &Value) -> bool {
    value.is_plain_object()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Structure {
        Value::from(json!({"a": 1, "b": "2", "c": 3}))
            .into_structure()
            .unwrap()
    }

    fn to_json(s: Structure) -> serde_json::Value {
        serde_json::Value::from(Value::Object(s))
    }

    #[test]
    fn pick_drops_missing_keys() {
        assert_eq!(to_json(pick(&sample(), ["a", "c", "z"])), json!({"a": 1, "c": 3}));
    }

    #[test]
    fn pick_with_no_keys_is_empty() {
        assert!(pick(&sample(), Vec::<String>::new()).is_empty());
    }

    #[test]
    fn inclusive_pick_fills_undefined() {
        let picked = inclusive_pick(&sample(), ["c", "z"]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked["c"], Value::from(3));
        assert_eq!(picked["z"], Value::Undefined);
    }

    #[test]
    fn omit_removes_requested_keys() {
        assert_eq!(to_json(omit(&sample(), ["a", "c"])), json!({"b": "2"}));
        assert_eq!(to_json(omit(&sample(), ["z"])), to_json(sample()));
    }

    #[test]
    fn accepts_owned_keys() {
        let keys = vec![String::from("b")];
        assert_eq!(to_json(pick(&sample(), &keys)), json!({"b": "2"}));
        assert_eq!(to_json(omit(&sample(), keys)), json!({"a": 1, "c": 3}));
    }

    #[test]
    fn plain_object_check() {
        assert!(is_plain_object(&Value::object()));
        assert!(!is_plain_object(&Value::Array(vec![])));
        assert!(!is_plain_object(&Value::Null));
    }
}
