//! Recursive, policy-driven structure merging.
//!
//! Sources are applied left to right onto a destination structure. For every
//! source key:
//!
//! 1. Keys that could reach an object prototype (`__proto__`, `constructor`,
//!    `prototype`) are skipped.
//! 2. Two arrays are replaced, concatenated, or concatenated as a set,
//!    depending on the [`MergePolicy`].
//! 3. Two plain objects are merged recursively.
//! 4. Anything else is overwritten, except that an `Undefined` source value
//!    only overrides when the policy allows it.

use tracing::{debug, trace};
use utilkit_types::{Structure, Value};

use crate::error::{MergeError, MergeResult};
use crate::policy::MergePolicy;

/// Keys never copied into a merge result.
pub const UNSAFE_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Returns `true` if `key` is one of the [`UNSAFE_KEYS`].
pub fn is_unsafe_key(key: &str) -> bool {
    UNSAFE_KEYS.contains(&key)
}

/// A merge engine bound to one [`MergePolicy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeEngine {
    policy: MergePolicy,
}

impl MergeEngine {
    pub fn new(policy: MergePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Merge `sources` into `destination` and return the destination.
    ///
    /// Every argument must be a plain object; nothing is mutated if any of
    /// them is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use utilkit_merge::MergeEngine;
    /// use utilkit_types::Value;
    ///
    /// let mut dest = Value::from(serde_json::json!({"a": [1, 2], "b": {"x": 1}}));
    /// let src = Value::from(serde_json::json!({"a": [2, 3], "b": {"y": 2}}));
    /// MergeEngine::default().merge(&mut dest, &[src]).unwrap();
    ///
    /// assert_eq!(
    ///     serde_json::Value::from(&dest),
    ///     serde_json::json!({"a": [1, 2, 3], "b": {"x": 1, "y": 2}})
    /// );
    /// ```
    pub fn merge<'a>(
        &self,
        destination: &'a mut Value,
        sources: &[Value],
    ) -> MergeResult<&'a mut Value> {
        ensure_object(0, destination)?;
        for (i, source) in sources.iter().enumerate() {
            ensure_object(i + 1, source)?;
        }

        debug!(sources = sources.len(), policy = ?self.policy, "merge");
        if let Value::Object(dest) = &mut *destination {
            strip_unsafe_keys(dest);
            for source in sources {
                if let Value::Object(src) = source {
                    self.merge_into(dest, src);
                }
            }
        }
        Ok(destination)
    }

    /// Merge every argument, in order, into a fresh structure.
    ///
    /// With no arguments the result is empty.
    pub fn merge_all(&self, objects: &[Value]) -> MergeResult<Structure> {
        let mut result = Value::object();
        self.merge(&mut result, objects)?;
        Ok(result.into_structure().unwrap_or_default())
    }

    /// Merge one typed structure into another.
    pub fn merge_into(&self, destination: &mut Structure, source: &Structure) {
        for (key, incoming) in source {
            if is_unsafe_key(key) {
                debug!(key = %key, "skipping unsafe key");
                continue;
            }

            let merged_in_place = match (destination.get_mut(key.as_str()), incoming) {
                (Some(Value::Array(existing)), Value::Array(items)) => {
                    self.merge_arrays(existing, items);
                    true
                }
                (Some(Value::Object(existing)), Value::Object(nested)) => {
                    self.merge_into(existing, nested);
                    true
                }
                _ => false,
            };
            if merged_in_place {
                continue;
            }

            if incoming.is_undefined() && !self.policy.allow_undefined_overrides {
                continue;
            }
            destination.insert(key.clone(), sanitized(incoming));
        }
    }

    fn merge_arrays(&self, existing: &mut Vec<Value>, items: &[Value]) {
        if !self.policy.merge_arrays {
            *existing = items.iter().map(sanitized).collect();
            return;
        }

        trace!(
            existing = existing.len(),
            incoming = items.len(),
            unique = self.policy.unique_array_items,
            "concatenating arrays"
        );
        existing.extend(items.iter().map(sanitized));
        if self.policy.unique_array_items {
            dedup_in_order(existing);
        }
    }
}

/// Merge with the default policy.
pub fn merge<'a>(destination: &'a mut Value, sources: &[Value]) -> MergeResult<&'a mut Value> {
    MergeEngine::default().merge(destination, sources)
}

fn ensure_object(position: usize, value: &Value) -> MergeResult<()> {
    if value.is_plain_object() {
        Ok(())
    } else {
        Err(MergeError::InvalidArgumentKind {
            position,
            kind: value.kind(),
        })
    }
}

/// Keep the first of every group of SameValueZero-equal items.
fn dedup_in_order(items: &mut Vec<Value>) {
    let mut kept: Vec<Value> = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        if !kept.iter().any(|k| k.same_value_zero(&item)) {
            kept.push(item);
        }
    }
    *items = kept;
}

/// Deep copy of `value` without unsafe keys at any depth.
fn sanitized(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(k, _)| !is_unsafe_key(k))
                .map(|(k, v)| (k.clone(), sanitized(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(sanitized).collect()),
        other => other.clone(),
    }
}

fn strip_unsafe_keys(map: &mut Structure) {
    map.retain(|k, _| !is_unsafe_key(k));
    map.values_mut().for_each(strip_nested);
}

fn strip_nested(value: &mut Value) {
    match value {
        Value::Object(nested) => strip_unsafe_keys(nested),
        Value::Array(items) => items.iter_mut().for_each(strip_nested),
        _ => {}
    }
}
