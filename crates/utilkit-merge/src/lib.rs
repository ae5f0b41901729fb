//! Deep-merge engine for utilkit.
//!
//! Combines an ordered sequence of source structures into a destination
//! structure under an explicit [`MergePolicy`], and provides the companion
//! helpers that reshape structures and sequences without mutating them.
//!
//! # Key Types
//!
//! - [`MergeEngine`] -- Applies sources left to right under one policy
//! - [`MergePolicy`] -- Array-merge and undefined-override flags
//! - [`MergeError`] -- Rejection of non-object arguments
//!
//! # Quick Start
//!
//! ```rust
//! use utilkit_merge::{MergeEngine, MergePolicy};
//! use utilkit_types::Value;
//!
//! let engine = MergeEngine::new(MergePolicy::replace_arrays());
//! let merged = engine
//!     .merge_all(&[
//!         Value::from(serde_json::json!({"tags": ["a"], "n": 1})),
//!         Value::from(serde_json::json!({"tags": ["b"]})),
//!     ])
//!     .unwrap();
//! assert_eq!(merged["tags"], Value::Array(vec![Value::from("b")]));
//! assert_eq!(merged["n"], Value::from(1));
//! ```

pub mod array_move;
pub mod engine;
pub mod error;
pub mod pick;
pub mod policy;

pub use array_move::{array_move_immutable, array_move_mutable};
pub use engine::{is_unsafe_key, merge, MergeEngine, UNSAFE_KEYS};
pub use error::{MergeError, MergeResult};
pub use pick::{inclusive_pick, is_plain_object, omit, pick};
pub use policy::MergePolicy;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use utilkit_types::{Structure, Value};

    fn leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            Just(Value::Undefined),
            any::<bool>().prop_map(Value::from),
            (-50i32..50).prop_map(Value::from),
            "[a-z]{0,3}".prop_map(Value::from),
        ]
    }

    fn value() -> impl Strategy<Value = Value> {
        leaf().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-e]", inner, 0..4).prop_map(Value::Object),
            ]
        })
    }

    fn structure() -> impl Strategy<Value = Structure> {
        prop::collection::btree_map("[a-f]{1,2}", value(), 0..6)
    }

    fn structure_with_unsafe_keys() -> impl Strategy<Value = Structure> {
        let key = prop_oneof![
            "[a-c]",
            Just("__proto__".to_string()),
            Just("constructor".to_string()),
            Just("prototype".to_string()),
        ];
        prop::collection::btree_map(key, value(), 0..6)
    }

    fn contains_unsafe_key(value: &Value) -> bool {
        match value {
            Value::Object(map) => map
                .iter()
                .any(|(k, v)| is_unsafe_key(k) || contains_unsafe_key(v)),
            Value::Array(items) => items.iter().any(contains_unsafe_key),
            _ => false,
        }
    }

    proptest! {
        #[test]
        fn merging_nothing_is_identity(x in structure()) {
            let mut dest = Value::Object(x.clone());
            MergeEngine::default().merge(&mut dest, &[Value::object()]).unwrap();
            prop_assert_eq!(dest, Value::Object(x));
        }

        #[test]
        fn left_to_right_override_associates(a in structure(), b in structure()) {
            for policy in [
                MergePolicy::default(),
                MergePolicy::replace_arrays(),
                MergePolicy::concat_arrays().with_undefined_overrides(false),
            ] {
                let engine = MergeEngine::new(policy);
                let mut stepwise = Value::Object(engine.merge_all(&[Value::Object(a.clone())]).unwrap());
                engine.merge(&mut stepwise, &[Value::Object(b.clone())]).unwrap();
                let at_once = engine
                    .merge_all(&[Value::Object(a.clone()), Value::Object(b.clone())])
                    .unwrap();
                prop_assert_eq!(stepwise, Value::Object(at_once));
            }
        }

        #[test]
        fn unsafe_keys_never_reach_result(
            a in structure_with_unsafe_keys(),
            b in structure_with_unsafe_keys(),
        ) {
            let result = MergeEngine::default()
                .merge_all(&[Value::Object(a), Value::Object(b)])
                .unwrap();
            prop_assert!(!contains_unsafe_key(&Value::Object(result)));
        }

        #[test]
        fn pick_and_omit_partition(x in structure(), mask in prop::collection::vec(any::<bool>(), 6)) {
            let keys: Vec<String> = x
                .keys()
                .zip(mask.iter().cycle())
                .filter(|(_, take)| **take)
                .map(|(k, _)| k.clone())
                .collect();
            let picked = pick(&x, &keys);
            let rest = omit(&x, &keys);

            prop_assert!(picked.keys().all(|k| !rest.contains_key(k)));
            prop_assert_eq!(picked.len() + rest.len(), x.len());
            let mut joined = picked;
            joined.extend(rest);
            prop_assert_eq!(joined, x);
        }

        #[test]
        fn array_move_preserves_items(
            items in prop::collection::vec(0u8..10, 0..8),
            from in -10isize..10,
            to in -10isize..10,
        ) {
            let moved = array_move_immutable(&items, from, to);
            let mut a = moved.clone();
            let mut b = items.clone();
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }
    }
}
