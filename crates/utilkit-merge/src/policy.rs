use serde::{Deserialize, Serialize};

/// Flags controlling how a [`MergeEngine`](crate::MergeEngine) combines values.
///
/// The defaults merge arrays as sets and let explicit `Undefined` values
/// clear existing ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePolicy {
    /// When `true`, a source key explicitly set to `Undefined` overrides the
    /// destination value. Keys that are simply absent never affect anything.
    pub allow_undefined_overrides: bool,
    /// When `true`, array values are concatenated. When `false`, the last
    /// array wins outright.
    pub merge_arrays: bool,
    /// When `true`, concatenated arrays drop repeated items, keeping the first
    /// occurrence.
    pub unique_array_items: bool,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            allow_undefined_overrides: true,
            merge_arrays: true,
            unique_array_items: true,
        }
    }
}

impl MergePolicy {
    /// Arrays replace each other instead of concatenating.
    pub fn replace_arrays() -> Self {
        Self {
            merge_arrays: false,
            ..Default::default()
        }
    }

    /// Arrays concatenate and keep duplicates.
    pub fn concat_arrays() -> Self {
        Self {
            unique_array_items: false,
            ..Default::default()
        }
    }

    /// Builder-style toggle for [`allow_undefined_overrides`](Self::allow_undefined_overrides).
    pub fn with_undefined_overrides(mut self, allow: bool) -> Self {
        self.allow_undefined_overrides = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let p = MergePolicy::default();
        assert!(p.allow_undefined_overrides);
        assert!(p.merge_arrays);
        assert!(p.unique_array_items);
    }

    #[test]
    fn presets() {
        assert!(!MergePolicy::replace_arrays().merge_arrays);
        let concat = MergePolicy::concat_arrays();
        assert!(concat.merge_arrays && !concat.unique_array_items);
        assert!(!MergePolicy::default()
            .with_undefined_overrides(false)
            .allow_undefined_overrides);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let p: MergePolicy = toml::from_str("merge_arrays = false").unwrap();
        assert!(!p.merge_arrays);
        assert!(p.unique_array_items);
        assert!(p.allow_undefined_overrides);
    }
}
