use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use utilkit_merge::MergePolicy;
use utilkit_numerics::NumericsConfig;
use utilkit_validators::ValidatorConfig;

use crate::error::{SdkError, SdkResult};

/// Configuration for a [`Toolkit`](crate::Toolkit).
///
/// Every section and field is optional in TOML; missing ones take their
/// defaults.
///
/// ```toml
/// [merge]
/// merge_arrays = false
///
/// [validators]
/// disallowed_usernames = ["admin", "guest"]
///
/// [numerics]
/// max_upload_mb = 5.0
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub merge: MergePolicy,
    pub validators: ValidatorConfig,
    pub numerics: NumericsConfig,
}

impl ToolkitConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Load a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SdkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| SdkError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded toolkit configuration");
        Ok(config)
    }

    /// Load `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&PathBuf>) -> SdkResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
