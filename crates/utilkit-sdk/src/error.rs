use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("merge error: {0}")]
    Merge(#[from] utilkit_merge::MergeError),

    #[error("validation error: {0}")]
    Validation(#[from] utilkit_validators::ValidationError),

    #[error("strings error: {0}")]
    Strings(#[from] utilkit_strings::StringsError),

    #[error("numerics error: {0}")]
    Numerics(#[from] utilkit_numerics::NumericsError),

    #[error("value error: {0}")]
    Type(#[from] utilkit_types::TypeError),

    #[error("invalid configuration in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SdkResult<T> = Result<T, SdkError>;
