use std::path::PathBuf;

/// Errors that can occur while reading file sizes.
#[derive(Debug, thiserror::Error)]
pub enum NumericsError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, NumericsError>;
