use thiserror::Error;

/// Errors raised for malformed validator arguments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the allowed extensions list must contain at least one extension")]
    EmptyExtensionList,

    #[error("the file name {0:?} does not have a valid file extension")]
    MissingExtension(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
