//! High-level SDK for utilkit.
//!
//! [`Toolkit`] bundles a configured merge engine and validator with the
//! string and numeric helpers. This is the main entry point for applications
//! embedding utilkit.

pub mod config;
pub mod error;
pub mod toolkit;

pub use config::ToolkitConfig;
pub use error::{SdkError, SdkResult};
pub use toolkit::Toolkit;

// Re-export key types
pub use utilkit_merge::{MergeEngine, MergePolicy};
pub use utilkit_numerics::{FileEntry, FileSizeReport, NumericsConfig, RejectedFile};
pub use utilkit_types::{Structure, Value, ValueKind};
pub use utilkit_validators::{StrongPasswordReport, StrongPasswordRules, Validator, ValidatorConfig};
