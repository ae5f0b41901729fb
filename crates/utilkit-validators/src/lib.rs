//! Input validators for utilkit.
//!
//! Stateless checks for form-style input. Most return a plain `bool` or a
//! report struct; only argument errors (such as an empty allow list) are
//! surfaced as [`ValidationError`].
//!
//! # Quick Start
//!
//! ```rust
//! use utilkit_validators::{Validator, ValidatorConfig};
//!
//! let validator = Validator::new(ValidatorConfig::default());
//! assert!(validator.is_valid_email("someone@example.com"));
//! assert!(!validator.is_strong_password("password").is_strong());
//! ```

pub mod date;
pub mod error;
pub mod file;
pub mod password;
pub mod phone;
pub mod validator;
pub mod web;

pub use date::is_valid_date;
pub use error::ValidationError;
pub use file::is_valid_file_extension;
pub use password::{
    is_password_matched, is_strong_password, PasswordMatch, PasswordMatchReport,
    StrongPasswordReport, StrongPasswordRules,
};
pub use phone::{is_valid_phone_number, supported_locales};
pub use validator::{Validator, ValidatorConfig};
pub use web::{is_valid_email, is_valid_url, is_valid_user_name, DEFAULT_DISALLOWED_USERNAMES};
