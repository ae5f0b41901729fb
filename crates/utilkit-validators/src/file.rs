use crate::error::{Result, ValidationError};

/// Check a file name's extension against an allow list.
///
/// The extension is the text after the last `.`, lowercased. A name without
/// any `.` is treated as all extension, the way a path splitter would; a name
/// ending in `.` has no extension and is an error.
pub fn is_valid_file_extension<S: AsRef<str>>(allowed: &[S], file_name: &str) -> Result<bool> {
    if allowed.is_empty() {
        return Err(ValidationError::EmptyExtensionList);
    }

    let extension = file_name.rsplit('.').next().unwrap_or_default();
    if extension.is_empty() {
        return Err(ValidationError::MissingExtension(file_name.to_string()));
    }

    let extension = extension.to_lowercase();
    Ok(allowed.iter().any(|a| a.as_ref() == extension))
}
