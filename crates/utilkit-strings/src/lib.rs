//! String helpers for utilkit.
//!
//! All functions work on Unicode scalar values: lengths and offsets count
//! characters, not bytes.

use regex::Regex;
use thiserror::Error;

pub use utilkit_patterns::is_valid_hex_color as is_hex_color;

/// Default end offset for [`truncated_string`].
pub const DEFAULT_TRUNCATE_END: usize = 30;

#[derive(Debug, Error)]
pub enum StringsError {
    #[error("invalid character set {chars:?}: {source}")]
    InvalidCharacterSet {
        chars: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, StringsError>;

/// Uppercase the first character and trim whatever follows it.
///
/// Blank input is returned unchanged.
pub fn capitalize(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }
    let mut chars = s.chars();
    let mut out = String::with_capacity(s.len());
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    out.push_str(chars.as_str().trim());
    out
}

/// [`capitalize`], then uppercase the first character of every space
/// separated word.
///
/// ```
/// assert_eq!(utilkit_strings::capitalize_all("hello big  world "), "Hello Big  World");
/// ```
pub fn capitalize_all(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }
    capitalize(s)
        .split(' ')
        .map(upper_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cut the trimmed text to the characters in `start..end`, adding `...` when
/// text was dropped at the end.
///
/// - Blank text, or `start >= end`, yields the trimmed text.
/// - A `start` past the original length yields the original text.
/// - Text no longer than `end` yields everything from `start`.
pub fn truncated_string(s: &str, start: usize, end: usize) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() || start >= end {
        return trimmed.to_string();
    }

    let len = s.chars().count();
    if start >= len {
        return s.to_string();
    }
    if len <= end {
        return char_slice(trimmed, start, len);
    }
    let mut out = char_slice(trimmed, start, end);
    out.push_str("...");
    out
}

fn char_slice(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Remove every character matched by the regex character set `chars`
/// (for example `"abc"` or `"a-z0-9"`).
pub fn blacklist(s: &str, chars: &str) -> Result<String> {
    if chars.is_empty() {
        return Ok(s.to_string());
    }
    let re = character_set(&format!("[{chars}]+"), chars)?;
    Ok(re.replace_all(s, "").into_owned())
}

/// Keep only the characters matched by the regex character set `chars`.
pub fn whitelist(s: &str, chars: &str) -> Result<String> {
    if chars.is_empty() {
        return Ok(String::new());
    }
    let re = character_set(&format!("[^{chars}]+"), chars)?;
    Ok(re.replace_all(s, "").into_owned())
}

fn character_set(pattern: &str, chars: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| StringsError::InvalidCharacterSet {
        chars: chars.to_string(),
        source,
    })
}

pub fn equals(s: &str, comparison: &str) -> bool {
    s == comparison
}

/// `true` when lowercasing changes nothing.
pub fn is_lowercase(s: &str) -> bool {
    s == s.to_lowercase()
}

/// `true` when uppercasing changes nothing.
pub fn is_uppercase(s: &str) -> bool {
    s == s.to_uppercase()
}
