//! Email, URL and username checks.

use utilkit_patterns::{is_valid_mail, is_valid_url_pattern, is_valid_username};

/// Usernames rejected by default, compared case-insensitively.
pub const DEFAULT_DISALLOWED_USERNAMES: [&str; 3] = ["admin", "root", "password"];

/// Validate an email address after lowercasing it.
pub fn is_valid_email(email: &str) -> bool {
    is_valid_mail(&email.to_lowercase())
}

/// Validate an `http`, `https` or `ftp` URL. Empty input is invalid.
pub fn is_valid_url(url: &str) -> bool {
    !url.is_empty() && is_valid_url_pattern(url)
}

/// Validate a username against the username pattern and a word list.
///
/// ```
/// use utilkit_validators::{is_valid_user_name, DEFAULT_DISALLOWED_USERNAMES};
///
/// assert!(is_valid_user_name("jane_doe", &DEFAULT_DISALLOWED_USERNAMES));
/// assert!(!is_valid_user_name("Admin", &DEFAULT_DISALLOWED_USERNAMES));
/// ```
pub fn is_valid_user_name<S: AsRef<str>>(user_name: &str, disallowed: &[S]) -> bool {
    if !is_valid_username(user_name) {
        return false;
    }
    let lowered = user_name.to_lowercase();
    !disallowed.iter().any(|word| word.as_ref() == lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_case_insensitive() {
        assert!(is_valid_email("Jane.Doe@Example.COM"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_url("https://example.com/docs"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn username_pattern_and_word_list() {
        assert!(is_valid_user_name("user_01", &DEFAULT_DISALLOWED_USERNAMES));
        assert!(!is_valid_user_name("ROOT", &DEFAULT_DISALLOWED_USERNAMES));
        assert!(!is_valid_user_name("ab", &DEFAULT_DISALLOWED_USERNAMES));
        assert!(is_valid_user_name("root", &[] as &[&str]));
    }

    #[test]
    fn custom_word_list() {
        let words = vec![String::from("guest")];
        assert!(!is_valid_user_name("Guest", &words));
        assert!(is_valid_user_name("admin", &words));
    }
}
