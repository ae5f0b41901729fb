//! Shared regular expressions for utilkit.
//!
//! Patterns are compiled once on first use and shared by the validator and
//! string crates.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

fn compile(pattern: &str) -> Regex {
    // Built-in patterns only; `all_patterns_compile` covers every one.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// ASCII letters.
pub static CHAR: Lazy<Regex> = Lazy::new(|| compile(r"[A-Za-z]"));

/// ASCII uppercase letters.
pub static CHAR_UPPER: Lazy<Regex> = Lazy::new(|| compile(r"[A-Z]"));

/// Symbols counted by the password strength check.
pub static SYMBOL: Lazy<Regex> = Lazy::new(|| compile(r"[$&+,:;=?@#|'<>.^*()%!-]"));

/// ASCII digits.
pub static NUMBER: Lazy<Regex> = Lazy::new(|| compile(r"[0-9]"));

pub static MAIL: Lazy<Regex> =
    Lazy::new(|| compile(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[A-Za-z]{2,3}$"));

/// Letters, digits and underscores, 3 to 20 characters.
pub static USERNAME: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9_]{3,20}$"));

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`, with or without `#`.
pub static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^#?([0-9A-F]{3}|[0-9A-F]{4}|[0-9A-F]{6}|[0-9A-F]{8})$"));

/// `http`, `https` or `ftp` URL with a 2 to 6 letter top-level domain.
pub static URL: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^((https?|ftp)://)(www\.)?[a-zA-Z0-9@:%._+~#?&/=^\s-]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%._+~#?&/=]*)$",
    )
});

pub fn is_valid_username(s: &str) -> bool {
    USERNAME.is_match(s)
}

pub fn is_valid_url_pattern(s: &str) -> bool {
    URL.is_match(s)
}

pub fn is_valid_mail(s: &str) -> bool {
    MAIL.is_match(s)
}

pub fn is_valid_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}

/// Character class counts of a password.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordComposition {
    pub char_count: usize,
    pub symbol_count: usize,
    pub number_count: usize,
    pub has_uppercase: bool,
}

/// Count letters, symbols and digits in `s`.
pub fn password_composition(s: &str) -> PasswordComposition {
    PasswordComposition {
        char_count: CHAR.find_iter(s).count(),
        symbol_count: SYMBOL.find_iter(s).count(),
        number_count: NUMBER.find_iter(s).count(),
        has_uppercase: CHAR_UPPER.is_match(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for re in [
            &CHAR, &CHAR_UPPER, &SYMBOL, &NUMBER, &MAIL, &USERNAME, &HEX_COLOR, &URL,
        ] {
            Lazy::force(re);
        }
    }

    #[test]
    fn usernames() {
        assert!(is_valid_username("john_doe42"));
        assert!(!is_valid_username("jo"));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username(&"x".repeat(21)));
    }

    #[test]
    fn mails() {
        assert!(is_valid_mail("someone@example.com"));
        assert!(is_valid_mail("first.last+tag@mail.co"));
        assert!(!is_valid_mail("someone@example.info"));
        assert!(!is_valid_mail("no-at-sign.com"));
    }

    #[test]
    fn hex_colors() {
        for ok in ["#fff", "fff", "#FfFf", "#a1b2c3", "#a1b2c3d4"] {
            assert!(is_valid_hex_color(ok), "{ok}");
        }
        for bad in ["#ff", "#fffff", "#ggg", "", "##fff"] {
            assert!(!is_valid_hex_color(bad), "{bad}");
        }
    }

    #[test]
    fn urls() {
        assert!(is_valid_url_pattern("https://www.example.com"));
        assert!(is_valid_url_pattern("http://example.org/path?q=1"));
        assert!(is_valid_url_pattern("ftp://files.example.net"));
        assert!(!is_valid_url_pattern("example.com"));
        assert!(!is_valid_url_pattern("mailto://x"));
    }

    #[test]
    fn composition_counts() {
        let c = password_composition("Ab1!c2#");
        assert_eq!(
            c,
            PasswordComposition {
                char_count: 3,
                symbol_count: 2,
                number_count: 2,
                has_uppercase: true,
            }
        );
        assert_eq!(password_composition(""), PasswordComposition::default());
    }
}
