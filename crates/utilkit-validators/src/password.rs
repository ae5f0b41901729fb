//! Password confirmation and strength checks.
//!
//! Both checks report every failed criterion at once instead of stopping at
//! the first one, so a form can highlight all of them.

use serde::{Deserialize, Serialize};
use utilkit_patterns::password_composition;

/// A password and its confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordMatch<'a> {
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub min_length: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordMatchReport {
    /// Either side has fewer than `min_length` characters.
    pub is_too_short: bool,
    pub is_matched: bool,
}

/// Compare a password with its confirmation.
pub fn is_password_matched(input: &PasswordMatch<'_>) -> PasswordMatchReport {
    let too_short = |s: &str| s.chars().count() < input.min_length;
    PasswordMatchReport {
        is_too_short: too_short(input.password) || too_short(input.confirm_password),
        is_matched: input.password == input.confirm_password,
    }
}

/// Minimum counts for [`is_strong_password`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrongPasswordRules {
    pub min_chars: usize,
    pub min_symbols: usize,
    pub min_numbers: usize,
}

impl Default for StrongPasswordRules {
    fn default() -> Self {
        Self {
            min_chars: 2,
            min_symbols: 2,
            min_numbers: 2,
        }
    }
}

/// Which strength criteria a password meets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrongPasswordReport {
    pub has_char: bool,
    pub has_symbol: bool,
    pub has_number: bool,
    pub has_uppercase: bool,
}

impl StrongPasswordReport {
    pub fn is_strong(&self) -> bool {
        self.has_char && self.has_symbol && self.has_number && self.has_uppercase
    }
}

pub fn is_strong_password(password: &str, rules: &StrongPasswordRules) -> StrongPasswordReport {
    let counts = password_composition(password);
    StrongPasswordReport {
        has_char: counts.char_count >= rules.min_chars,
        has_symbol: counts.symbol_count >= rules.min_symbols,
        has_number: counts.number_count >= rules.min_numbers,
        has_uppercase: counts.has_uppercase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(password: &str, confirm: &str, min: usize) -> PasswordMatchReport {
        is_password_matched(&PasswordMatch {
            password,
            confirm_password: confirm,
            min_length: min,
        })
    }

    #[test]
    fn matching_passwords() {
        let r = matched("hunter22", "hunter22", 8);
        assert!(r.is_matched);
        assert!(!r.is_too_short);
    }

    #[test]
    fn confirmation_must_be_exact() {
        assert!(!matched("hunter22", "hunter2", 4).is_matched);
        assert!(!matched("hunter22", "", 0).is_matched);
    }

    #[test]
    fn short_confirmation_flags_too_short() {
        let r = matched("longenough", "short", 8);
        assert!(r.is_too_short);
    }

    #[test]
    fn length_counts_characters() {
        assert!(!matched("ñññ", "ñññ", 3).is_too_short);
    }

    #[test]
    fn strong_password_passes_defaults() {
        let r = is_strong_password("Ab12!@", &StrongPasswordRules::default());
        assert!(r.is_strong());
    }

    #[test]
    fn weak_password_reports_each_failure() {
        let r = is_strong_password("abc", &StrongPasswordRules::default());
        assert_eq!(
            r,
            StrongPasswordReport {
                has_char: true,
                has_symbol: false,
                has_number: false,
                has_uppercase: false,
            }
        );
        assert!(!r.is_strong());
    }

    #[test]
    fn custom_rules() {
        let rules = StrongPasswordRules {
            min_chars: 1,
            min_symbols: 0,
            min_numbers: 3,
        };
        let r = is_strong_password("A123", &rules);
        assert!(r.is_strong());
        assert!(!is_strong_password("A12", &rules).has_number);
    }
}
