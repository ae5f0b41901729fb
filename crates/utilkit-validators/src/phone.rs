//! Mobile phone number validation by locale.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const PATTERNS: &[(&str, &str)] = &[
    ("de-DE", r"^((\+49|0)1)(5[0-25-9]\d|6([23]|0\d?)|7([0-57-9]|6\d))\d{7,9}$"),
    ("en-AU", r"^(\+?61|0)4\d{8}$"),
    ("en-CA", r"^((\+1|1)?( |-)?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})( |-)?([2-9][0-9]{2}( |-)?[0-9]{4})$"),
    ("en-GB", r"^(\+?44|0)7\d{9}$"),
    ("en-IN", r"^(\+?91|0)?[6789]\d{9}$"),
    ("en-US", r"^((\+1|1)?( |-)?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})( |-)?([2-9][0-9]{2}( |-)?[0-9]{4})$"),
    ("es-AR", r"^\+?549(11|[2368]\d)\d{8}$"),
    ("es-CL", r"^(\+?56|0)[2-9]\d{1}\d{7}$"),
    ("es-CO", r"^(\+?57)?3(0(0|1|2|4|5)|1\d|2[0-4]|5(0|1))\d{7}$"),
    ("es-ES", r"^(\+?34)?[67]\d{8}$"),
    ("es-MX", r"^(\+?52)?(1|01)?\d{10,11}$"),
    ("es-PE", r"^(\+?51)?9\d{8}$"),
    ("es-VE", r"^(\+?58)?(2|4)\d{9}$"),
    ("fr-FR", r"^(\+?33|0)[67]\d{8}$"),
    ("it-IT", r"^(\+?39)?\s?3\d{2} ?\d{6,7}$"),
    ("ja-JP", r"^(\+81[ -]?(\(0\))?|0)[6789]0[ -]?\d{4}[ -]?\d{4}$"),
    ("nl-NL", r"^(((\+|00)?31\(0\))|((\+|00)?31)|0)6{1}\d{8}$"),
    ("pt-BR", r"^((\+?55 ?[1-9]{2} ?)|(\+?55 ?\([1-9]{2}\) ?)|(0[1-9]{2} ?)|(\([1-9]{2}\) ?)|([1-9]{2} ?))((\d{4}-?\d{4})|(9[1-9]{1}\d{3}-?\d{4}))$"),
    ("pt-PT", r"^(\+?351)?9[1236]\d{7}$"),
    ("zh-CN", r"^((\+|00)86)?(1[3-9]|9[28])\d{9}$"),
];

static PHONE_PATTERNS: Lazy<BTreeMap<&'static str, Regex>> = Lazy::new(|| {
    PATTERNS
        .iter()
        .filter_map(|(locale, pattern)| match Regex::new(pattern) {
            Ok(re) => Some((*locale, re)),
            Err(e) => {
                debug!(locale, error = %e, "skipping phone pattern");
                None
            }
        })
        .collect()
});

/// Validate a mobile phone number for `locale` (e.g. `"en-US"`).
///
/// Surrounding whitespace is ignored. Unknown locales never validate.
pub fn is_valid_phone_number(phone_number: &str, locale: &str) -> bool {
    match PHONE_PATTERNS.get(locale) {
        Some(re) => re.is_match(phone_number.trim()),
        None => {
            debug!(locale, "no phone pattern for locale");
            false
        }
    }
}

/// Locales with a phone pattern, sorted.
pub fn supported_locales() -> Vec<&'static str> {
    PHONE_PATTERNS.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(supported_locales().len(), PATTERNS.len());
    }

    #[test]
    fn us_numbers() {
        assert!(is_valid_phone_number("(555) 555-1234", "en-US"));
        assert!(is_valid_phone_number("+1 212-555-0199", "en-US"));
        assert!(!is_valid_phone_number("123-456-7890", "en-US"));
    }

    #[test]
    fn spanish_numbers() {
        assert!(is_valid_phone_number("+34612345678", "es-ES"));
        assert!(is_valid_phone_number("  712345678 ", "es-ES"));
        assert!(!is_valid_phone_number("512345678", "es-ES"));
    }

    #[test]
    fn other_locales() {
        assert!(is_valid_phone_number("07123456789", "en-GB"));
        assert!(is_valid_phone_number("+55 11 91234-5678", "pt-BR"));
        assert!(is_valid_phone_number("+33612345678", "fr-FR"));
        assert!(is_valid_phone_number("13812345678", "zh-CN"));
    }

    #[test]
    fn unknown_locale_never_validates() {
        assert!(!is_valid_phone_number("+34612345678", "xx-XX"));
        assert!(!is_valid_phone_number("+34612345678", ""));
    }

    #[test]
    fn locales_are_sorted() {
        let locales = supported_locales();
        let mut sorted = locales.clone();
        sorted.sort_unstable();
        assert_eq!(locales, sorted);
        assert!(locales.contains(&"es-MX"));
    }
}
