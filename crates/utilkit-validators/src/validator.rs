use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::password::{is_strong_password, StrongPasswordReport, StrongPasswordRules};
use crate::web::{is_valid_user_name, DEFAULT_DISALLOWED_USERNAMES};
use crate::{file, phone, web};

/// Defaults applied by a [`Validator`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub password: StrongPasswordRules,
    pub disallowed_usernames: Vec<String>,
    /// Locale used when a phone number is checked without one.
    pub default_phone_locale: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            password: StrongPasswordRules::default(),
            disallowed_usernames: DEFAULT_DISALLOWED_USERNAMES
                .iter()
                .map(|w| w.to_string())
                .collect(),
            default_phone_locale: "en-US".into(),
        }
    }
}

/// Validation entry point carrying configured defaults.
#[derive(Clone, Debug, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn is_strong_password(&self, password: &str) -> StrongPasswordReport {
        is_strong_password(password, &self.config.password)
    }

    pub fn is_valid_user_name(&self, user_name: &str) -> bool {
        is_valid_user_name(user_name, &self.config.disallowed_usernames)
    }

    /// Validate against `locale`, or the configured default locale.
    pub fn is_valid_phone_number(&self, phone_number: &str, locale: Option<&str>) -> bool {
        let locale = locale.unwrap_or(&self.config.default_phone_locale);
        phone::is_valid_phone_number(phone_number, locale)
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        web::is_valid_email(email)
    }

    pub fn is_valid_url(&self, url: &str) -> bool {
        web::is_valid_url(url)
    }

    pub fn is_valid_date(&self, date: &str) -> bool {
        crate::date::is_valid_date(date)
    }

    pub fn is_valid_file_extension<S: AsRef<str>>(
        &self,
        allowed: &[S],
        file_name: &str,
    ) -> Result<bool> {
        file::is_valid_file_extension(allowed, file_name)
    }
}
