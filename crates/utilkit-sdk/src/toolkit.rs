use std::path::Path;

use tracing::debug;
use utilkit_merge::{MergeEngine, MergePolicy};
use utilkit_numerics::{FileEntry, FileSizeReport};
use utilkit_types::{Structure, Value};
use utilkit_validators::{StrongPasswordReport, Validator};

use crate::config::ToolkitConfig;
use crate::error::SdkResult;

/// High-level utilkit API.
///
/// Holds a merge engine and a validator built from one [`ToolkitConfig`].
#[derive(Clone, Debug, Default)]
pub struct Toolkit {
    config: ToolkitConfig,
    engine: MergeEngine,
    validator: Validator,
}

impl Toolkit {
    pub fn new(config: ToolkitConfig) -> Self {
        let engine = MergeEngine::new(config.merge);
        let validator = Validator::new(config.validators.clone());
        Self {
            config,
            engine,
            validator,
        }
    }

    /// Build a toolkit from a TOML configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> SdkResult<Self> {
        Ok(Self::new(ToolkitConfig::load(path)?))
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    pub fn policy(&self) -> MergePolicy {
        self.engine.policy()
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    // ---- Structures ----

    /// Merge `sources` into `destination` with the configured policy.
    pub fn merge<'a>(
        &self,
        destination: &'a mut Value,
        sources: &[Value],
    ) -> SdkResult<&'a mut Value> {
        Ok(self.engine.merge(destination, sources)?)
    }

    /// Merge every value in `objects` into a fresh structure.
    pub fn merge_all(&self, objects: &[Value]) -> SdkResult<Structure> {
        let merged = self.engine.merge_all(objects)?;
        debug!(inputs = objects.len(), keys = merged.len(), "merged structures");
        Ok(merged)
    }

    /// Parse each JSON document and merge them left to right.
    pub fn merge_json<S: AsRef<str>>(&self, documents: &[S]) -> SdkResult<Structure> {
        let values = documents
            .iter()
            .map(|doc| utilkit_types::json::from_json_str(doc.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.merge_all(&values)
    }

    pub fn pick<I, K>(&self, obj: &Structure, keys: I) -> Structure
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        utilkit_merge::pick(obj, keys)
    }

    pub fn inclusive_pick<I, K>(&self, obj: &Structure, keys: I) -> Structure
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        utilkit_merge::inclusive_pick(obj, keys)
    }

    pub fn omit<I, K>(&self, obj: &Structure, keys: I) -> Structure
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        utilkit_merge::omit(obj, keys)
    }

    // ---- Validation ----

    pub fn is_valid_email(&self, email: &str) -> bool {
        self.validator.is_valid_email(email)
    }

    pub fn is_valid_url(&self, url: &str) -> bool {
        self.validator.is_valid_url(url)
    }

    pub fn is_valid_user_name(&self, user_name: &str) -> bool {
        self.validator.is_valid_user_name(user_name)
    }

    pub fn is_valid_date(&self, date: &str) -> bool {
        self.validator.is_valid_date(date)
    }

    pub fn is_valid_phone_number(&self, phone_number: &str, locale: Option<&str>) -> bool {
        self.validator.is_valid_phone_number(phone_number, locale)
    }

    pub fn is_strong_password(&self, password: &str) -> StrongPasswordReport {
        self.validator.is_strong_password(password)
    }

    pub fn is_valid_file_extension<S: AsRef<str>>(
        &self,
        allowed: &[S],
        file_name: &str,
    ) -> SdkResult<bool> {
        Ok(self.validator.is_valid_file_extension(allowed, file_name)?)
    }

    // ---- Strings ----

    pub fn capitalize(&self, s: &str) -> String {
        utilkit_strings::capitalize(s)
    }

    pub fn capitalize_all(&self, s: &str) -> String {
        utilkit_strings::capitalize_all(s)
    }

    pub fn truncated_string(&self, s: &str, start: usize, end: usize) -> String {
        utilkit_strings::truncated_string(s, start, end)
    }

    pub fn blacklist(&self, s: &str, chars: &str) -> SdkResult<String> {
        Ok(utilkit_strings::blacklist(s, chars)?)
    }

    pub fn whitelist(&self, s: &str, chars: &str) -> SdkResult<String> {
        Ok(utilkit_strings::whitelist(s, chars)?)
    }

    // ---- Numerics ----

    pub fn file_size(&self, bytes: u64) -> String {
        utilkit_numerics::file_size(bytes)
    }

    pub fn format_duration(&self, seconds: u64) -> String {
        utilkit_numerics::format_duration(seconds)
    }

    pub fn shorten_large_number(&self, n: f64) -> String {
        utilkit_numerics::shorten_large_number(n)
    }

    /// Screen `files` against `max_mb`, or the configured upload limit.
    pub fn screen_files(&self, files: &[FileEntry], max_mb: Option<f64>) -> FileSizeReport {
        let limit = max_mb.unwrap_or(self.config.numerics.max_upload_mb);
        utilkit_numerics::calculate_size_files(files, limit)
    }

    /// Stat each path and screen the results.
    pub fn screen_paths<P: AsRef<Path>>(
        &self,
        paths: &[P],
        max_mb: Option<f64>,
    ) -> SdkResult<FileSizeReport> {
        let files = paths
            .iter()
            .map(FileEntry::from_path)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.screen_files(&files, max_mb))
    }
}
