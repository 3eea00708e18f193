//! Settings schema definitions using serde.

use serde::{Deserialize, Serialize};
use transgate_common::{base_language, TransgateError};

/// i18n settings read by the translation facade and its engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Selects the real engine when `true`, the null engine otherwise.
    pub use_i18n: bool,
    /// Dotted identifier of the engine used when `use_i18n` is `true`.
    pub i18n_backend_real: String,
    /// Dotted identifier of the engine used when `use_i18n` is `false`.
    pub i18n_backend_null: String,
    /// Default language code.
    pub language_code: String,
    /// Supported languages.
    pub languages: Vec<LanguageEntry>,
    /// Base language codes written right-to-left.
    pub languages_bidi: Vec<String>,
    /// Name of the cookie carrying a user's language preference.
    pub language_cookie_name: String,
}

/// A supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Language code, e.g. `pt-br`.
    pub code: String,
    /// English name of the language.
    pub name: String,
}

impl LanguageEntry {
    /// Creates a new entry.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl Settings {
    /// Validates the settings.
    pub fn validate(&self) -> Result<(), TransgateError> {
        crate::validator::SettingsValidator::validate(self)
    }

    /// Backend identifier for the given value of the `use_i18n` flag.
    pub fn identifier_for(&self, use_i18n: bool) -> &str {
        if use_i18n {
            &self.i18n_backend_real
        } else {
            &self.i18n_backend_null
        }
    }

    /// Backend identifier selected by the current `use_i18n` flag.
    pub fn active_backend_identifier(&self) -> &str {
        self.identifier_for(self.use_i18n)
    }

    /// Whether `code` appears in the supported language list.
    pub fn is_supported(&self, code: &str) -> bool {
        self.languages
            .iter()
            .any(|entry| entry.code.eq_ignore_ascii_case(code))
    }

    /// Whether `code` belongs to a right-to-left language.
    pub fn is_bidi(&self, code: &str) -> bool {
        let base = base_language(code);
        self.languages_bidi
            .iter()
            .any(|bidi| bidi.eq_ignore_ascii_case(base))
    }
}
