//! Default values for the settings schema.

use crate::schema::{LanguageEntry, Settings};

/// Identifier of the catalog-backed engine.
pub const DEFAULT_REAL_BACKEND: &str = "transgate_i18n.RealBackend";

/// Identifier of the passthrough engine.
pub const DEFAULT_NULL_BACKEND: &str = "transgate_i18n.NullBackend";

/// Default language code.
pub const DEFAULT_LANGUAGE_CODE: &str = "en-us";

/// Default language cookie name.
pub const DEFAULT_LANGUAGE_COOKIE_NAME: &str = "transgate_language";

const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("de", "German"),
    ("en", "English"),
    ("en-gb", "British English"),
    ("es", "Spanish"),
    ("fa", "Persian"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pt-br", "Brazilian Portuguese"),
    ("ru", "Russian"),
    ("sr-latn", "Serbian Latin"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("zh-hans", "Simplified Chinese"),
    ("zh-hant", "Traditional Chinese"),
];

const DEFAULT_LANGUAGES_BIDI: &[&str] = &["he", "ar", "fa", "ur"];

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_i18n: true,
            i18n_backend_real: DEFAULT_REAL_BACKEND.to_string(),
            i18n_backend_null: DEFAULT_NULL_BACKEND.to_string(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            languages: default_languages(),
            languages_bidi: DEFAULT_LANGUAGES_BIDI.iter().map(|s| (*s).to_string()).collect(),
            language_cookie_name: DEFAULT_LANGUAGE_COOKIE_NAME.to_string(),
        }
    }
}

/// The built-in supported language list.
pub fn default_languages() -> Vec<LanguageEntry> {
    DEFAULT_LANGUAGES
        .iter()
        .map(|(code, name)| LanguageEntry::new(*code, *name))
        .collect()
}
