//! The capability set every translation engine implements
//!
//! Callers never hold a concrete engine type: the proxy binds each facade
//! operation to an `Arc<dyn TranslationBackend>` chosen at first use.

use crate::error::I18nResult;
use std::collections::HashMap;
use std::fmt;

/// Operations a translation engine must provide
pub trait TranslationBackend: Send + Sync + fmt::Debug {
    /// Translates `message` in the active language
    fn gettext(&self, message: &str) -> String;

    /// Unicode flavour of [`gettext`](Self::gettext)
    fn ugettext(&self, message: &str) -> String {
        self.gettext(message)
    }

    /// Marks `message` for extraction and returns it untranslated
    fn gettext_noop(&self, message: &str) -> String {
        message.to_string()
    }

    /// Translates a message with a singular and a plural form
    fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String;

    /// Unicode flavour of [`ngettext`](Self::ngettext)
    fn ungettext(&self, singular: &str, plural: &str, count: u64) -> String {
        self.ngettext(singular, plural, count)
    }

    /// Translates `message` disambiguated by `context`
    fn pgettext(&self, context: &str, message: &str) -> String;

    /// Context-qualified plural translation
    fn npgettext(&self, context: &str, singular: &str, plural: &str, count: u64) -> String;

    /// Activates `language` for the current scope
    fn activate(&self, language: &str) -> I18nResult<()>;

    /// Drops the explicit activation, returning to the default language
    fn deactivate(&self);

    /// Switches translation off entirely for the current scope
    fn deactivate_all(&self);

    /// Currently active language, `None` when translation is switched off
    fn get_language(&self) -> Option<String>;

    /// Whether the active language is written right-to-left
    fn get_language_bidi(&self) -> bool;

    /// Whether translations are available for `code`
    fn check_for_language(&self, code: &str) -> bool;

    /// Turns a language name (`en-us`) into a locale name (`en_US`)
    fn to_locale(&self, language: &str) -> String;

    /// Picks the language a request should be served in
    fn get_language_from_request(&self, request: &LanguageRequest, check_path: bool) -> String;

    /// Extracts a supported language prefix from a URL path
    fn get_language_from_path(&self, path: &str) -> Option<String>;

    /// Converts template source into gettext calls for message extraction
    fn templatize(&self, source: &str, origin: Option<&str>) -> I18nResult<String>;
}

/// The parts of an incoming request that language resolution looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRequest {
    /// Request path, e.g. `/fr/articles/`
    pub path: String,
    /// Request cookies by name
    pub cookies: HashMap<String, String>,
}

impl LanguageRequest {
    /// Create a request for `path` without cookies
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cookies: HashMap::new(),
        }
    }

    /// Add a cookie
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Look up a cookie by name
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }
}
