//! Passthrough translation engine used when translation is disabled

use crate::backend::{LanguageRequest, TranslationBackend};
use crate::error::I18nResult;
use crate::real::untranslated_plural;
use std::sync::Arc;
use transgate_config::SettingsCache;

/// Engine that returns message ids untouched and always serves the default language
#[derive(Debug, Clone)]
pub struct NullBackend {
    settings: Arc<SettingsCache>,
}

impl NullBackend {
    /// Create an engine reading the default language from `settings`
    pub fn new(settings: Arc<SettingsCache>) -> Self {
        Self { settings }
    }
}

impl TranslationBackend for NullBackend {
    fn gettext(&self, message: &str) -> String {
        message.to_string()
    }

    fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String {
        untranslated_plural(singular, plural, count)
    }

    fn pgettext(&self, _context: &str, message: &str) -> String {
        message.to_string()
    }

    fn npgettext(&self, _context: &str, singular: &str, plural: &str, count: u64) -> String {
        untranslated_plural(singular, plural, count)
    }

    fn activate(&self, _language: &str) -> I18nResult<()> {
        Ok(())
    }

    fn deactivate(&self) {}

    fn deactivate_all(&self) {}

    fn get_language(&self) -> Option<String> {
        Some(self.settings.get().language_code.clone())
    }

    fn get_language_bidi(&self) -> bool {
        let settings = self.settings.get();
        settings.is_bidi(&settings.language_code)
    }

    fn check_for_language(&self, _code: &str) -> bool {
        true
    }

    fn to_locale(&self, language: &str) -> String {
        transgate_common::to_locale(language)
    }

    fn get_language_from_request(&self, _request: &LanguageRequest, _check_path: bool) -> String {
        self.settings.get().language_code.clone()
    }

    fn get_language_from_path(&self, _path: &str) -> Option<String> {
        None
    }

    fn templatize(&self, source: &str, origin: Option<&str>) -> I18nResult<String> {
        crate::templatize::templatize(source, origin)
    }
}
