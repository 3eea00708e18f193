//! Catalog-backed translation engine
//!
//! The active language is thread-scoped. A thread starts out serving the
//! configured default language; `activate` selects another one and
//! `deactivate_all` switches translation off until the next activation.

use crate::backend::{LanguageRequest, TranslationBackend};
use crate::catalog::{context_key, Catalog, CatalogStore};
use crate::error::{I18nError, I18nResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cell::RefCell;
use std::sync::Arc;
use tracing::debug;
use transgate_common::{base_language, is_valid_language_code, normalize_newlines};
use transgate_config::SettingsCache;

static LANGUAGE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/([\w@-]+)(/|$)").expect("Invalid language prefix regex pattern"));

/// Activation state of the current thread
#[derive(Debug, Clone, PartialEq, Eq)]
enum ActiveLanguage {
    /// Nothing activated: serve the default language
    Default,
    /// An explicitly activated language
    Language(String),
    /// Translation switched off
    Disabled,
}

thread_local! {
    static ACTIVE: RefCell<ActiveLanguage> = const { RefCell::new(ActiveLanguage::Default) };
}

fn active() -> ActiveLanguage {
    ACTIVE.with(|cell| cell.borrow().clone())
}

fn set_active(value: ActiveLanguage) {
    ACTIVE.with(|cell| *cell.borrow_mut() = value);
}

/// Picks between the untranslated singular and plural message ids
pub(crate) fn untranslated_plural(singular: &str, plural: &str, count: u64) -> String {
    let message = if count == 1 { singular } else { plural };
    message.to_string()
}

/// Translation engine serving in-memory catalogs
#[derive(Debug, Clone)]
pub struct RealBackend {
    settings: Arc<SettingsCache>,
    catalogs: Arc<CatalogStore>,
}

impl RealBackend {
    /// Create an engine reading `settings` and serving `catalogs`
    pub fn new(settings: Arc<SettingsCache>, catalogs: Arc<CatalogStore>) -> Self {
        Self { settings, catalogs }
    }

    /// Catalogs this engine serves
    pub fn catalogs(&self) -> &Arc<CatalogStore> {
        &self.catalogs
    }

    fn current_language(&self) -> Option<String> {
        match active() {
            ActiveLanguage::Default => Some(self.settings.get().language_code.to_lowercase()),
            ActiveLanguage::Language(language) => Some(language),
            ActiveLanguage::Disabled => None,
        }
    }

    /// Languages consulted for a lookup, most specific first
    fn fallback_chain(&self, language: &str) -> Vec<String> {
        let default = self.settings.get().language_code.to_lowercase();
        let mut chain: Vec<String> = Vec::with_capacity(4);
        for candidate in [
            language,
            base_language(language),
            default.as_str(),
            base_language(&default),
        ] {
            if !chain.iter().any(|seen| seen == candidate) {
                chain.push(candidate.to_string());
            }
        }
        chain
    }

    fn lookup<F>(&self, find: F) -> Option<String>
    where
        F: Fn(&Catalog) -> Option<&str>,
    {
        let language = self.current_language()?;
        self.fallback_chain(&language)
            .iter()
            .filter_map(|candidate| self.catalogs.get(candidate))
            .find_map(|catalog| find(catalog.as_ref()).map(str::to_string))
    }
}

impl TranslationBackend for RealBackend {
    fn gettext(&self, message: &str) -> String {
        let message = normalize_newlines(message);
        if message.is_empty() {
            return message;
        }
        self.lookup(|catalog| catalog.get(&message)).unwrap_or(message)
    }

    fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String {
        let (singular, plural) = (normalize_newlines(singular), normalize_newlines(plural));
        self.lookup(|catalog| catalog.get_plural(&singular, count))
            .unwrap_or_else(|| untranslated_plural(&singular, &plural, count))
    }

    fn pgettext(&self, context: &str, message: &str) -> String {
        let message = normalize_newlines(message);
        let key = context_key(context, &message);
        self.lookup(|catalog| catalog.get(&key)).unwrap_or(message)
    }

    fn npgettext(&self, context: &str, singular: &str, plural: &str, count: u64) -> String {
        let (singular, plural) = (normalize_newlines(singular), normalize_newlines(plural));
        let key = context_key(context, &singular);
        self.lookup(|catalog| catalog.get_plural(&key, count))
            .unwrap_or_else(|| untranslated_plural(&singular, &plural, count))
    }

    fn activate(&self, language: &str) -> I18nResult<()> {
        if !is_valid_language_code(language) {
            return Err(I18nError::InvalidLanguageCode(language.to_string()));
        }
        debug!("Activating language: {}", language);
        set_active(ActiveLanguage::Language(language.to_lowercase()));
        Ok(())
    }

    fn deactivate(&self) {
        set_active(ActiveLanguage::Default);
    }

    fn deactivate_all(&self) {
        set_active(ActiveLanguage::Disabled);
    }

    fn get_language(&self) -> Option<String> {
        self.current_language()
    }

    fn get_language_bidi(&self) -> bool {
        self.current_language()
            .is_some_and(|language| self.settings.get().is_bidi(&language))
    }

    fn check_for_language(&self, code: &str) -> bool {
        if !is_valid_language_code(code) {
            return false;
        }
        self.catalogs.contains(code)
            || self.catalogs.contains(base_language(code))
            || self.settings.get().language_code.eq_ignore_ascii_case(code)
    }

    fn to_locale(&self, language: &str) -> String {
        transgate_common::to_locale(language)
    }

    fn get_language_from_request(&self, request: &LanguageRequest, check_path: bool) -> String {
        if check_path {
            if let Some(language) = self.get_language_from_path(&request.path) {
                return language;
            }
        }

        let settings = self.settings.get();
        if let Some(code) = request.cookie(&settings.language_cookie_name) {
            if settings.is_supported(code) && self.check_for_language(code) {
                return code.to_lowercase();
            }
        }

        settings.language_code.to_lowercase()
    }

    fn get_language_from_path(&self, path: &str) -> Option<String> {
        let code = LANGUAGE_PREFIX_RE.captures(path)?.get(1)?.as_str().to_lowercase();
        (self.settings.get().is_supported(&code) && self.check_for_language(&code)).then_some(code)
    }

    fn templatize(&self, source: &str, origin: Option<&str>) -> I18nResult<String> {
        crate::templatize::templatize(source, origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transgate_config::Settings;

    fn backend() -> RealBackend {
        let catalogs = Arc::new(CatalogStore::new());
        catalogs.install(
            Catalog::new("fr")
                .with_translation("Hello", "Bonjour")
                .with_context("month", "May", "mai")
                .with_plural("apple", ["pomme", "pommes"])
                .with_context_plural("fruit", "apple", ["pomme (fruit)", "pommes (fruit)"]),
        );
        catalogs.install(Catalog::new("pt").with_translation("Hello", "Olá"));
        catalogs.install(
            Catalog::new("en-us")
                .with_translation("Color", "Color")
                .with_translation("Only default", "From default"),
        );
        RealBackend::new(Arc::new(SettingsCache::default()), catalogs)
    }

    #[test]
    fn test_default_language_until_activated() {
        let backend = backend();
        backend.deactivate();
        assert_eq!(backend.get_language().as_deref(), Some("en-us"));
        assert_eq!(backend.gettext("Only default"), "From default");
    }

    #[test]
    fn test_activate_and_translate() {
        let backend = backend();
        backend.activate("fr").unwrap();
        assert_eq!(backend.gettext("Hello"), "Bonjour");
        assert_eq!(backend.pgettext("month", "May"), "mai");
        assert_eq!(backend.ngettext("apple", "apples", 1), "pomme");
        assert_eq!(backend.ngettext("apple", "apples", 3), "pommes");
        assert_eq!(backend.npgettext("fruit", "apple", "apples", 2), "pommes (fruit)");
        backend.deactivate();
    }

    #[test]
    fn test_fallback_chain() {
        let backend = backend();
        backend.activate("pt-BR").unwrap();
        assert_eq!(backend.get_language().as_deref(), Some("pt-br"));
        assert_eq!(backend.gettext("Hello"), "Olá");
        assert_eq!(backend.gettext("Only default"), "From default");
        assert_eq!(backend.gettext("Untranslated"), "Untranslated");
        backend.deactivate();
    }

    #[test]
    fn test_misses_return_message_ids() {
        let backend = backend();
        backend.activate("fr").unwrap();
        assert_eq!(backend.pgettext("verb", "May"), "May");
        assert_eq!(backend.ngettext("pear", "pears", 1), "pear");
        assert_eq!(backend.npgettext("fruit", "pear", "pears", 0), "pears");
        assert_eq!(backend.gettext(""), "");
        backend.deactivate();
    }

    #[test]
    fn test_line_endings_are_normalized() {
        let catalogs = Arc::new(CatalogStore::new());
        catalogs.install(
            Catalog::new("fr")
                .with_translation("one\nline", "une\nligne")
                .with_context("greeting", "good\nmorning", "bon\nmatin")
                .with_plural("one\nfile", ["un\nfichier", "des\nfichiers"])
                .with_context_plural("disk", "one\nfile", ["un\ndisque", "des\ndisques"]),
        );
        let backend = RealBackend::new(Arc::new(SettingsCache::default()), catalogs);
        backend.activate("fr").unwrap();

        for eol in ["\r\n", "\r"] {
            let nl = |text: &str| text.replace('\n', eol);

            assert_eq!(backend.gettext(&nl("one\nline")), "une\nligne");
            assert_eq!(backend.pgettext("greeting", &nl("good\nmorning")), "bon\nmatin");
            assert_eq!(backend.ngettext(&nl("one\nfile"), &nl("many\nfiles"), 1), "un\nfichier");
            assert_eq!(backend.ngettext(&nl("one\nfile"), &nl("many\nfiles"), 4), "des\nfichiers");
            assert_eq!(
                backend.npgettext("disk", &nl("one\nfile"), &nl("many\nfiles"), 2),
                "des\ndisques"
            );

            assert_eq!(backend.gettext(&nl("no\nentry")), "no\nentry");
            assert_eq!(backend.pgettext("greeting", &nl("no\nentry")), "no\nentry");
            assert_eq!(backend.ngettext(&nl("a\npear"), &nl("some\npears"), 1), "a\npear");
            assert_eq!(
                backend.npgettext("disk", &nl("a\npear"), &nl("some\npears"), 3),
                "some\npears"
            );
        }
        backend.deactivate();
    }

    #[test]
    fn test_request_fallback_matches_reported_language() {
        let settings = Arc::new(SettingsCache::default());
        settings.modify(|s| s.language_code = "en-US".to_string());
        let backend = RealBackend::new(settings, Arc::new(CatalogStore::new()));
        backend.deactivate();

        let fallback = backend.get_language_from_request(&LanguageRequest::new("/page/"), true);
        assert_eq!(fallback, "en-us");
        assert_eq!(backend.get_language().as_deref(), Some(fallback.as_str()));
    }

    #[test]
    fn test_deactivate_all_disables_translation() {
        let backend = backend();
        backend.activate("fr").unwrap();
        backend.deactivate_all();
        assert_eq!(backend.get_language(), None);
        assert_eq!(backend.gettext("Hello"), "Hello");
        assert!(!backend.get_language_bidi());
        backend.deactivate();
    }

    #[test]
    fn test_activation_is_thread_scoped() {
        let backend = backend();
        backend.activate("fr").unwrap();

        let other = backend.clone();
        let seen = std::thread::spawn(move || other.get_language())
            .join()
            .unwrap();

        assert_eq!(seen.as_deref(), Some("en-us"));
        assert_eq!(backend.get_language().as_deref(), Some("fr"));
        backend.deactivate();
    }

    #[test]
    fn test_invalid_language_code_is_rejected() {
        let backend = backend();
        let err = backend.activate("../../etc").unwrap_err();
        assert_eq!(err, I18nError::InvalidLanguageCode("../../etc".to_string()));
    }

    #[test]
    fn test_bidi_follows_active_language() {
        let backend = backend();
        backend.activate("ar-eg").unwrap();
        assert!(backend.get_language_bidi());
        backend.activate("fr").unwrap();
        assert!(!backend.get_language_bidi());
        backend.deactivate();
    }

    #[test]
    fn test_check_for_language() {
        let backend = backend();
        assert!(backend.check_for_language("fr"));
        assert!(backend.check_for_language("fr-ca"));
        assert!(backend.check_for_language("en-us"));
        assert!(!backend.check_for_language("de"));
        assert!(!backend.check_for_language("not a code"));
    }

    #[test]
    fn test_language_from_path() {
        let backend = backend();
        assert_eq!(backend.get_language_from_path("/fr/articles/").as_deref(), Some("fr"));
        assert_eq!(backend.get_language_from_path("/fr").as_deref(), Some("fr"));
        assert_eq!(backend.get_language_from_path("/de/articles/"), None);
        assert_eq!(backend.get_language_from_path("/articles/"), None);
        assert_eq!(backend.get_language_from_path("fr/"), None);
    }

    #[test]
    fn test_language_from_request() {
        let backend = backend();
        let settings = Settings::default();

        let request = LanguageRequest::new("/fr/page/");
        assert_eq!(backend.get_language_from_request(&request, true), "fr");
        assert_eq!(backend.get_language_from_request(&request, false), "en-us");

        let request = LanguageRequest::new("/page/").with_cookie(settings.language_cookie_name, "pt");
        assert_eq!(backend.get_language_from_request(&request, true), "pt");

        let request = LanguageRequest::new("/page/").with_cookie("transgate_language", "de");
        assert_eq!(backend.get_language_from_request(&request, true), "en-us");
    }
}
