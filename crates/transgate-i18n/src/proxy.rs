//! Per-operation lazy binding of facade calls to translation engines
//!
//! The proxy holds a dispatch table from [`Operation`] to the engine serving
//! it. The table starts empty. The first call of an operation reads the
//! `use_i18n` flag, resolves the matching backend identifier through the
//! registry and records the binding; later calls of that operation go straight
//! to the bound engine. Each operation binds independently, so a flag change
//! between two first calls shows up in the second operation only.
//!
//! Bindings are write-once and survive settings changes for the life of the
//! proxy. [`BackendProxy::reset`] empties the table for test isolation.

use crate::backend::{LanguageRequest, TranslationBackend};
use crate::error::I18nResult;
use crate::locale_override::LocaleOverride;
use crate::registry::BackendRegistry;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use transgate_config::SettingsCache;

static GLOBAL_PROXY: Lazy<BackendProxy> = Lazy::new(|| {
    BackendProxy::new(transgate_config::global(), BackendRegistry::global())
});

/// Facade operations, each bound to an engine on first use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    /// `gettext`
    Gettext,
    /// `ugettext`
    Ugettext,
    /// `gettext_noop`
    GettextNoop,
    /// `ngettext`
    Ngettext,
    /// `ungettext`
    Ungettext,
    /// `pgettext`
    Pgettext,
    /// `npgettext`
    Npgettext,
    /// `activate`
    Activate,
    /// `deactivate`
    Deactivate,
    /// `deactivate_all`
    DeactivateAll,
    /// `get_language`
    GetLanguage,
    /// `get_language_bidi`
    GetLanguageBidi,
    /// `check_for_language`
    CheckForLanguage,
    /// `to_locale`
    ToLocale,
    /// `get_language_from_request`
    GetLanguageFromRequest,
    /// `get_language_from_path`
    GetLanguageFromPath,
    /// `templatize`
    Templatize,
}

impl Operation {
    /// Every operation, in declaration order
    pub const ALL: [Self; 17] = [
        Self::Gettext,
        Self::Ugettext,
        Self::GettextNoop,
        Self::Ngettext,
        Self::Ungettext,
        Self::Pgettext,
        Self::Npgettext,
        Self::Activate,
        Self::Deactivate,
        Self::DeactivateAll,
        Self::GetLanguage,
        Self::GetLanguageBidi,
        Self::CheckForLanguage,
        Self::ToLocale,
        Self::GetLanguageFromRequest,
        Self::GetLanguageFromPath,
        Self::Templatize,
    ];

    /// Facade name of the operation
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gettext => "gettext",
            Self::Ugettext => "ugettext",
            Self::GettextNoop => "gettext_noop",
            Self::Ngettext => "ngettext",
            Self::Ungettext => "ungettext",
            Self::Pgettext => "pgettext",
            Self::Npgettext => "npgettext",
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
            Self::DeactivateAll => "deactivate_all",
            Self::GetLanguage => "get_language",
            Self::GetLanguageBidi => "get_language_bidi",
            Self::CheckForLanguage => "check_for_language",
            Self::ToLocale => "to_locale",
            Self::GetLanguageFromRequest => "get_language_from_request",
            Self::GetLanguageFromPath => "get_language_from_path",
            Self::Templatize => "templatize",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone)]
struct Binding {
    identifier: String,
    backend: Arc<dyn TranslationBackend>,
}

/// Dispatches facade operations to lazily selected engines
pub struct BackendProxy {
    settings: Arc<SettingsCache>,
    registry: Arc<BackendRegistry>,
    bindings: RwLock<HashMap<Operation, Binding>>,
    /// Engine instances by identifier, shared by every operation bound to them
    engines: RwLock<HashMap<String, Arc<dyn TranslationBackend>>>,
}

impl fmt::Debug for BackendProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound: Vec<String> = self
            .bound_operations()
            .into_iter()
            .map(|op| format!("{op}={}", self.bound_identifier(op).unwrap_or_default()))
            .collect();
        f.debug_struct("BackendProxy")
            .field("bound", &bound)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl BackendProxy {
    /// Create a proxy with an empty binding table
    pub fn new(settings: Arc<SettingsCache>, registry: Arc<BackendRegistry>) -> Self {
        Self {
            settings,
            registry,
            bindings: RwLock::new(HashMap::new()),
            engines: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide proxy behind the facade functions
    ///
    /// It reads [`transgate_config::global`] and resolves through
    /// [`BackendRegistry::global`].
    pub fn global() -> &'static Self {
        &GLOBAL_PROXY
    }

    /// Settings the proxy reads the `use_i18n` flag from
    pub fn settings(&self) -> &Arc<SettingsCache> {
        &self.settings
    }

    /// Registry the proxy resolves identifiers through
    pub fn registry(&self) -> &Arc<BackendRegistry> {
        &self.registry
    }

    /// Engine serving `op`, binding it first if needed
    pub fn backend(&self, op: Operation) -> I18nResult<Arc<dyn TranslationBackend>> {
        if let Some(binding) = self.bindings.read().get(&op) {
            return Ok(Arc::clone(&binding.backend));
        }

        let settings = self.settings.get();
        let identifier = settings.active_backend_identifier();
        let backend = self.engine(identifier)?;

        let mut bindings = self.bindings.write();
        let binding = bindings.entry(op).or_insert_with(|| {
            debug!(operation = op.name(), identifier, "Bound translation operation");
            Binding {
                identifier: identifier.to_string(),
                backend,
            }
        });
        Ok(Arc::clone(&binding.backend))
    }

    fn engine(&self, identifier: &str) -> I18nResult<Arc<dyn TranslationBackend>> {
        if let Some(engine) = self.engines.read().get(identifier) {
            return Ok(Arc::clone(engine));
        }

        let engine = self.registry.resolve(identifier)?;
        let mut engines = self.engines.write();
        Ok(Arc::clone(
            engines.entry(identifier.to_string()).or_insert(engine),
        ))
    }

    /// Whether `op` has been bound
    pub fn is_bound(&self, op: Operation) -> bool {
        self.bindings.read().contains_key(&op)
    }

    /// Identifier of the engine `op` is bound to
    pub fn bound_identifier(&self, op: Operation) -> Option<String> {
        self.bindings
            .read()
            .get(&op)
            .map(|binding| binding.identifier.clone())
    }

    /// All bound operations, sorted
    pub fn bound_operations(&self) -> Vec<Operation> {
        let mut ops: Vec<Operation> = self.bindings.read().keys().copied().collect();
        ops.sort();
        ops
    }

    /// Forget every binding and engine instance, forcing re-resolution
    pub fn reset(&self) {
        let mut bindings = self.bindings.write();
        let cleared = bindings.len();
        bindings.clear();
        self.engines.write().clear();
        info!(cleared, "Cleared translation backend bindings");
    }

    /// See [`TranslationBackend::gettext`]
    pub fn gettext(&self, message: &str) -> I18nResult<String> {
        Ok(self.backend(Operation::Gettext)?.gettext(message))
    }

    /// See [`TranslationBackend::ugettext`]
    pub fn ugettext(&self, message: &str) -> I18nResult<String> {
        Ok(self.backend(Operation::Ugettext)?.ugettext(message))
    }

    /// See [`TranslationBackend::gettext_noop`]
    pub fn gettext_noop(&self, message: &str) -> I18nResult<String> {
        Ok(self.backend(Operation::GettextNoop)?.gettext_noop(message))
    }

    /// See [`TranslationBackend::ngettext`]
    pub fn ngettext(&self, singular: &str, plural: &str, count: u64) -> I18nResult<String> {
        Ok(self.backend(Operation::Ngettext)?.ngettext(singular, plural, count))
    }

    /// See [`TranslationBackend::ungettext`]
    pub fn ungettext(&self, singular: &str, plural: &str, count: u64) -> I18nResult<String> {
        Ok(self.backend(Operation::Ungettext)?.ungettext(singular, plural, count))
    }

    /// See [`TranslationBackend::pgettext`]
    pub fn pgettext(&self, context: &str, message: &str) -> I18nResult<String> {
        Ok(self.backend(Operation::Pgettext)?.pgettext(context, message))
    }

    /// See [`TranslationBackend::npgettext`]
    pub fn npgettext(
        &self,
        context: &str,
        singular: &str,
        plural: &str,
        count: u64,
    ) -> I18nResult<String> {
        Ok(self
            .backend(Operation::Npgettext)?
            .npgettext(context, singular, plural, count))
    }

    /// See [`TranslationBackend::activate`]
    pub fn activate(&self, language: &str) -> I18nResult<()> {
        self.backend(Operation::Activate)?.activate(language)
    }

    /// See [`TranslationBackend::deactivate`]
    pub fn deactivate(&self) -> I18nResult<()> {
        self.backend(Operation::Deactivate)?.deactivate();
        Ok(())
    }

    /// See [`TranslationBackend::deactivate_all`]
    pub fn deactivate_all(&self) -> I18nResult<()> {
        self.backend(Operation::DeactivateAll)?.deactivate_all();
        Ok(())
    }

    /// See [`TranslationBackend::get_language`]
    pub fn get_language(&self) -> I18nResult<Option<String>> {
        Ok(self.backend(Operation::GetLanguage)?.get_language())
    }

    /// See [`TranslationBackend::get_language_bidi`]
    pub fn get_language_bidi(&self) -> I18nResult<bool> {
        Ok(self.backend(Operation::GetLanguageBidi)?.get_language_bidi())
    }

    /// See [`TranslationBackend::check_for_language`]
    pub fn check_for_language(&self, code: &str) -> I18nResult<bool> {
        Ok(self.backend(Operation::CheckForLanguage)?.check_for_language(code))
    }

    /// See [`TranslationBackend::to_locale`]
    pub fn to_locale(&self, language: &str) -> I18nResult<String> {
        Ok(self.backend(Operation::ToLocale)?.to_locale(language))
    }

    /// See [`TranslationBackend::get_language_from_request`]
    pub fn get_language_from_request(
        &self,
        request: &LanguageRequest,
        check_path: bool,
    ) -> I18nResult<String> {
        Ok(self
            .backend(Operation::GetLanguageFromRequest)?
            .get_language_from_request(request, check_path))
    }

    /// See [`TranslationBackend::get_language_from_path`]
    pub fn get_language_from_path(&self, path: &str) -> I18nResult<Option<String>> {
        Ok(self
            .backend(Operation::GetLanguageFromPath)?
            .get_language_from_path(path))
    }

    /// See [`TranslationBackend::templatize`]
    pub fn templatize(&self, source: &str, origin: Option<&str>) -> I18nResult<String> {
        self.backend(Operation::Templatize)?.templatize(source, origin)
    }

    /// Activate `language` (or switch translation off for `None`) until the guard drops
    pub fn override_locale(
        &self,
        language: Option<&str>,
        deactivate: bool,
    ) -> I18nResult<LocaleOverride<'_>> {
        LocaleOverride::enter(self, language, deactivate)
    }

    /// Run `f` with `language` active, then restore (or deactivate)
    ///
    /// The language is put back even if `f` panics.
    pub fn with_locale<F, T>(&self, language: Option<&str>, deactivate: bool, f: F) -> I18nResult<T>
    where
        F: FnOnce() -> T,
    {
        let guard = self.override_locale(language, deactivate)?;
        let output = f();
        guard.finish()?;
        Ok(output)
    }
}
