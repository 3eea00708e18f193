//! In-memory message catalogs served by the real engine
//!
//! Catalog loading is the host application's job: it builds [`Catalog`]s and
//! installs them into a [`CatalogStore`]. The store is shared by every real
//! engine instance created from the same registry.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Separates context from message id in context-qualified keys
pub const CONTEXT_SEPARATOR: char = '\u{4}';

static GLOBAL_CATALOGS: Lazy<Arc<CatalogStore>> = Lazy::new(|| Arc::new(CatalogStore::new()));

/// Builds the lookup key of a context-qualified message
pub fn context_key(context: &str, message: &str) -> String {
    format!("{context}{CONTEXT_SEPARATOR}{message}")
}

/// Index of the plural form to use for `count`
///
/// Catalogs carry the forms in `[singular, plural]` order.
pub const fn plural_index(count: u64) -> usize {
    if count == 1 {
        0
    } else {
        1
    }
}

/// Translations for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    language: String,
    messages: HashMap<String, String>,
    plurals: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Create an empty catalog for `language`
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            ..Default::default()
        }
    }

    /// Language this catalog translates into
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Add a plain translation
    pub fn with_translation(mut self, message: impl Into<String>, translation: impl Into<String>) -> Self {
        self.messages.insert(message.into(), translation.into());
        self
    }

    /// Add a context-qualified translation
    pub fn with_context(
        mut self,
        context: &str,
        message: &str,
        translation: impl Into<String>,
    ) -> Self {
        self.messages.insert(context_key(context, message), translation.into());
        self
    }

    /// Add plural forms keyed by the singular message id
    pub fn with_plural<I, S>(mut self, singular: impl Into<String>, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plurals
            .insert(singular.into(), forms.into_iter().map(Into::into).collect());
        self
    }

    /// Add context-qualified plural forms
    pub fn with_context_plural<I, S>(mut self, context: &str, singular: &str, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plurals.insert(
            context_key(context, singular),
            forms.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Look up a translation by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Look up the plural form for `count`
    pub fn get_plural(&self, key: &str, count: u64) -> Option<&str> {
        let forms = self.plurals.get(key)?;
        let index = plural_index(count).min(forms.len().checked_sub(1)?);
        forms.get(index).map(String::as_str)
    }

    /// Number of entries, plain and plural
    pub fn len(&self) -> usize {
        self.messages.len() + self.plurals.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy every entry of `other` into this catalog, overwriting duplicates
    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);
        self.plurals.extend(other.plurals);
    }
}

/// Catalogs by language code
#[derive(Debug, Default)]
pub struct CatalogStore {
    catalogs: RwLock<HashMap<String, Arc<Catalog>>>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store used by the built-in registry
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_CATALOGS)
    }

    /// Install `catalog`, merging into any catalog already held for its language
    pub fn install(&self, catalog: Catalog) {
        let language = catalog.language().to_string();
        let mut catalogs = self.catalogs.write();
        match catalogs.get_mut(&language) {
            Some(existing) => Arc::make_mut(existing).merge(catalog),
            None => {
                catalogs.insert(language.clone(), Arc::new(catalog));
            }
        }
        debug!("Installed catalog for language: {}", language);
    }

    /// Catalog for `language`
    pub fn get(&self, language: &str) -> Option<Arc<Catalog>> {
        self.catalogs.read().get(&language.to_lowercase()).cloned()
    }

    /// Whether a catalog is held for `language`
    pub fn contains(&self, language: &str) -> bool {
        self.catalogs.read().contains_key(&language.to_lowercase())
    }

    /// All languages with a catalog, sorted
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.catalogs.read().keys().cloned().collect();
        languages.sort();
        languages
    }

    /// Remove the catalog for `language`
    pub fn remove(&self, language: &str) -> Option<Arc<Catalog>> {
        let removed = self.catalogs.write().remove(&language.to_lowercase());
        debug!("Removed catalog for language: {}", language);
        removed
    }

    /// Remove every catalog
    pub fn clear(&self) {
        self.catalogs.write().clear();
        debug!("Cleared all catalogs");
    }
}
