//! Backend registry
//!
//! Engines are configured by dotted identifier (`transgate_i18n.RealBackend`).
//! The registry maps each identifier to a zero-argument factory. Engines linked
//! into the binary register themselves at startup; resolution is a lookup
//! followed by a factory call, never runtime code loading. The registry keeps
//! no instances of its own.

use crate::backend::TranslationBackend;
use crate::catalog::CatalogStore;
use crate::error::ResolutionError;
use crate::null::NullBackend;
use crate::real::RealBackend;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use transgate_config::SettingsCache;

/// Namespace bare identifiers (no module path) resolve against.
pub const LOCAL_NAMESPACE: &str = "transgate_i18n";

/// Symbol of the catalog-backed engine within [`LOCAL_NAMESPACE`].
pub const REAL_BACKEND_SYMBOL: &str = "RealBackend";

/// Symbol of the passthrough engine within [`LOCAL_NAMESPACE`].
pub const NULL_BACKEND_SYMBOL: &str = "NullBackend";

/// Zero-argument engine constructor.
pub type BackendFactory = Arc<dyn Fn() -> Arc<dyn TranslationBackend> + Send + Sync>;

static GLOBAL_REGISTRY: Lazy<Arc<BackendRegistry>> = Lazy::new(|| {
    Arc::new(BackendRegistry::with_builtin_backends(
        transgate_config::global(),
        CatalogStore::global(),
    ))
});

/// A parsed backend identifier: an optional module path and a final symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DottedPath {
    module: Option<String>,
    symbol: String,
}

impl DottedPath {
    /// Splits `identifier` into module path and final symbol.
    pub fn parse(identifier: &str) -> Result<Self, ResolutionError> {
        let invalid = || ResolutionError::InvalidIdentifier {
            identifier: identifier.to_string(),
        };

        if identifier.is_empty() || identifier.split('.').any(str::is_empty) {
            return Err(invalid());
        }

        Ok(match identifier.rsplit_once('.') {
            Some((module, symbol)) => Self {
                module: Some(module.to_string()),
                symbol: symbol.to_string(),
            },
            None => Self {
                module: None,
                symbol: identifier.to_string(),
            },
        })
    }

    /// Module path, `None` for a bare symbol.
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// Final path component.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{module}.{}", self.symbol),
            None => f.write_str(&self.symbol),
        }
    }
}

/// Maps dotted identifiers to engine factories.
pub struct BackendRegistry {
    namespace: String,
    modules: RwLock<HashMap<String, HashMap<String, BackendFactory>>>,
}

impl fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("namespace", &self.namespace)
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

impl BackendRegistry {
    /// Create an empty registry resolving bare symbols in [`LOCAL_NAMESPACE`].
    pub fn new() -> Self {
        Self::with_namespace(LOCAL_NAMESPACE)
    }

    /// Create an empty registry resolving bare symbols in `namespace`.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            modules: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry holding the real and null engines.
    ///
    /// Both engines read `settings` lazily; the real engine serves `catalogs`.
    pub fn with_builtin_backends(settings: Arc<SettingsCache>, catalogs: Arc<CatalogStore>) -> Self {
        let registry = Self::new();

        let real_settings = Arc::clone(&settings);
        registry.insert(LOCAL_NAMESPACE, REAL_BACKEND_SYMBOL, move || {
            Arc::new(RealBackend::new(Arc::clone(&real_settings), Arc::clone(&catalogs)))
        });
        registry.insert(LOCAL_NAMESPACE, NULL_BACKEND_SYMBOL, move || {
            Arc::new(NullBackend::new(Arc::clone(&settings)))
        });

        registry
    }

    /// The process-wide registry, holding the built-in engines.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    /// Namespace bare symbols resolve against.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Register `factory` under `identifier`, replacing any previous entry.
    pub fn register<F>(&self, identifier: &str, factory: F) -> Result<(), ResolutionError>
    where
        F: Fn() -> Arc<dyn TranslationBackend> + Send + Sync + 'static,
    {
        let path = DottedPath::parse(identifier)?;
        let module = path.module().unwrap_or(&self.namespace).to_string();
        self.insert(&module, path.symbol(), factory);
        Ok(())
    }

    fn insert<F>(&self, module: &str, symbol: &str, factory: F)
    where
        F: Fn() -> Arc<dyn TranslationBackend> + Send + Sync + 'static,
    {
        debug!(module, symbol, "Registering translation backend");
        self.modules
            .write()
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string(), Arc::new(factory));
    }

    /// Whether `identifier` would resolve.
    pub fn contains(&self, identifier: &str) -> bool {
        self.factory(identifier).is_ok()
    }

    /// All registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<String> {
        let modules = self.modules.read();
        let mut identifiers: Vec<String> = modules
            .iter()
            .flat_map(|(module, symbols)| symbols.keys().map(move |symbol| format!("{module}.{symbol}")))
            .collect();
        identifiers.sort();
        identifiers
    }

    /// Resolve `identifier` and instantiate the engine it names.
    pub fn resolve(&self, identifier: &str) -> Result<Arc<dyn TranslationBackend>, ResolutionError> {
        let factory = self.factory(identifier)?;
        debug!(identifier, "Instantiating translation backend");
        Ok(factory())
    }

    fn factory(&self, identifier: &str) -> Result<BackendFactory, ResolutionError> {
        let path = DottedPath::parse(identifier)?;
        let module = path.module().unwrap_or(&self.namespace);

        let modules = self.modules.read();
        let symbols = modules
            .get(module)
            .ok_or_else(|| ResolutionError::ModuleNotFound {
                identifier: identifier.to_string(),
                module: module.to_string(),
            })?;

        symbols
            .get(path.symbol())
            .cloned()
            .ok_or_else(|| ResolutionError::SymbolNotFound {
                identifier: identifier.to_string(),
                module: module.to_string(),
                symbol: path.symbol().to_string(),
            })
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtins() -> BackendRegistry {
        BackendRegistry::with_builtin_backends(
            Arc::new(SettingsCache::default()),
            Arc::new(CatalogStore::new()),
        )
    }

    #[test]
    fn test_parse_dotted_path() {
        let path = DottedPath::parse("pkg.module.ClassName").unwrap();
        assert_eq!(path.module(), Some("pkg.module"));
        assert_eq!(path.symbol(), "ClassName");
        assert_eq!(path.to_string(), "pkg.module.ClassName");

        let bare = DottedPath::parse("ClassName").unwrap();
        assert_eq!(bare.module(), None);
        assert_eq!(bare.symbol(), "ClassName");
    }

    #[test]
    fn test_parse_rejects_empty_components() {
        for identifier in ["", ".", "pkg.", ".Class", "pkg..Class"] {
            assert_eq!(
                DottedPath::parse(identifier),
                Err(ResolutionError::InvalidIdentifier {
                    identifier: identifier.to_string()
                }),
                "{identifier:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_builtin_backends() {
        let registry = builtins();
        let real = registry.resolve("transgate_i18n.RealBackend").unwrap();
        let null = registry.resolve("transgate_i18n.NullBackend").unwrap();

        assert!(format!("{real:?}").starts_with("RealBackend"));
        assert!(format!("{null:?}").starts_with("NullBackend"));
    }

    #[test]
    fn test_bare_symbol_resolves_in_local_namespace() {
        let registry = builtins();
        assert!(registry.contains("NullBackend"));
        assert!(registry.contains("RealBackend"));
    }

    #[test]
    fn test_missing_module_and_symbol() {
        let registry = builtins();

        let err = registry.resolve("nowhere.Backend").unwrap_err();
        assert_eq!(
            err,
            ResolutionError::ModuleNotFound {
                identifier: "nowhere.Backend".to_string(),
                module: "nowhere".to_string(),
            }
        );

        let err = registry.resolve("transgate_i18n.Missing").unwrap_err();
        assert!(matches!(err, ResolutionError::SymbolNotFound { ref symbol, .. } if symbol == "Missing"));
        assert_eq!(err.identifier(), "transgate_i18n.Missing");
    }

    #[test]
    fn test_register_custom_backend() {
        let registry = BackendRegistry::with_namespace("app");
        let settings = Arc::new(SettingsCache::default());
        registry
            .register("Quiet", move || Arc::new(NullBackend::new(Arc::clone(&settings))))
            .unwrap();

        assert!(registry.contains("app.Quiet"));
        assert_eq!(registry.identifiers(), vec!["app.Quiet".to_string()]);
        assert!(registry.register("bad..id", || unreachable!()).is_err());
    }

    #[test]
    fn test_each_resolve_builds_a_new_instance() {
        let registry = builtins();
        let first = registry.resolve("NullBackend").unwrap();
        let second = registry.resolve("NullBackend").unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
