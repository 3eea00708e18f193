//! Error types for translation facade operations

use thiserror::Error;

/// A configured backend identifier could not be turned into an engine.
///
/// This is a configuration defect and is never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The identifier is empty or has an empty path component
    #[error("Invalid backend identifier: '{identifier}'")]
    InvalidIdentifier {
        /// The rejected identifier
        identifier: String,
    },

    /// No engines are registered under the identifier's module path
    #[error("Backend module '{module}' not found (identifier '{identifier}')")]
    ModuleNotFound {
        /// The identifier being resolved
        identifier: String,
        /// Module path with no registered engines
        module: String,
    },

    /// The module exists but does not provide the named engine
    #[error("Backend '{symbol}' not found in module '{module}' (identifier '{identifier}')")]
    SymbolNotFound {
        /// The identifier being resolved
        identifier: String,
        /// Module path that was found
        module: String,
        /// Engine name missing from the module
        symbol: String,
    },
}

impl ResolutionError {
    /// The identifier that failed to resolve
    pub fn identifier(&self) -> &str {
        match self {
            Self::InvalidIdentifier { identifier }
            | Self::ModuleNotFound { identifier, .. }
            | Self::SymbolNotFound { identifier, .. } => identifier,
        }
    }
}

/// Errors that can occur during translation operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The configured backend could not be resolved
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// No metadata is registered for a language code
    #[error("Unknown language code '{code}'")]
    UnknownLanguage {
        /// The code that was looked up
        code: String,
    },

    /// An engine rejected a malformed language code
    #[error("Invalid language code: {0}")]
    InvalidLanguageCode(String),

    /// Template source could not be converted for message extraction
    #[error("Template error in {origin}: {message}")]
    Template {
        /// Template name, `<unknown source>` when none was given
        origin: String,
        /// What went wrong
        message: String,
    },
}

impl I18nError {
    /// Whether this error is a backend resolution failure
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }
}

/// Result type for translation operations
pub type I18nResult<T> = Result<T, I18nError>;
