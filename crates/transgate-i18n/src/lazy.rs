//! Deferred translations
//!
//! A [`LazyText`] captures a translation call and performs it each time the
//! value is turned into text, so a value created at startup still reflects
//! the language active when it is finally displayed. Nothing is cached.

use crate::error::I18nResult;
use crate::proxy::BackendProxy;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use tracing::error;

type Thunk = Arc<dyn Fn() -> I18nResult<String> + Send + Sync>;

/// Text type a lazy value declares it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// Byte-oriented text, as produced by `gettext`
    Native,
    /// Unicode text, as produced by `ugettext`
    Unicode,
}

/// A translation evaluated on every use
#[derive(Clone)]
pub struct LazyText {
    kind: TextKind,
    thunk: Thunk,
}

impl LazyText {
    /// Wrap `thunk`, declaring that it produces `kind` text
    pub fn new<F>(kind: TextKind, thunk: F) -> Self
    where
        F: Fn() -> I18nResult<String> + Send + Sync + 'static,
    {
        Self {
            kind,
            thunk: Arc::new(thunk),
        }
    }

    /// Declared text kind
    pub const fn kind(&self) -> TextKind {
        self.kind
    }

    /// Evaluate the captured call now
    pub fn resolve(&self) -> I18nResult<String> {
        (self.thunk)()
    }

    /// Evaluate the captured call and return its UTF-8 bytes
    pub fn resolve_bytes(&self) -> I18nResult<Vec<u8>> {
        self.resolve().map(String::into_bytes)
    }
}

impl fmt::Display for LazyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolve() {
            Ok(text) => f.write_str(&text),
            Err(e) => {
                error!("Failed to resolve lazy translation: {}", e);
                Err(fmt::Error)
            }
        }
    }
}

impl fmt::Debug for LazyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyText")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Serialize for LazyText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.resolve().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

/// Wrap `f` so it runs on every use of the returned value
pub fn lazy<F>(kind: TextKind, f: F) -> LazyText
where
    F: Fn() -> I18nResult<String> + Send + Sync + 'static,
{
    LazyText::new(kind, f)
}

/// Lazy [`gettext`](crate::gettext)
pub fn gettext_lazy(message: impl Into<String>) -> LazyText {
    let message = message.into();
    lazy(TextKind::Native, move || BackendProxy::global().gettext(&message))
}

/// Lazy [`ngettext`](crate::ngettext)
pub fn ngettext_lazy(singular: impl Into<String>, plural: impl Into<String>, count: u64) -> LazyText {
    let (singular, plural) = (singular.into(), plural.into());
    lazy(TextKind::Native, move || {
        BackendProxy::global().ngettext(&singular, &plural, count)
    })
}

/// Lazy [`ugettext`](crate::ugettext)
pub fn ugettext_lazy(message: impl Into<String>) -> LazyText {
    let message = message.into();
    lazy(TextKind::Unicode, move || BackendProxy::global().ugettext(&message))
}

/// Lazy [`ungettext`](crate::ungettext)
pub fn ungettext_lazy(
    singular: impl Into<String>,
    plural: impl Into<String>,
    count: u64,
) -> LazyText {
    let (singular, plural) = (singular.into(), plural.into());
    lazy(TextKind::Unicode, move || {
        BackendProxy::global().ungettext(&singular, &plural, count)
    })
}

/// Lazy [`pgettext`](crate::pgettext)
pub fn pgettext_lazy(context: impl Into<String>, message: impl Into<String>) -> LazyText {
    let (context, message) = (context.into(), message.into());
    lazy(TextKind::Unicode, move || {
        BackendProxy::global().pgettext(&context, &message)
    })
}

/// Lazy [`npgettext`](crate::npgettext)
pub fn npgettext_lazy(
    context: impl Into<String>,
    singular: impl Into<String>,
    plural: impl Into<String>,
    count: u64,
) -> LazyText {
    let (context, singular, plural) = (context.into(), singular.into(), plural.into());
    lazy(TextKind::Unicode, move || {
        BackendProxy::global().npgettext(&context, &singular, &plural, count)
    })
}

/// Anything that can be rendered into a concatenation
pub trait ToText {
    /// Render to an owned string, resolving lazy values
    fn to_text(&self) -> I18nResult<String>;
}

impl ToText for str {
    fn to_text(&self) -> I18nResult<String> {
        Ok(self.to_string())
    }
}

impl ToText for String {
    fn to_text(&self) -> I18nResult<String> {
        Ok(self.clone())
    }
}

impl ToText for LazyText {
    fn to_text(&self) -> I18nResult<String> {
        self.resolve()
    }
}

impl<T: ToText + ?Sized> ToText for &T {
    fn to_text(&self) -> I18nResult<String> {
        (**self).to_text()
    }
}

macro_rules! impl_to_text_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToText for $ty {
                fn to_text(&self) -> I18nResult<String> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

impl_to_text_display!(char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Lazily concatenate `parts`, rendering each at use time in order
pub fn string_concat(parts: Vec<Box<dyn ToText + Send + Sync>>) -> LazyText {
    let parts: Arc<[Box<dyn ToText + Send + Sync>]> = parts.into();
    lazy(TextKind::Unicode, move || {
        parts.iter().try_fold(String::new(), |mut out, part| {
            out.push_str(&part.to_text()?);
            Ok(out)
        })
    })
}

/// Lazily concatenate heterogeneous parts
///
/// ```
/// use transgate_i18n::{gettext_lazy, string_concat};
///
/// let greeting = string_concat!(gettext_lazy("Hello"), ", ", "world", '!');
/// assert_eq!(greeting.resolve().unwrap(), "Hello, world!");
/// ```
#[macro_export]
macro_rules! string_concat {
    ($($part:expr),* $(,)?) => {
        $crate::string_concat(vec![
            $(::std::boxed::Box::new($part) as ::std::boxed::Box<dyn $crate::ToText + Send + Sync>),*
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::I18nError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_recomputed_on_every_use() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let text = lazy(TextKind::Unicode, move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            Ok(format!("call {n}"))
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(text.to_string(), "call 0");
        assert_eq!(text.to_string(), "call 1");
        assert_eq!(text.resolve_bytes().unwrap(), b"call 2".to_vec());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_kind_is_declared() {
        assert_eq!(gettext_lazy("a").kind(), TextKind::Native);
        assert_eq!(ngettext_lazy("a", "b", 1).kind(), TextKind::Native);
        assert_eq!(ugettext_lazy("a").kind(), TextKind::Unicode);
        assert_eq!(ungettext_lazy("a", "b", 1).kind(), TextKind::Unicode);
        assert_eq!(pgettext_lazy("c", "a").kind(), TextKind::Unicode);
        assert_eq!(npgettext_lazy("c", "a", "b", 1).kind(), TextKind::Unicode);
    }

    #[test]
    fn test_resolution_error_surfaces() {
        let text = lazy(TextKind::Native, || {
            Err(I18nError::InvalidLanguageCode("??".to_string()))
        });
        assert!(text.resolve().is_err());

        let mut out = String::new();
        assert!(fmt::write(&mut out, format_args!("{text}")).is_err());
    }

    #[test]
    fn test_concat_preserves_order_and_defers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let part = lazy(TextKind::Unicode, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok("middle".to_string())
        });

        let joined = string_concat!("start-", part, '-', 42_u32, "-", true);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(joined.resolve().unwrap(), "start-middle-42-true");
        assert_eq!(joined.to_string(), "start-middle-42-true");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concat_of_nothing_is_empty() {
        assert_eq!(string_concat(Vec::new()).resolve().unwrap(), "");
    }

    #[test]
    fn test_serializes_as_resolved_string() {
        let text = lazy(TextKind::Unicode, || Ok("Bonjour".to_string()));
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"Bonjour\"");
    }
}
