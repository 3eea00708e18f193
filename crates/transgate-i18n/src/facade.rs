//! Module-level translation functions
//!
//! Each function forwards to [`BackendProxy::global`], so the engine behind a
//! function is chosen the first time that function is called, not when this
//! crate is linked or configured.

use crate::backend::LanguageRequest;
use crate::error::I18nResult;
use crate::locale_override::LocaleOverride;
use crate::proxy::BackendProxy;

/// Translate `message` in the active language
pub fn gettext(message: &str) -> I18nResult<String> {
    BackendProxy::global().gettext(message)
}

/// Unicode flavour of [`gettext`]
pub fn ugettext(message: &str) -> I18nResult<String> {
    BackendProxy::global().ugettext(message)
}

/// Mark `message` for extraction without translating it
pub fn gettext_noop(message: &str) -> I18nResult<String> {
    BackendProxy::global().gettext_noop(message)
}

/// Alias of [`gettext_noop`]
pub fn ugettext_noop(message: &str) -> I18nResult<String> {
    gettext_noop(message)
}

/// Translate a message with singular and plural forms
pub fn ngettext(singular: &str, plural: &str, count: u64) -> I18nResult<String> {
    BackendProxy::global().ngettext(singular, plural, count)
}

/// Unicode flavour of [`ngettext`]
pub fn ungettext(singular: &str, plural: &str, count: u64) -> I18nResult<String> {
    BackendProxy::global().ungettext(singular, plural, count)
}

/// Translate `message` disambiguated by `context`
pub fn pgettext(context: &str, message: &str) -> I18nResult<String> {
    BackendProxy::global().pgettext(context, message)
}

/// Context-qualified plural translation
pub fn npgettext(context: &str, singular: &str, plural: &str, count: u64) -> I18nResult<String> {
    BackendProxy::global().npgettext(context, singular, plural, count)
}

/// Activate `language` for the current thread
pub fn activate(language: &str) -> I18nResult<()> {
    BackendProxy::global().activate(language)
}

/// Return the current thread to the default language
pub fn deactivate() -> I18nResult<()> {
    BackendProxy::global().deactivate()
}

/// Switch translation off for the current thread
pub fn deactivate_all() -> I18nResult<()> {
    BackendProxy::global().deactivate_all()
}

/// Active language, `None` when translation is switched off
pub fn get_language() -> I18nResult<Option<String>> {
    BackendProxy::global().get_language()
}

/// Whether the active language is written right-to-left
pub fn get_language_bidi() -> I18nResult<bool> {
    BackendProxy::global().get_language_bidi()
}

/// Whether translations are available for `code`
pub fn check_for_language(code: &str) -> I18nResult<bool> {
    BackendProxy::global().check_for_language(code)
}

/// Locale name (`en_US`) for a language name (`en-us`)
pub fn to_locale(language: &str) -> I18nResult<String> {
    BackendProxy::global().to_locale(language)
}

/// Language a request should be served in
pub fn get_language_from_request(request: &LanguageRequest, check_path: bool) -> I18nResult<String> {
    BackendProxy::global().get_language_from_request(request, check_path)
}

/// Supported language prefix of a URL path
pub fn get_language_from_path(path: &str) -> I18nResult<Option<String>> {
    BackendProxy::global().get_language_from_path(path)
}

/// Convert template source into gettext calls for message extraction
pub fn templatize(source: &str, origin: Option<&str>) -> I18nResult<String> {
    BackendProxy::global().templatize(source, origin)
}

/// Activate `language` until the returned guard drops
///
/// ```
/// use transgate_i18n::{get_language, override_locale};
///
/// {
///     let _guard = override_locale(Some("fr"), false)?;
///     assert_eq!(get_language()?.as_deref(), Some("fr"));
/// }
/// assert_eq!(get_language()?.as_deref(), Some("en-us"));
/// # Ok::<(), transgate_i18n::I18nError>(())
/// ```
pub fn override_locale(
    language: Option<&str>,
    deactivate: bool,
) -> I18nResult<LocaleOverride<'static>> {
    BackendProxy::global().override_locale(language, deactivate)
}

/// Run `f` with `language` active, then restore (or deactivate)
pub fn with_locale<F, T>(language: Option<&str>, deactivate: bool, f: F) -> I18nResult<T>
where
    F: FnOnce() -> T,
{
    BackendProxy::global().with_locale(language, deactivate, f)
}
