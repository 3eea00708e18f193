//! Language-code helpers shared by the configuration layer and the engines.
//!
//! Language codes use the lowercase, hyphenated form (`en-us`, `sr-latn`);
//! locale names use the POSIX form (`en_US`, `sr_Latn`).

use unic_langid::LanguageIdentifier;

/// Returns `true` when `code` is a syntactically valid language code.
pub fn is_valid_language_code(code: &str) -> bool {
    !code.is_empty() && code.parse::<LanguageIdentifier>().is_ok()
}

/// Returns the primary language subtag of `code` (`"pt-br"` -> `"pt"`).
pub fn base_language(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// Turns a language name (`en-us`) into a locale name (`en_US`).
///
/// Subtags longer than two characters are treated as scripts and title-cased,
/// so `sr-latn` becomes `sr_Latn`.
pub fn to_locale(language: &str) -> String {
    match language.split_once('-') {
        Some((lang, region)) if region.chars().count() > 2 => {
            let mut chars = region.chars();
            let first: String = chars.next().map(|c| c.to_uppercase().collect()).unwrap_or_default();
            format!("{}_{}{}", lang.to_lowercase(), first, chars.as_str().to_lowercase())
        }
        Some((lang, region)) => format!("{}_{}", lang.to_lowercase(), region.to_uppercase()),
        None => language.to_lowercase(),
    }
}

/// Turns a locale name (`en_US`) into a language name (`en-us`).
pub fn to_language(locale: &str) -> String {
    match locale.split_once('_') {
        Some((lang, region)) => format!("{}-{}", lang.to_lowercase(), region.to_lowercase()),
        None => locale.to_lowercase(),
    }
}

/// Normalizes line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}
