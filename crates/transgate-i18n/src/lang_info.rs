//! Static language metadata

use crate::error::{I18nError, I18nResult};
use serde::Serialize;

/// Display metadata for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    /// Language code, e.g. `pt-br`
    pub code: &'static str,
    /// English name
    pub name: &'static str,
    /// Name in the language itself
    pub name_local: &'static str,
    /// Written right-to-left
    pub bidi: bool,
}

const fn info(
    code: &'static str,
    name: &'static str,
    name_local: &'static str,
    bidi: bool,
) -> LanguageInfo {
    LanguageInfo {
        code,
        name,
        name_local,
        bidi,
    }
}

static LANG_INFO: &[LanguageInfo] = &[
    info("af", "Afrikaans", "Afrikaans", false),
    info("ar", "Arabic", "العربيّة", true),
    info("az", "Azerbaijani", "Azərbaycanca", false),
    info("be", "Belarusian", "беларуская", false),
    info("bg", "Bulgarian", "български", false),
    info("bn", "Bengali", "বাংলা", false),
    info("br", "Breton", "brezhoneg", false),
    info("bs", "Bosnian", "bosanski", false),
    info("ca", "Catalan", "català", false),
    info("cs", "Czech", "česky", false),
    info("cy", "Welsh", "Cymraeg", false),
    info("da", "Danish", "dansk", false),
    info("de", "German", "Deutsch", false),
    info("el", "Greek", "Ελληνικά", false),
    info("en", "English", "English", false),
    info("en-gb", "British English", "British English", false),
    info("eo", "Esperanto", "Esperanto", false),
    info("es", "Spanish", "español", false),
    info("es-ar", "Argentinian Spanish", "español de Argentina", false),
    info("es-mx", "Mexican Spanish", "español de Mexico", false),
    info("es-ni", "Nicaraguan Spanish", "español de Nicaragua", false),
    info("es-ve", "Venezuelan Spanish", "español de Venezuela", false),
    info("et", "Estonian", "eesti", false),
    info("eu", "Basque", "Basque", false),
    info("fa", "Persian", "فارسی", true),
    info("fi", "Finnish", "suomi", false),
    info("fr", "French", "français", false),
    info("fy-nl", "Frisian", "Frisian", false),
    info("ga", "Irish", "Gaeilge", false),
    info("gl", "Galician", "galego", false),
    info("he", "Hebrew", "עברית", true),
    info("hi", "Hindi", "Hindi", false),
    info("hr", "Croatian", "Hrvatski", false),
    info("hu", "Hungarian", "Magyar", false),
    info("ia", "Interlingua", "Interlingua", false),
    info("id", "Indonesian", "Bahasa Indonesia", false),
    info("is", "Icelandic", "Íslenska", false),
    info("it", "Italian", "italiano", false),
    info("ja", "Japanese", "日本語", false),
    info("ka", "Georgian", "ქართული", false),
    info("kk", "Kazakh", "Қазақ", false),
    info("km", "Khmer", "Khmer", false),
    info("kn", "Kannada", "Kannada", false),
    info("ko", "Korean", "한국어", false),
    info("lb", "Luxembourgish", "Lëtzebuergesch", false),
    info("lt", "Lithuanian", "Lietuviškai", false),
    info("lv", "Latvian", "latvieš", false),
    info("mk", "Macedonian", "Македонски", false),
    info("ml", "Malayalam", "Malayalam", false),
    info("mn", "Mongolian", "Mongolian", false),
    info("my", "Burmese", "မြန်မာဘာသာ", false),
    info("nb", "Norwegian Bokmal", "norsk (bokmål)", false),
    info("ne", "Nepali", "नेपाली", false),
    info("nl", "Dutch", "Nederlands", false),
    info("nn", "Norwegian Nynorsk", "norsk (nynorsk)", false),
    info("no", "Norwegian", "norsk", false),
    info("os", "Ossetic", "Ирон", false),
    info("pa", "Punjabi", "Punjabi", false),
    info("pl", "Polish", "polski", false),
    info("pt", "Portuguese", "Português", false),
    info("pt-br", "Brazilian Portuguese", "Português Brasileiro", false),
    info("ro", "Romanian", "Română", false),
    info("ru", "Russian", "Русский", false),
    info("sk", "Slovak", "slovenský", false),
    info("sl", "Slovenian", "Slovenščina", false),
    info("sq", "Albanian", "shqip", false),
    info("sr", "Serbian", "српски", false),
    info("sr-latn", "Serbian Latin", "srpski (latinica)", false),
    info("sv", "Swedish", "svenska", false),
    info("sw", "Swahili", "Kiswahili", false),
    info("ta", "Tamil", "தமிழ்", false),
    info("te", "Telugu", "తెలుగు", false),
    info("th", "Thai", "ภาษาไทย", false),
    info("tr", "Turkish", "Türkçe", false),
    info("tt", "Tatar", "Татарча", false),
    info("udm", "Udmurt", "Удмурт", false),
    info("uk", "Ukrainian", "Українська", false),
    info("ur", "Urdu", "اردو", true),
    info("vi", "Vietnamese", "Tiếng Việt", false),
    info("zh-cn", "Simplified Chinese", "简体中文", false),
    info("zh-tw", "Traditional Chinese", "繁體中文", false),
];

/// Metadata for `code`
///
/// Matching ignores ASCII case. Codes missing from the table fail with
/// [`I18nError::UnknownLanguage`]; there is no fallback to the base language.
pub fn get_language_info(code: &str) -> I18nResult<&'static LanguageInfo> {
    LANG_INFO
        .iter()
        .find(|info| info.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| I18nError::UnknownLanguage {
            code: code.to_string(),
        })
}

/// Every language with metadata, in code order
pub fn known_languages() -> &'static [LanguageInfo] {
    LANG_INFO
}
