//! Runtime validation of loaded settings.

use crate::schema::Settings;
use transgate_common::{is_valid_language_code, Result, TransgateError};

/// Settings validator.
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validates a settings value.
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.i18n_backend_real.trim().is_empty() {
            return Err(TransgateError::config(
                "i18n_backend_real cannot be empty",
            ));
        }

        if settings.i18n_backend_null.trim().is_empty() {
            return Err(TransgateError::config(
                "i18n_backend_null cannot be empty",
            ));
        }

        if !is_valid_language_code(&settings.language_code) {
            return Err(TransgateError::config(format!(
                "language_code '{}' is not a valid language code",
                settings.language_code
            )));
        }

        if let Some(entry) = settings
            .languages
            .iter()
            .find(|entry| !is_valid_language_code(&entry.code))
        {
            return Err(TransgateError::config(format!(
                "languages entry '{}' is not a valid language code",
                entry.code
            )));
        }

        if let Some(code) = settings
            .languages_bidi
            .iter()
            .find(|code| !is_valid_language_code(code))
        {
            return Err(TransgateError::config(format!(
                "languages_bidi entry '{code}' is not a valid language code"
            )));
        }

        if settings.language_cookie_name.is_empty() {
            return Err(TransgateError::config(
                "language_cookie_name cannot be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LanguageEntry;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SettingsValidator::validate(&Settings::default()).is_ok());
    }

    #[test]
    fn test_empty_backend_identifier_rejected() {
        let settings = Settings {
            i18n_backend_null: "  ".to_string(),
            ..Settings::default()
        };
        let err = SettingsValidator::validate(&settings).unwrap_err();
        assert!(err.to_string().contains("i18n_backend_null"));
    }

    #[test]
    fn test_bad_language_entry_rejected() {
        let mut settings = Settings::default();
        settings.languages.push(LanguageEntry::new("not a code", "Broken"));
        let err = SettingsValidator::validate(&settings).unwrap_err();
        assert!(err.to_string().contains("not a code"));
    }
}
