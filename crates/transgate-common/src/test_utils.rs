//! Test utilities and shared test helpers for Transgate.
//!
//! This module provides logging setup, settings fixtures, and proptest
//! strategies that can be used across all crates in the workspace.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Guards the one-time subscriber installation.
static INIT: Once = Once::new();

/// Install a test-writer `tracing` subscriber honouring `RUST_LOG` (default `debug`).
///
/// Every test may call this; only the first call installs anything.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Without `tracing-subscriber` there is nothing to install
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Temporary directory removed when the handle drops, for settings files.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Settings-related test fixtures.
pub mod config_fixtures {
    /// A minimal settings file in TOML form.
    pub fn minimal_settings_toml() -> &'static str {
        r#"
use_i18n = true
language_code = "en-us"
"#
    }

    /// A complete settings file in TOML form.
    pub fn full_settings_toml() -> &'static str {
        r#"
use_i18n = false
i18n_backend_real = "transgate_i18n.RealBackend"
i18n_backend_null = "transgate_i18n.NullBackend"
language_code = "fr"
languages_bidi = ["he", "ar"]
language_cookie_name = "lang"

[[languages]]
code = "en"
name = "English"

[[languages]]
code = "fr"
name = "French"

[[languages]]
code = "he"
name = "Hebrew"
"#
    }

    /// A complete settings file in YAML form.
    pub fn full_settings_yaml() -> &'static str {
        concat!(
            "use_i18n: true\n",
            "i18n_backend_real: \"transgate_i18n.RealBackend\"\n",
            "i18n_backend_null: \"transgate_i18n.NullBackend\"\n",
            "language_code: \"de\"\n",
            "languages:\n",
            "  - code: \"de\"\n",
            "    name: \"German\"\n",
            "  - code: \"ar\"\n",
            "    name: \"Arabic\"\n",
            "languages_bidi:\n",
            "  - \"ar\"\n",
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating language codes such as `pt-br` or `sr-latn`.
    pub fn language_code_strategy() -> impl Strategy<Value = String> {
        r"[a-z]{2,3}(-([a-z]{2}|[a-z]{4}))?".prop_map(|s| s.to_string())
    }

    /// Strategy for generating translatable message ids.
    pub fn message_strategy() -> impl Strategy<Value = String> {
        r"[A-Za-z][A-Za-z0-9 ,.!?]{0,40}".prop_map(|s| s.to_string())
    }
}
