//! Settings loading from TOML, YAML, or JSON files with environment overrides.

use crate::schema::Settings;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use transgate_common::{Result, TransgateError};

/// Prefix of the environment variables that override file settings.
pub const ENV_PREFIX: &str = "TRANSGATE_";

/// On-disk settings formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// TOML document.
    Toml,
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl SettingsFormat {
    /// Picks a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(TransgateError::config(format!(
                "unsupported settings file extension: {}",
                path.display()
            ))),
        }
    }
}

/// Settings loader.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    path: PathBuf,
}

impl SettingsLoader {
    /// Creates a new settings loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads, overrides from the process environment, and validates.
    pub fn load(&self) -> Result<Settings> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Like [`load`](Self::load) with an explicit environment lookup.
    pub fn load_with_env<F>(&self, lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = SettingsFormat::from_path(&self.path)?;
        debug!("Loading settings file: {:?}", self.path);

        let contents = std::fs::read_to_string(&self.path)?;
        let mut settings = Self::parse_str(&contents, format)?;
        apply_env_overrides(&mut settings, lookup)?;
        settings.validate()?;

        info!(
            use_i18n = settings.use_i18n,
            language_code = %settings.language_code,
            "Loaded settings from {:?}",
            self.path
        );
        Ok(settings)
    }

    /// Parses settings from an in-memory document without validating them.
    pub fn parse_str(contents: &str, format: SettingsFormat) -> Result<Settings> {
        match format {
            SettingsFormat::Toml => {
                toml::from_str(contents).map_err(|e| TransgateError::Serialization(e.to_string()))
            }
            SettingsFormat::Yaml => serde_yaml::from_str(contents)
                .map_err(|e| TransgateError::Serialization(e.to_string())),
            SettingsFormat::Json => serde_json::from_str(contents)
                .map_err(|e| TransgateError::Serialization(e.to_string())),
        }
    }
}

/// Applies `TRANSGATE_*` overrides found through `lookup`.
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

    if let Some(raw) = var("USE_I18N") {
        settings.use_i18n = parse_bool(&raw).ok_or_else(|| {
            TransgateError::config(format!("{ENV_PREFIX}USE_I18N: invalid boolean '{raw}'"))
        })?;
    }
    if let Some(code) = var("LANGUAGE_CODE") {
        settings.language_code = code;
    }
    if let Some(identifier) = var("I18N_BACKEND_REAL") {
        settings.i18n_backend_real = identifier;
    }
    if let Some(identifier) = var("I18N_BACKEND_NULL") {
        settings.i18n_backend_null = identifier;
    }
    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
