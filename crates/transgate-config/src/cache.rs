//! Thread-safe settings caching with arc-swap for lock-free reads.

use crate::schema::Settings;
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

/// Process-wide settings, initialized with defaults on first access.
static GLOBAL_SETTINGS: Lazy<Arc<SettingsCache>> =
    Lazy::new(|| Arc::new(SettingsCache::default()));

/// Thread-safe settings cache using arc-swap for lock-free reads.
#[derive(Debug)]
pub struct SettingsCache {
    settings: ArcSwap<Settings>,
}

impl SettingsCache {
    /// Creates a new settings cache with the given initial settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: ArcSwap::from_pointee(settings),
        }
    }

    /// Gets the current settings.
    pub fn get(&self) -> Arc<Settings> {
        self.settings.load_full()
    }

    /// Reads the `use_i18n` flag.
    pub fn use_i18n(&self) -> bool {
        self.settings.load().use_i18n
    }

    /// Replaces the settings atomically.
    pub fn update(&self, settings: Settings) {
        debug!(use_i18n = settings.use_i18n, "Updating settings");
        self.settings.store(Arc::new(settings));
    }

    /// Applies `change` to a copy of the current settings and stores the result.
    pub fn modify<F>(&self, change: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = Settings::clone(&self.get());
        change(&mut settings);
        self.update(settings);
    }
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Handle to the process-wide settings.
pub fn global() -> Arc<SettingsCache> {
    Arc::clone(&GLOBAL_SETTINGS)
}

/// Replaces the process-wide settings.
pub fn configure(settings: Settings) {
    GLOBAL_SETTINGS.update(settings);
}
