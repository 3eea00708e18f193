//! Scoped locale activation
//!
//! [`LocaleOverride`] activates a language when created and undoes the change
//! when dropped, on every exit path including unwinding. Nested guards restore
//! the language of the immediately enclosing scope.

use crate::error::I18nResult;
use crate::proxy::BackendProxy;
use tracing::{debug, warn};

/// Guard holding a temporary language activation
#[must_use = "the previous language is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LocaleOverride<'a> {
    proxy: &'a BackendProxy,
    language: Option<String>,
    previous: Option<String>,
    deactivate: bool,
    exited: bool,
}

impl<'a> LocaleOverride<'a> {
    /// Activate `language` through `proxy`, or switch translation off for `None`
    ///
    /// With `deactivate` set, leaving the scope deactivates instead of
    /// restoring the language that was active before.
    pub fn enter(
        proxy: &'a BackendProxy,
        language: Option<&str>,
        deactivate: bool,
    ) -> I18nResult<Self> {
        let previous = proxy.get_language()?;
        match language {
            Some(language) => proxy.activate(language)?,
            None => proxy.deactivate_all()?,
        }
        debug!(?language, ?previous, deactivate, "Entered locale override");

        Ok(Self {
            proxy,
            language: language.map(str::to_string),
            previous,
            deactivate,
            exited: false,
        })
    }

    /// Language requested for the scope, `None` when translation is switched off
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Language that was active when the scope was entered
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Leave the scope now, reporting a failed restore instead of logging it
    pub fn finish(mut self) -> I18nResult<()> {
        self.exit()
    }

    fn exit(&mut self) -> I18nResult<()> {
        if self.exited {
            return Ok(());
        }
        self.exited = true;

        if self.deactivate {
            return self.proxy.deactivate();
        }
        match &self.previous {
            Some(previous) => self.proxy.activate(previous),
            None => self.proxy.deactivate_all(),
        }
    }
}

impl Drop for LocaleOverride<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            warn!("Failed to restore language after override: {}", e);
        }
    }
}
