//! Lazy translations defined before the process-wide settings are final.

use once_cell::sync::Lazy;
use parking_lot::{const_mutex, Mutex, MutexGuard};
use transgate_common::test_utils::init_test_logging;
use transgate_config::Settings;
use transgate_i18n::{
    activate, deactivate, gettext_lazy, ngettext_lazy, npgettext_lazy, pgettext_lazy,
    string_concat, ugettext_lazy, BackendProxy, Catalog, CatalogStore, LazyText, Operation,
    TextKind,
};

static GLOBAL_LOCK: Mutex<()> = const_mutex(());

/// Defined once, like a module-level default value
static GREETING: Lazy<LazyText> = Lazy::new(|| gettext_lazy("Hello"));

fn isolated(settings: Settings) -> MutexGuard<'static, ()> {
    init_test_logging();
    let guard = GLOBAL_LOCK.lock();
    let catalogs = CatalogStore::global();
    catalogs.install(
        Catalog::new("fr")
            .with_translation("Hello", "Bonjour")
            .with_context("month", "May", "mai")
            .with_plural("file", ["fichier", "fichiers"])
            .with_context_plural("disk", "file", ["fichier disque", "fichiers disque"]),
    );
    catalogs.install(Catalog::new("de").with_translation("Hello", "Hallo"));
    transgate_config::configure(settings);
    BackendProxy::global().reset();
    guard
}

#[test]
fn test_creation_does_not_bind() {
    let _lock = isolated(Settings::default());
    let text = ugettext_lazy("Hello");
    let _ = pgettext_lazy("month", "May");

    assert_eq!(text.kind(), TextKind::Unicode);
    assert!(BackendProxy::global().bound_operations().is_empty());
}

#[test]
fn test_configuration_after_definition_is_honoured() {
    let _lock = isolated(Settings::default());
    let text = gettext_lazy("Hello");

    transgate_config::configure(Settings {
        use_i18n: false,
        ..Settings::default()
    });
    activate("fr").unwrap();

    assert_eq!(text.to_string(), "Hello");
    assert_eq!(
        BackendProxy::global()
            .bound_identifier(Operation::Gettext)
            .as_deref(),
        Some("transgate_i18n.NullBackend")
    );
}

#[test]
fn test_value_relocalizes_on_every_use() -> anyhow::Result<()> {
    let _lock = isolated(Settings::default());

    assert_eq!(GREETING.to_string(), "Hello");
    activate("fr")?;
    assert_eq!(GREETING.to_string(), "Bonjour");
    activate("de")?;
    assert_eq!(GREETING.to_string(), "Hallo");
    assert_eq!(GREETING.resolve_bytes()?, "Hallo".as_bytes());

    deactivate()?;
    Ok(())
}

#[test]
fn test_plural_and_context_variants() -> anyhow::Result<()> {
    let _lock = isolated(Settings::default());
    let one = ngettext_lazy("file", "files", 1);
    let many = npgettext_lazy("disk", "file", "files", 4);
    let month = pgettext_lazy("month", "May");

    assert_eq!(one.kind(), TextKind::Native);
    assert_eq!(many.kind(), TextKind::Unicode);
    assert_eq!(many.to_string(), "files");

    activate("fr")?;
    assert_eq!(one.to_string(), "fichier");
    assert_eq!(many.to_string(), "fichiers disque");
    assert_eq!(month.to_string(), "mai");

    deactivate()?;
    Ok(())
}

#[test]
fn test_concat_with_lazy_parts() -> anyhow::Result<()> {
    let _lock = isolated(Settings::default());
    let title = string_concat!(gettext_lazy("Hello"), " (", 3_u64, ")");

    activate("de")?;
    assert_eq!(title.to_string(), "Hallo (3)");
    activate("fr")?;
    assert_eq!(title.to_string(), "Bonjour (3)");

    deactivate()?;
    Ok(())
}

#[test]
fn test_serialized_as_current_translation() -> anyhow::Result<()> {
    let _lock = isolated(Settings::default());
    activate("fr")?;
    assert_eq!(serde_json::to_string(&*GREETING)?, "\"Bonjour\"");
    deactivate()?;
    Ok(())
}

#[test]
fn test_resolution_failure_on_render() {
    let _lock = isolated(Settings {
        i18n_backend_real: "nowhere.Backend".to_string(),
        ..Settings::default()
    });
    let text = gettext_lazy("Hello");
    let err = text.resolve().unwrap_err();
    assert!(err.is_resolution());
}
