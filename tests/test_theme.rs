//! Integration tests for the theme controller.
//!
//! Tests cover:
//! - Initialization from stored value, ambient signal, and default
//! - Toggle persistence through the file-backed store
//! - Degraded storage never panicking

mod common;

use common::*;

#[test]
fn test_persisted_value_wins_over_ambient() {
    let store = MemoryPreferenceStore::new().with_entry(THEME_KEY, "false");
    let theme = ThemeController::initialize(&store, &FixedScheme(Some(true)));
    assert!(!theme.is_dark());

    let store = MemoryPreferenceStore::new().with_entry(THEME_KEY, "true");
    let theme = ThemeController::initialize(&store, &FixedScheme(Some(false)));
    assert!(theme.is_dark());
}

#[test]
fn test_ambient_used_without_persisted_value() {
    let store = MemoryPreferenceStore::new();
    let dark = ThemeController::initialize(&store, &FixedScheme(Some(true)));
    assert!(dark.is_dark());
    assert_eq!(dark.appearance(), Appearance::Dark);

    let light = ThemeController::initialize(&store, &FixedScheme(Some(false)));
    assert!(!light.is_dark());
}

#[test]
fn test_defaults_to_light_without_any_signal() {
    let store = MemoryPreferenceStore::new();
    let theme = ThemeController::initialize(&store, &FixedScheme(None));
    assert_eq!(theme.appearance(), Appearance::Light);
}

#[test]
fn test_unavailable_storage_falls_back_to_light() {
    let mut store = BrokenStore::default();
    let mut theme = ThemeController::initialize(&store, &FixedScheme(Some(true)));
    assert!(!theme.is_dark());

    // Writes fail silently; the in-memory state still flips.
    assert!(theme.toggle(&mut store));
    assert_eq!(store.writes_attempted, 1);
}

#[test]
fn test_double_toggle_restores_and_persists() {
    for start in [true, false] {
        let mut store = MemoryPreferenceStore::new();
        let mut theme = ThemeController::initialize(&store, &FixedScheme(Some(start)));
        for _ in 0..2 {
            let dark = theme.toggle(&mut store);
            let expected = if dark { "true" } else { "false" };
            assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some(expected));
        }
        assert_eq!(theme.is_dark(), start);
    }
}

#[test]
fn test_fresh_session_light_then_toggle_to_dark() {
    let (mut store, _dir) = create_test_store();
    let mut theme = ThemeController::initialize(&store, &FixedScheme(Some(false)));
    assert!(!theme.is_dark());

    assert!(theme.toggle(&mut store));
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("true"));

    // A new session reads the persisted value, ignoring the ambient signal.
    let reopened = FilePreferenceStore::new(store.path());
    let theme = ThemeController::initialize(&reopened, &FixedScheme(Some(false)));
    assert!(theme.is_dark());
}

#[test]
fn test_corrupt_preference_file_falls_back_to_light() {
    let (store, _dir) = create_test_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "not json").unwrap();

    assert!(matches!(store.get(THEME_KEY), Err(StoreError::Parse { .. })));
    let theme = ThemeController::initialize(&store, &FixedScheme(Some(true)));
    assert!(!theme.is_dark());
}

#[test]
fn test_file_store_keeps_other_keys() {
    let (mut store, _dir) = create_test_store();
    store.set("other", "value").unwrap();
    let mut theme = ThemeController::default();
    theme.toggle(&mut store);

    assert_eq!(store.get("other").unwrap().as_deref(), Some("value"));
    store.remove(THEME_KEY).unwrap();
    assert_eq!(store.get(THEME_KEY).unwrap(), None);
    assert_eq!(store.get("other").unwrap().as_deref(), Some("value"));
}

#[test]
fn test_toggle_recovers_from_corrupt_preference_file() {
    let (mut store, _dir) = create_test_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), r#"{"darkMode": true}"#).unwrap();

    let mut theme = ThemeController::initialize(&store, &FixedScheme(None));
    assert!(!theme.is_dark());

    // Each toggle leaves the persisted value equal to the in-memory one.
    for _ in 0..3 {
        let dark = theme.toggle(&mut store);
        let expected = if dark { "true" } else { "false" };
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some(expected));
    }
    assert!(theme.is_dark());
}

#[test]
fn test_describe_stored_reports_read_errors() {
    use portfolio::core::theme::describe_stored;

    assert_eq!(describe_stored(&MemoryPreferenceStore::new()), "none");
    let store = MemoryPreferenceStore::new().with_entry(THEME_KEY, "true");
    assert_eq!(describe_stored(&store), "true");

    let description = describe_stored(&BrokenStore::default());
    assert!(description.starts_with("unreadable"), "{}", description);
    assert!(description.contains("unavailable"));
}
