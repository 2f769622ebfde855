mod common;

use std::sync::Arc;

use rust_decimal::Decimal;
use storefront::{
    models::Theme,
    preferences::Preferences,
    storage::{CART_KEY, FileStorage, KeyValueStore, MemoryStorage, THEME_KEY},
    store::Store,
};

use common::product;

#[test]
fn file_storage_round_trips_values() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();

    assert_eq!(storage.get("missing").unwrap(), None);

    storage.set("greeting", "hello").unwrap();
    storage.set("greeting", "hello again").unwrap();

    assert_eq!(storage.get("greeting").unwrap().as_deref(), Some("hello again"));
    assert!(dir.path().join("greeting").exists());
}

#[test]
fn file_storage_creates_its_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");

    let storage = FileStorage::open(&nested).unwrap();
    storage.set(CART_KEY, "[]").unwrap();

    assert_eq!(storage.dir(), nested.as_path());
    assert_eq!(storage.get(CART_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn cart_survives_a_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let p1 = product("p1", Decimal::new(1999, 2));
    let p2 = product("p2", Decimal::new(500, 2));

    let saved = {
        let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
        let mut store = Store::hydrate(vec![p1.clone(), p2.clone()], storage);
        store.add_to_cart(&p1);
        store.add_to_cart(&p2);
        store.add_to_cart(&p2);
        store.cart().clone()
    };

    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
    let restored = Store::hydrate(vec![p1, p2], storage);

    assert_eq!(restored.cart(), &saved);
    assert_eq!(restored.cart().total(), Decimal::new(2999, 2));
    assert_eq!(restored.cart().item_count(), 3);
}

#[test]
fn missing_cart_key_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());

    let store = Store::hydrate(vec![product("p1", Decimal::ONE)], storage);

    assert!(store.cart().is_empty());
    assert_eq!(store.products().len(), 1);
}

#[test]
fn theme_defaults_to_light() {
    let preferences = Preferences::new(Arc::new(MemoryStorage::new()));

    assert_eq!(preferences.theme(), Theme::Light);
}

#[test]
fn theme_set_and_toggle_are_stored() {
    let storage = Arc::new(MemoryStorage::new());
    let preferences = Preferences::new(storage.clone());

    preferences.set_theme(Theme::Dark).unwrap();
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(preferences.theme(), Theme::Dark);

    assert_eq!(preferences.toggle_theme().unwrap(), Theme::Light);
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn quoted_theme_is_accepted() {
    let storage = Arc::new(MemoryStorage::with_entry(THEME_KEY, "\"dark\""));

    assert_eq!(Preferences::new(storage).theme(), Theme::Dark);
}

#[test]
fn unknown_theme_falls_back_to_light() {
    let storage = Arc::new(MemoryStorage::with_entry(THEME_KEY, "sepia"));

    assert_eq!(Preferences::new(storage).theme(), Theme::Light);
}

#[test]
fn theme_and_cart_share_one_directory() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
    let preferences = Preferences::new(storage.clone());
    let mut store = Store::hydrate(Vec::new(), storage);

    preferences.toggle_theme().unwrap();
    store.add_to_cart(&product("p1", Decimal::ONE));

    assert!(dir.path().join(THEME_KEY).exists());
    assert!(dir.path().join(CART_KEY).exists());
}
