//! Settings persistence integration tests
//!
//! `AppState` with a `JsonConfigStore` in a temp directory, standing in
//! for the platform app-data directory.
//!
//! Run with: cargo test --test settings

use pocketpay_lib::adapters::{DemoWallet, JsonConfigStore};
use pocketpay_lib::domain::{ThemeMode, WalletConfig};
use pocketpay_lib::ports::ConfigStore;
use pocketpay_lib::state::AppState;

#[test]
fn saved_settings_are_applied_on_attach() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"theme":"dark","display":{"screenWidth":428.0}}"#,
    )
    .unwrap();

    let state = AppState::new(DemoWallet::cards(), DemoWallet::banks(), WalletConfig::default());
    state
        .attach_config_store(Box::new(JsonConfigStore::in_dir(dir.path())))
        .unwrap();

    assert!(state.theme.lock().unwrap().is_dark());
    assert_eq!(state.config.lock().unwrap().display.screen_width, 428.0);
    assert_eq!(state.stack.lock().unwrap().frame_state().screen_width, 428.0);
}

#[test]
fn theme_toggles_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::default();
    state
        .attach_config_store(Box::new(JsonConfigStore::in_dir(dir.path())))
        .unwrap();

    assert_eq!(state.toggle_theme().unwrap(), ThemeMode::Dark);
    assert_eq!(state.toggle_theme().unwrap(), ThemeMode::Light);
    assert_eq!(state.toggle_theme().unwrap(), ThemeMode::Dark);

    let reloaded = AppState::default();
    reloaded
        .attach_config_store(Box::new(JsonConfigStore::in_dir(dir.path())))
        .unwrap();
    assert!(reloaded.theme.lock().unwrap().is_dark());
}

#[test]
fn toggling_without_a_store_stays_in_memory() {
    let state = AppState::default();
    assert_eq!(state.toggle_theme().unwrap(), ThemeMode::Dark);
    assert_eq!(state.config.lock().unwrap().theme, ThemeMode::Dark);
}

#[test]
fn corrupt_settings_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    let store = JsonConfigStore::in_dir(dir.path());
    assert!(store.load().is_err());

    let state = AppState::default();
    assert!(state.attach_config_store(Box::new(store)).is_err());
    assert_eq!(state.config.lock().unwrap().theme, ThemeMode::Light);
}
