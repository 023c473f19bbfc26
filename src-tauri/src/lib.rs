//! PocketPay wallet core
//!
//! Card browsing, QR payments with PIN confirmation, and the bridge to the
//! hosted card-issuance web app. The core is headless; the Tauri shell
//! (feature `shell`) wires it to a webview frontend.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `anim/` - Frame-clocked animated values and settle-notified signals
//! - `stack/` - Card stack engine (position math, pan gestures, transitions)
//! - `bridge/` - Card-issuance bridge protocol and session
//! - `amount/` - Amount parsing, Indian-grouped display, amount in words
//! - `flow/` - QR payment screens and the navigator they dispatch to
//! - `ports/` - Trait definitions (interfaces) for external dependencies
//! - `adapters/` - Implementations of ports (system clock, rand ids, JSON settings)
//! - `commands/` - Tauri command handlers (driving adapters)
//! - `state/` - Application state management

// Core domain (pure, no I/O)
pub mod amount;
pub mod anim;
pub mod bridge;
pub mod domain;
pub mod flow;
pub mod ports;
pub mod stack;

// Adapters (external I/O)
pub mod adapters;

// Tauri integration
#[cfg(feature = "shell")]
pub mod commands;
pub mod state;

#[cfg(feature = "shell")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::Manager;

    use adapters::JsonConfigStore;
    use state::AppState;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("pocketpay_lib=info"))
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(AppState::from_env())
        .setup(|app| {
            let state = app.state::<AppState>();
            let data_dir = app.path().app_data_dir()?;
            state.attach_config_store(Box::new(JsonConfigStore::in_dir(data_dir)))?;
            commands::cards::watch_index(app.handle(), &state)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Card stack commands
            commands::cards::list_cards,
            commands::cards::stack_pan,
            commands::cards::stack_tick,
            commands::cards::stack_set_focus,
            commands::cards::stack_select_card,
            // Card-issuance bridge commands
            commands::bridge::open_card_bridge,
            commands::bridge::bridge_post_message,
            commands::bridge::bridge_navigation_state,
            commands::bridge::bridge_back,
            commands::bridge::bridge_load_failed,
            commands::bridge::bridge_retry,
            commands::bridge::bridge_close,
            // Payment flow commands
            commands::payment::payment_scan,
            commands::payment::amount_key,
            commands::payment::amount_confirm,
            commands::payment::bank_select,
            commands::payment::pin_key,
            commands::payment::payment_back,
            commands::payment::payment_finish,
            commands::payment::payment_screen,
            // Settings commands
            commands::settings::get_settings,
            commands::settings::toggle_theme,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
