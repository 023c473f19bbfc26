//! Settings commands

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};

use crate::domain::{ThemeMode, WalletConfig};
use crate::state::AppState;

/// Payload for the `theme-changed` event
#[derive(Clone, Serialize)]
struct ThemeChangedPayload {
    mode: ThemeMode,
}

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> Result<WalletConfig, String> {
    let config = state
        .config
        .lock()
        .map_err(|_| "Config state corrupted".to_string())?;
    Ok(config.clone())
}

#[tauri::command]
pub fn toggle_theme(app: AppHandle, state: State<AppState>) -> Result<ThemeMode, String> {
    let mode = state.toggle_theme().map_err(|e| e.to_string())?;
    let _ = app.emit("theme-changed", ThemeChangedPayload { mode });
    Ok(mode)
}
