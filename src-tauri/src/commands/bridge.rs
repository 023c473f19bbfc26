//! Card-issuance bridge commands
//!
//! The web view itself lives in the frontend. It relays every
//! `postMessage` and navigation change here and performs whatever
//! `BridgeAction` comes back. When a session ends, the outcome is emitted
//! once as `card-bridge-complete`.

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};

use crate::bridge::{BridgeAction, BridgeOutcome, BridgeRequest, BridgeSession, BridgeView};
use crate::state::AppState;

/// Returned by `open_card_bridge`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeOpened {
    pub url: String,
    pub view: BridgeView,
}

/// Run `f` on the open session, then publish any outcome it produced
fn with_session<T>(
    app: &AppHandle,
    state: &State<AppState>,
    f: impl FnOnce(&mut BridgeSession) -> T,
) -> Result<T, String> {
    let result = state.with_bridge(f).map_err(|e| e.to_string())?;
    emit_outcomes(app, state)?;
    Ok(result)
}

fn emit_outcomes(app: &AppHandle, state: &AppState) -> Result<(), String> {
    for outcome in state.take_bridge_outcomes().map_err(|e| e.to_string())? {
        let _ = app.emit("card-bridge-complete", outcome);
    }
    Ok(())
}

#[tauri::command]
pub fn open_card_bridge(
    app: AppHandle,
    state: State<AppState>,
    request: BridgeRequest,
) -> Result<BridgeOpened, String> {
    let url = state.open_bridge(request).map_err(|e| e.to_string())?;
    // A replaced session reports its cancellation now
    emit_outcomes(&app, &state)?;
    let view = state
        .with_bridge(|s| s.view().clone())
        .map_err(|e| e.to_string())?;
    Ok(BridgeOpened {
        url: url.to_string(),
        view,
    })
}

#[tauri::command]
pub fn bridge_post_message(
    app: AppHandle,
    state: State<AppState>,
    message: String,
) -> Result<Option<BridgeAction>, String> {
    with_session(&app, &state, |s| s.handle_raw(&message))
}

#[tauri::command]
pub fn bridge_navigation_state(
    app: AppHandle,
    state: State<AppState>,
    can_go_back: bool,
) -> Result<BridgeView, String> {
    with_session(&app, &state, |s| {
        s.set_can_go_back(can_go_back);
        s.view().clone()
    })
}

#[tauri::command]
pub fn bridge_back(app: AppHandle, state: State<AppState>) -> Result<Option<BridgeAction>, String> {
    with_session(&app, &state, BridgeSession::back)
}

#[tauri::command]
pub fn bridge_load_failed(
    app: AppHandle,
    state: State<AppState>,
    reason: String,
) -> Result<BridgeView, String> {
    with_session(&app, &state, |s| {
        s.load_failed(&reason);
        s.view().clone()
    })
}

#[tauri::command]
pub fn bridge_retry(app: AppHandle, state: State<AppState>) -> Result<Option<BridgeAction>, String> {
    with_session(&app, &state, BridgeSession::retry)
}

/// Close button in the native header
#[tauri::command]
pub fn bridge_close(app: AppHandle, state: State<AppState>) -> Result<bool, String> {
    with_session(&app, &state, |s| s.close_with(BridgeOutcome::Cancelled))
}
