//! Card stack commands
//!
//! The frontend forwards pan gestures and drives `stack_tick` from its
//! animation frame loop; every call answers with the transforms to draw.
//! Settled front-card changes are pushed as `card-index-changed`.

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};

use crate::domain::{Card, CardId, WalletResult};
use crate::stack::{CardStack, PanEvent, StackFrame};
use crate::state::{lock, AppState};

/// Payload for the `card-index-changed` event
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct CardIndexPayload {
    index: usize,
}

/// Forward settled index changes to the frontend. Called once from setup.
pub fn watch_index(app: &AppHandle, state: &AppState) -> WalletResult<()> {
    let app = app.clone();
    lock(&state.stack, "Card stack")?.subscribe_index(move |index| {
        let _ = app.emit("card-index-changed", CardIndexPayload { index: *index });
    });
    Ok(())
}

fn with_stack(state: &State<AppState>, f: impl FnOnce(&mut CardStack)) -> Result<StackFrame, String> {
    let mut stack = state
        .stack
        .lock()
        .map_err(|_| "Card stack state corrupted".to_string())?;
    f(&mut *stack);
    Ok(stack.frame())
}

#[tauri::command]
pub fn list_cards(state: State<AppState>) -> Result<Vec<Card>, String> {
    let stack = state
        .stack
        .lock()
        .map_err(|_| "Card stack state corrupted".to_string())?;
    Ok(stack.cards().to_vec())
}

#[tauri::command]
pub fn stack_pan(state: State<AppState>, event: PanEvent) -> Result<StackFrame, String> {
    with_stack(&state, |s| s.pan(event))
}

#[tauri::command]
pub fn stack_tick(state: State<AppState>, dt_ms: f32) -> Result<StackFrame, String> {
    with_stack(&state, |s| s.tick(dt_ms))
}

#[tauri::command]
pub fn stack_set_focus(state: State<AppState>, open: bool) -> Result<StackFrame, String> {
    with_stack(&state, |s| s.set_focus(open))
}

#[tauri::command]
pub fn stack_select_card(
    state: State<AppState>,
    card_id: Option<String>,
) -> Result<StackFrame, String> {
    let card_id = card_id.map(CardId::new);
    with_stack(&state, |s| s.select_card(card_id.as_ref()))
}
