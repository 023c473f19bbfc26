//! QR payment flow commands
//!
//! Every command answers with the visible screen. Whenever the route
//! changes, `payment-route` is emitted with the new route and its
//! parameters so the frontend navigator can follow.

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};

use crate::amount::AmountKey;
use crate::domain::{WalletError, WalletResult};
use crate::flow::navigator::ScreenView;
use crate::flow::{PaymentFlow, Route, RouteParams};
use crate::state::AppState;

/// Payload for the `payment-route` event
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentRoutePayload {
    route: Route,
    params: RouteParams,
}

fn with_flow<T>(
    app: &AppHandle,
    state: &State<AppState>,
    f: impl FnOnce(&mut PaymentFlow) -> WalletResult<T>,
) -> Result<ScreenView, String> {
    let mut flow = state
        .payment
        .lock()
        .map_err(|_| "Payment state corrupted".to_string())?;
    let before = (flow.route(), flow.depth());
    let result = f(&mut *flow);

    if (flow.route(), flow.depth()) != before {
        let _ = app.emit(
            "payment-route",
            PaymentRoutePayload {
                route: flow.route(),
                params: flow.params().cloned().unwrap_or_default(),
            },
        );
    }

    match result {
        // Shown inline on the amount screen
        Ok(_) | Err(WalletError::Amount(_)) => Ok(flow.view()),
        Err(e) => Err(e.to_string()),
    }
}

/// The camera decoded a QR code
#[tauri::command]
pub fn payment_scan(app: AppHandle, state: State<AppState>, payload: String) -> Result<ScreenView, String> {
    with_flow(&app, &state, |f| f.scan(&payload))
}

/// Keypad press on the amount screen: "0"-"9", "." or "backspace"
#[tauri::command]
pub fn amount_key(app: AppHandle, state: State<AppState>, key: String) -> Result<ScreenView, String> {
    let key = AmountKey::parse(&key).ok_or_else(|| format!("Unknown key '{key}'"))?;
    with_flow(&app, &state, |f| f.amount_key(key))
}

#[tauri::command]
pub fn amount_confirm(
    app: AppHandle,
    state: State<AppState>,
    message: Option<String>,
) -> Result<ScreenView, String> {
    with_flow(&app, &state, |f| {
        if let Some(message) = &message {
            f.set_message(message)?;
        }
        f.confirm_amount()
    })
}

#[tauri::command]
pub fn bank_select(app: AppHandle, state: State<AppState>, bank_id: String) -> Result<ScreenView, String> {
    with_flow(&app, &state, |f| f.select_bank(&bank_id))
}

/// PIN pad press: a digit or "backspace"
#[tauri::command]
pub fn pin_key(app: AppHandle, state: State<AppState>, key: String) -> Result<ScreenView, String> {
    if key == "backspace" || key == "⌫" {
        return with_flow(&app, &state, |f| f.pin_backspace());
    }
    let digit = match key.as_bytes() {
        [d @ b'0'..=b'9'] => d - b'0',
        _ => return Err(format!("Unknown key '{key}'")),
    };
    with_flow(&app, &state, |f| f.pin_digit(digit))
}

#[tauri::command]
pub fn payment_back(app: AppHandle, state: State<AppState>) -> Result<ScreenView, String> {
    with_flow(&app, &state, |f| f.back())
}

#[tauri::command]
pub fn payment_finish(app: AppHandle, state: State<AppState>) -> Result<ScreenView, String> {
    with_flow(&app, &state, |f| f.done())
}

#[tauri::command]
pub fn payment_screen(state: State<AppState>) -> Result<ScreenView, String> {
    let flow = state
        .payment
        .lock()
        .map_err(|_| "Payment state corrupted".to_string())?;
    Ok(flow.view())
}
