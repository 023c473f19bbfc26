//! Card-issuance bridge integration tests
//!
//! Feed raw `postMessage` strings through `AppState` the way the web view
//! relays them, without a Tauri runtime.
//!
//! Run with: cargo test --test bridge_protocol

use pocketpay_lib::bridge::{
    build_url, parse_message, BridgeAction, BridgeEventKind, BridgeOutcome, BridgeRequest,
    BridgeUrlParams,
};
use pocketpay_lib::domain::{CardType, WalletConfig};
use pocketpay_lib::state::AppState;

fn state() -> AppState {
    AppState::new(Vec::new(), Vec::new(), WalletConfig::default())
}

fn open(state: &AppState) {
    state
        .open_bridge(BridgeRequest {
            user_token: "user-token".into(),
            card_type: Some(CardType::Gift),
            ..BridgeRequest::default()
        })
        .unwrap();
}

fn post(state: &AppState, raw: &str) -> Option<BridgeAction> {
    state.with_bridge(|s| s.handle_raw(raw)).unwrap()
}

// ---------------------------------------------------------------------------
// Envelope parsing and URL building
// ---------------------------------------------------------------------------

#[test]
fn parse_message_accepts_only_our_envelope() {
    let msg = parse_message(r#"{"type":"INSTACARD_EVENT","payload":{"event":"READY"}}"#).unwrap();
    assert_eq!(msg.event(), BridgeEventKind::Ready);
    assert!(parse_message("not json").is_none());
    assert!(parse_message(r#"{"type":"OTHER"}"#).is_none());
}

#[test]
fn url_params_are_optional() {
    let url = build_url(&BridgeUrlParams::new("https://x/", "t")).unwrap();
    assert!(url.as_str().contains("token=t"));
    assert!(!url.as_str().contains("cardType"));
    assert!(!url.as_str().contains("bankId"));

    let gift = BridgeUrlParams {
        card_type: Some(CardType::Gift),
        ..BridgeUrlParams::new("https://x/", "t")
    };
    assert!(build_url(&gift).unwrap().as_str().contains("cardType=gift"));
}

#[test]
fn bad_base_url_is_rejected_before_opening() {
    let mut config = WalletConfig::default();
    config.bridge.pwa_base_url = "not a url".into();
    let state = AppState::new(Vec::new(), Vec::new(), config);
    assert!(state.open_bridge(BridgeRequest::default()).is_err());
    assert!(state.bridge.lock().unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[test]
fn happy_path_adds_the_card() {
    let state = state();
    open(&state);

    let action = post(
        &state,
        r#"{"type":"INSTACARD_EVENT","payload":{"event":"READY","data":{"screen":"card-details"}}}"#,
    );
    assert_eq!(
        action,
        Some(BridgeAction::ShowContent {
            title: "Card Details".into()
        })
    );
    post(
        &state,
        r#"{"type":"INSTACARD_EVENT","payload":{"event":"NAVIGATION","data":{"screen":"otp"}}}"#,
    );
    let view = state.with_bridge(|s| s.view().clone()).unwrap();
    assert_eq!(view.title, "Verify OTP");
    assert!(!view.loading);

    let action = post(
        &state,
        r#"{"type":"INSTACARD_EVENT","payload":{"event":"OTP_VERIFIED"}}"#,
    );
    assert_eq!(
        action,
        Some(BridgeAction::Acknowledge {
            event: BridgeEventKind::OtpVerified
        })
    );

    post(
        &state,
        r#"{"type":"INSTACARD_EVENT","payload":{"event":"CARD_ADDED","data":{"cardId":"gc-9","cardType":"gift","lastFourDigits":"9876"}}}"#,
    );
    let outcomes = state.take_bridge_outcomes().unwrap();
    assert_eq!(outcomes.len(), 1);
    let BridgeOutcome::Success(added) = &outcomes[0] else {
        panic!("expected success, got {outcomes:?}");
    };
    assert_eq!(added.card_id, "gc-9");

    let stack = state.stack.lock().unwrap();
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.cards()[0].masked_number, "•••• 9876");
    drop(stack);
    assert!(state.bridge.lock().unwrap().is_none());
}

#[test]
fn noise_is_ignored() {
    let state = state();
    open(&state);
    assert_eq!(post(&state, "webpack-hmr ping"), None);
    assert_eq!(post(&state, r#"{"type":"analytics","event":"click"}"#), None);
    assert_eq!(
        post(&state, r#"{"type":"INSTACARD_EVENT","payload":{"event":"SOMETHING_NEW"}}"#),
        None
    );
    assert!(state.take_bridge_outcomes().unwrap().is_empty());
}

#[test]
fn addition_failure_without_error_uses_default() {
    let state = state();
    open(&state);
    post(
        &state,
        r#"{"type":"INSTACARD_EVENT","payload":{"event":"CARD_ADDITION_FAILED"}}"#,
    );
    let outcomes = state.take_bridge_outcomes().unwrap();
    let [BridgeOutcome::Failure(error)] = outcomes.as_slice() else {
        panic!("expected one failure, got {outcomes:?}");
    };
    assert_eq!(error.code, "UNKNOWN_ERROR");
    assert_eq!(error.message, "An unknown error occurred");
}

#[test]
fn card_added_without_details_is_a_failure() {
    let state = state();
    open(&state);
    post(&state, r#"{"type":"INSTACARD_EVENT","payload":{"event":"CARD_ADDED"}}"#);
    let outcomes = state.take_bridge_outcomes().unwrap();
    assert!(matches!(outcomes.as_slice(), [BridgeOutcome::Failure(_)]));
    assert!(state.stack.lock().unwrap().is_empty());
}

#[test]
fn outcome_is_reported_once_even_with_late_messages() {
    let state = state();
    open(&state);
    post(&state, r#"{"type":"INSTACARD_EVENT","payload":{"event":"USER_CANCELLED"}}"#);
    // Late traffic racing the close
    post(
        &state,
        r#"{"type":"INSTACARD_EVENT","payload":{"event":"CARD_ADDED","data":{"cardId":"x","cardType":"debit","lastFourDigits":"0000"}}}"#,
    );
    assert_eq!(
        state.take_bridge_outcomes().unwrap(),
        vec![BridgeOutcome::Cancelled]
    );
    assert!(state.take_bridge_outcomes().unwrap().is_empty());
    assert!(state.stack.lock().unwrap().is_empty());
}

#[test]
fn load_failure_and_retry() {
    let state = state();
    open(&state);
    state.with_bridge(|s| s.load_failed("net::ERR_INTERNET_DISCONNECTED")).unwrap();
    let view = state.with_bridge(|s| s.view().clone()).unwrap();
    assert!(view.error.is_some());
    assert!(!view.loading);

    let action = state.with_bridge(|s| s.retry()).unwrap();
    let Some(BridgeAction::Reload { url }) = action else {
        panic!("expected reload");
    };
    assert!(url.contains("token=user-token"));
    assert!(url.contains("cardType=gift"));
    let view = state.with_bridge(|s| s.view().clone()).unwrap();
    assert!(view.error.is_none());
    assert!(view.loading);
}

#[test]
fn back_with_history_stays_open() {
    let state = state();
    open(&state);
    state.with_bridge(|s| s.set_can_go_back(true)).unwrap();
    assert_eq!(
        state.with_bridge(|s| s.back()).unwrap(),
        Some(BridgeAction::GoBackInContent)
    );
    state.with_bridge(|s| s.set_can_go_back(false)).unwrap();
    state.with_bridge(|s| s.back()).unwrap();
    assert_eq!(
        state.take_bridge_outcomes().unwrap(),
        vec![BridgeOutcome::Cancelled]
    );
}

#[test]
fn outcomes_serialize_for_the_frontend() {
    let json = serde_json::to_value(BridgeOutcome::Cancelled).unwrap();
    assert_eq!(json["status"], "cancelled");
}
