//! Bridge message envelope
//!
//! Wire shape:
//! `{"type":"INSTACARD_EVENT","payload":{"event":...,"data"?:{...},"error"?:{"code","message"}}}`
//!
//! The web view forwards every `postMessage` it sees, including traffic
//! that has nothing to do with us, so parsing is permissive: anything that
//! is not valid JSON carrying our discriminator yields `None`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{Card, CardType};

use super::titles::{title_for_screen, DEFAULT_TITLE};

/// Top-level `type` every bridge message carries
pub const BRIDGE_MESSAGE_TYPE: &str = "INSTACARD_EVENT";

pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";
pub const INVALID_PAYLOAD_CODE: &str = "INVALID_PAYLOAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BridgeEventKind {
    Ready,
    CardAdded,
    CardAdditionFailed,
    UserCancelled,
    OtpRequested,
    OtpVerified,
    Navigation,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeErrorInfo {
    pub code: String,
    pub message: String,
}

impl BridgeErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ERROR_CODE, UNKNOWN_ERROR_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgePayload {
    pub event: BridgeEventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// An error object missing fields or of the wrong type reads as absent
    #[serde(
        default,
        deserialize_with = "lenient_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<BridgeErrorInfo>,
}

fn lenient_error<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<BridgeErrorInfo>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub payload: BridgePayload,
}

/// `data` of a `CARD_ADDED` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAddedData {
    pub card_id: String,
    pub card_type: CardType,
    pub last_four_digits: String,
}

impl From<&CardAddedData> for Card {
    fn from(added: &CardAddedData) -> Self {
        let kind = added.card_type.as_str();
        let mut name = kind[..1].to_ascii_uppercase();
        name.push_str(&kind[1..]);
        name.push_str(" Card");
        Card::new(
            added.card_id.clone(),
            name,
            format!("•••• {}", added.last_four_digits),
            added.card_type,
            format!("card_{kind}"),
        )
    }
}

/// `data` of `READY` / `NAVIGATION` events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationData {
    pub screen: String,
}

impl BridgeMessage {
    pub fn new(event: BridgeEventKind) -> Self {
        Self {
            message_type: BRIDGE_MESSAGE_TYPE.to_string(),
            payload: BridgePayload {
                event,
                data: None,
                error: None,
            },
        }
    }

    pub fn with_data(mut self, data: impl Serialize) -> Self {
        self.payload.data = serde_json::to_value(data).ok();
        self
    }

    pub fn with_error(mut self, error: BridgeErrorInfo) -> Self {
        self.payload.error = Some(error);
        self
    }

    pub fn event(&self) -> BridgeEventKind {
        self.payload.event
    }

    pub fn to_json(&self) -> String {
        // Only strings, enums and JSON values inside: serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Typed view of `data`, if present and shaped like `T`
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.payload
            .data
            .as_ref()
            .and_then(|data| serde_json::from_value(data.clone()).ok())
    }
}

/// Parse an inbound web view message. Returns `None` for anything that is
/// not JSON, lacks our `type` discriminator, or has an unknown shape.
pub fn parse_message(raw: &str) -> Option<BridgeMessage> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Dropping non-JSON web view message: {e}");
            return None;
        }
    };

    if value.get("type").and_then(Value::as_str) != Some(BRIDGE_MESSAGE_TYPE) {
        log::debug!("Dropping unrelated web view message");
        return None;
    }

    match serde_json::from_value(value) {
        Ok(message) => Some(message),
        Err(e) => {
            log::debug!("Dropping malformed bridge message: {e}");
            None
        }
    }
}

/// How a bridge session ended. Reported exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
pub enum BridgeOutcome {
    Success(CardAddedData),
    Failure(BridgeErrorInfo),
    Cancelled,
}

/// What the native shell should do in response to bridge traffic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum BridgeAction {
    /// Hide the loading indicator and show `title`
    ShowContent { title: String },
    SetTitle { title: String },
    /// Dismiss the bridge and report the outcome
    Close { outcome: BridgeOutcome },
    /// Keep the bridge open with an inline error and retry button
    ShowError { error: BridgeErrorInfo },
    /// Navigate back inside the web content's own history
    GoBackInContent,
    /// Reload the hosted content
    Reload { url: String },
    /// Event understood, nothing for the shell to do
    Acknowledge { event: BridgeEventKind },
}

fn screen_title(message: &BridgeMessage) -> String {
    message
        .data_as::<NavigationData>()
        .map(|nav| title_for_screen(&nav.screen))
        .unwrap_or(DEFAULT_TITLE)
        .to_string()
}

/// Map an inbound message to its shell action. Pure; exhaustive over events.
pub fn action_for(message: &BridgeMessage) -> BridgeAction {
    match message.event() {
        BridgeEventKind::Ready => BridgeAction::ShowContent {
            title: screen_title(message),
        },
        BridgeEventKind::Navigation => BridgeAction::SetTitle {
            title: screen_title(message),
        },
        BridgeEventKind::CardAdded => {
            let outcome = match message.data_as::<CardAddedData>() {
                Some(card) => BridgeOutcome::Success(card),
                None => BridgeOutcome::Failure(BridgeErrorInfo::new(
                    INVALID_PAYLOAD_CODE,
                    "Card added but card details were missing",
                )),
            };
            BridgeAction::Close { outcome }
        }
        BridgeEventKind::CardAdditionFailed => BridgeAction::Close {
            outcome: BridgeOutcome::Failure(
                message
                    .payload
                    .error
                    .clone()
                    .unwrap_or_else(BridgeErrorInfo::unknown),
            ),
        },
        BridgeEventKind::UserCancelled => BridgeAction::Close {
            outcome: BridgeOutcome::Cancelled,
        },
        BridgeEventKind::Error => BridgeAction::ShowError {
            error: message
                .payload
                .error
                .clone()
                .unwrap_or_else(BridgeErrorInfo::unknown),
        },
        event @ (BridgeEventKind::OtpRequested | BridgeEventKind::OtpVerified) => {
            BridgeAction::Acknowledge { event }
        }
    }
}
