//! Card-issuance bridge
//!
//! The card-issuance flow is a hosted web app loaded in an embedded web
//! view. The two sides talk with JSON `postMessage` envelopes. This module
//! separates the concerns of that conversation:
//! - `message`: the envelope types and the permissive inbound parser (pure)
//! - `url`: building the hosted app URL (pure)
//! - `titles`: screen key to header title lookup
//! - `session`: one open bridge, its view state and its single completion

pub mod message;
pub mod session;
pub mod titles;
pub mod url;

pub use message::{
    action_for, parse_message, BridgeAction, BridgeErrorInfo, BridgeEventKind, BridgeMessage,
    BridgeOutcome, BridgePayload, CardAddedData, NavigationData, BRIDGE_MESSAGE_TYPE,
};
pub use session::{BridgeSession, BridgeView, InlineError};
pub use titles::{title_for_screen, DEFAULT_TITLE};
pub use self::url::{build_url, BridgeRequest, BridgeUrlParams};
