//! BridgeSession: one open card-issuance web view.
//!
//! Tracks what the native chrome around the web view shows (spinner,
//! title, inline error) and owns the completion callback. The callback is
//! an `FnOnce` taken out of an `Option` on first use, so the owner hears
//! about the outcome exactly once; anything arriving after that is ignored.

use serde::Serialize;
use url::Url;

use crate::domain::WalletResult;

use super::message::{action_for, parse_message, BridgeAction, BridgeMessage, BridgeOutcome};
use super::titles::DEFAULT_TITLE;
use super::url::{build_url, BridgeUrlParams};

/// Error panel shown over the web view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineError {
    pub message: String,
    pub retryable: bool,
}

/// Native chrome state around the web view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeView {
    pub loading: bool,
    pub title: String,
    pub error: Option<InlineError>,
    /// Whether the web content has history to go back through
    pub can_go_back: bool,
    pub closed: bool,
}

type Completion = Box<dyn FnOnce(BridgeOutcome) + Send>;

pub struct BridgeSession {
    url: Url,
    view: BridgeView,
    on_complete: Option<Completion>,
}

impl BridgeSession {
    /// Open a session for the hosted app described by `params`.
    /// `on_complete` runs once, when the session ends for any reason.
    pub fn new(
        params: &BridgeUrlParams,
        on_complete: impl FnOnce(BridgeOutcome) + Send + 'static,
    ) -> WalletResult<Self> {
        let url = build_url(params)?;
        log::info!("Opening card bridge at {}{}", url.origin().ascii_serialization(), url.path());
        Ok(Self {
            url,
            view: BridgeView {
                loading: true,
                title: DEFAULT_TITLE.to_string(),
                error: None,
                can_go_back: false,
                closed: false,
            },
            on_complete: Some(Box::new(on_complete)),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn view(&self) -> &BridgeView {
        &self.view
    }

    pub fn is_closed(&self) -> bool {
        self.on_complete.is_none()
    }

    /// Handle a raw `postMessage` string. Unrelated or malformed traffic yields `None`.
    pub fn handle_raw(&mut self, raw: &str) -> Option<BridgeAction> {
        let message = parse_message(raw)?;
        self.handle(&message)
    }

    /// Apply a parsed message. Returns `None` once the session is closed.
    pub fn handle(&mut self, message: &BridgeMessage) -> Option<BridgeAction> {
        if self.is_closed() {
            log::debug!("Bridge closed, ignoring {:?}", message.event());
            return None;
        }

        let action = action_for(message);
        match &action {
            BridgeAction::ShowContent { title } => {
                self.view.loading = false;
                self.view.error = None;
                self.view.title = title.clone();
            }
            BridgeAction::SetTitle { title } => {
                self.view.title = title.clone();
            }
            BridgeAction::Close { outcome } => {
                self.complete(outcome.clone());
            }
            BridgeAction::ShowError { error } => {
                log::warn!("Card bridge reported error {}: {}", error.code, error.message);
                self.view.loading = false;
                self.view.error = Some(InlineError {
                    message: error.message.clone(),
                    retryable: true,
                });
            }
            BridgeAction::Acknowledge { event } => {
                log::debug!("Card bridge event {event:?}");
            }
            BridgeAction::GoBackInContent | BridgeAction::Reload { .. } => {}
        }
        Some(action)
    }

    /// Web view navigation state changed
    pub fn set_can_go_back(&mut self, can_go_back: bool) {
        self.view.can_go_back = can_go_back;
    }

    /// Back button / gesture: walk the web content's history first, cancel once it is exhausted.
    pub fn back(&mut self) -> Option<BridgeAction> {
        if self.is_closed() {
            return None;
        }
        if self.view.can_go_back {
            return Some(BridgeAction::GoBackInContent);
        }
        self.complete(BridgeOutcome::Cancelled);
        Some(BridgeAction::Close {
            outcome: BridgeOutcome::Cancelled,
        })
    }

    /// The hosted content failed to load
    pub fn load_failed(&mut self, reason: &str) {
        if self.is_closed() {
            return;
        }
        log::warn!("Card bridge failed to load: {reason}");
        self.view.loading = false;
        self.view.error = Some(InlineError {
            message: reason.to_string(),
            retryable: true,
        });
    }

    /// Retry after an inline error: reload the same URL
    pub fn retry(&mut self) -> Option<BridgeAction> {
        if self.is_closed() {
            return None;
        }
        self.view.error = None;
        self.view.loading = true;
        Some(BridgeAction::Reload {
            url: self.url.to_string(),
        })
    }

    /// End the session from the shell side (e.g. the close button).
    /// Returns false if it had already ended.
    pub fn close_with(&mut self, outcome: BridgeOutcome) -> bool {
        self.complete(outcome)
    }

    fn complete(&mut self, outcome: BridgeOutcome) -> bool {
        let Some(on_complete) = self.on_complete.take() else {
            return false;
        };
        log::info!("Card bridge finished: {outcome:?}");
        self.view.closed = true;
        self.view.loading = false;
        on_complete(outcome);
        true
    }
}

impl Drop for BridgeSession {
    fn drop(&mut self) {
        // Torn down without an outcome (e.g. screen unmounted): that is a cancel
        if self.complete(BridgeOutcome::Cancelled) {
            log::debug!("Card bridge dropped while open");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::message::{BridgeErrorInfo, BridgeEventKind, CardAddedData, NavigationData};
    use crate::domain::CardType;
    use std::sync::{Arc, Mutex};

    fn open() -> (BridgeSession, Arc<Mutex<Vec<BridgeOutcome>>>) {
        let outcomes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&outcomes);
        let session = BridgeSession::new(&BridgeUrlParams::new("https://x/", "t"), move |o| {
            sink.lock().unwrap().push(o)
        })
        .unwrap();
        (session, outcomes)
    }

    fn card_added() -> BridgeMessage {
        BridgeMessage::new(BridgeEventKind::CardAdded).with_data(CardAddedData {
            card_id: "ic_1".into(),
            card_type: CardType::Prepaid,
            last_four_digits: "1111".into(),
        })
    }

    #[test]
    fn starts_loading_with_default_title() {
        let (session, _) = open();
        assert!(session.view().loading);
        assert_eq!(session.view().title, DEFAULT_TITLE);
        assert_eq!(session.url().as_str(), "https://x/?token=t");
    }

    #[test]
    fn ready_clears_loading_and_sets_title() {
        let (mut session, _) = open();
        let ready = BridgeMessage::new(BridgeEventKind::Ready)
            .with_data(NavigationData { screen: "card-type".into() });
        session.handle(&ready);
        assert!(!session.view().loading);
        assert_eq!(session.view().title, "Choose Card Type");
    }

    #[test]
    fn completion_fires_exactly_once() {
        let (mut session, outcomes) = open();
        session.handle(&card_added());
        assert!(session.is_closed());
        assert!(session.handle(&card_added()).is_none());
        assert!(session.back().is_none());
        assert!(!session.close_with(BridgeOutcome::Cancelled));
        drop(session);
        assert_eq!(outcomes.lock().unwrap().len(), 1);
        assert!(matches!(outcomes.lock().unwrap()[0], BridgeOutcome::Success(_)));
    }

    #[test]
    fn error_event_keeps_session_open() {
        let (mut session, outcomes) = open();
        let err = BridgeMessage::new(BridgeEventKind::Error)
            .with_error(BridgeErrorInfo::new("NETWORK", "Network unavailable"));
        session.handle(&err);
        assert!(!session.is_closed());
        let inline = session.view().error.clone().unwrap();
        assert_eq!(inline.message, "Network unavailable");
        assert!(inline.retryable);
        assert!(outcomes.lock().unwrap().is_empty());
    }

    #[test]
    fn back_walks_history_before_cancelling() {
        let (mut session, outcomes) = open();
        session.set_can_go_back(true);
        assert_eq!(session.back(), Some(BridgeAction::GoBackInContent));
        assert!(outcomes.lock().unwrap().is_empty());

        session.set_can_go_back(false);
        assert_eq!(
            session.back(),
            Some(BridgeAction::Close {
                outcome: BridgeOutcome::Cancelled
            })
        );
        assert_eq!(*outcomes.lock().unwrap(), vec![BridgeOutcome::Cancelled]);
    }

    #[test]
    fn load_failure_then_retry_reloads_same_url() {
        let (mut session, _) = open();
        session.load_failed("net::ERR_INTERNET_DISCONNECTED");
        assert!(!session.view().loading);
        assert!(session.view().error.is_some());

        let action = session.retry().unwrap();
        assert_eq!(
            action,
            BridgeAction::Reload {
                url: "https://x/?token=t".into()
            }
        );
        assert!(session.view().loading);
        assert!(session.view().error.is_none());
    }

    #[test]
    fn unrelated_traffic_is_ignored() {
        let (mut session, outcomes) = open();
        assert!(session.handle_raw("hello").is_none());
        assert!(session.handle_raw(r#"{"type":"analytics"}"#).is_none());
        assert!(session.view().loading);
        assert!(outcomes.lock().unwrap().is_empty());
    }

    #[test]
    fn dropping_open_session_reports_cancel() {
        let (session, outcomes) = open();
        drop(session);
        assert_eq!(*outcomes.lock().unwrap(), vec![BridgeOutcome::Cancelled]);
    }
}
