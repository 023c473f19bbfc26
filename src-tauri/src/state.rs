//! Application state
//!
//! Everything the shell commands share, each piece behind its own Mutex.
//! Nothing in here knows about Tauri, so integration tests drive it
//! directly.

use std::sync::{Mutex, MutexGuard};

use crossbeam_channel::{unbounded, Receiver, Sender};
use url::Url;

use crate::adapters::{DemoWallet, RandomTransactionIds, SystemClock};
use crate::bridge::{BridgeOutcome, BridgeRequest, BridgeSession};
use crate::domain::{
    Bank, Card, ThemeContext, ThemeMode, WalletConfig, WalletError, WalletResult,
};
use crate::flow::PaymentFlow;
use crate::ports::ConfigStore;
use crate::stack::CardStack;

/// Lock `mutex`, turning poisoning into a `WalletError::State`
pub fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> WalletResult<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| WalletError::State(format!("{what} state corrupted")))
}

/// Shared application state managed by Tauri
pub struct AppState {
    pub config: Mutex<WalletConfig>,
    pub theme: Mutex<ThemeContext>,
    pub stack: Mutex<CardStack>,
    /// The open card-issuance bridge, if any
    pub bridge: Mutex<Option<BridgeSession>>,
    pub payment: Mutex<PaymentFlow>,
    config_store: Mutex<Option<Box<dyn ConfigStore>>>,
    outcome_tx: Sender<BridgeOutcome>,
    outcome_rx: Receiver<BridgeOutcome>,
}

impl AppState {
    pub fn new(cards: Vec<Card>, banks: Vec<Bank>, config: WalletConfig) -> Self {
        let payment = PaymentFlow::new(
            banks,
            Box::new(SystemClock),
            Box::new(RandomTransactionIds),
        );
        Self::with_payment_flow(cards, payment, config)
    }

    /// Build around an already assembled payment flow (fixed clocks and
    /// ids in tests)
    pub fn with_payment_flow(cards: Vec<Card>, payment: PaymentFlow, config: WalletConfig) -> Self {
        let (outcome_tx, outcome_rx) = unbounded();
        Self {
            theme: Mutex::new(ThemeContext::new(config.theme)),
            stack: Mutex::new(CardStack::new(cards, config.display.clone().into())),
            config: Mutex::new(config),
            bridge: Mutex::new(None),
            payment: Mutex::new(payment),
            config_store: Mutex::new(None),
            outcome_tx,
            outcome_rx,
        }
    }

    /// Startup state: demo contents when POCKETPAY_DEMO=1, otherwise an
    /// empty wallet. Environment overrides are applied to the config.
    pub fn from_env() -> Self {
        let config = WalletConfig::default().with_env_overrides();
        if DemoWallet::enabled() {
            Self::new(DemoWallet::cards(), DemoWallet::banks(), config)
        } else {
            Self::new(Vec::new(), Vec::new(), config)
        }
    }

    /// Load saved settings from `store` and keep it for later saves
    pub fn attach_config_store(&self, store: Box<dyn ConfigStore>) -> WalletResult<()> {
        let loaded = store.load()?.with_env_overrides();
        *lock(&self.theme, "Theme")? = ThemeContext::new(loaded.theme);
        lock(&self.stack, "Card stack")?.set_screen_width(loaded.display.screen_width);
        *lock(&self.config, "Config")? = loaded;
        *lock(&self.config_store, "Config store")? = Some(store);
        log::info!("Settings loaded");
        Ok(())
    }

    fn save_config(&self) -> WalletResult<()> {
        let config = lock(&self.config, "Config")?.clone();
        match lock(&self.config_store, "Config store")?.as_ref() {
            Some(store) => store.save(&config),
            None => Ok(()),
        }
    }

    pub fn toggle_theme(&self) -> WalletResult<ThemeMode> {
        let mode = lock(&self.theme, "Theme")?.toggle();
        lock(&self.config, "Config")?.theme = mode;
        self.save_config()?;
        Ok(mode)
    }

    /// Open the card-issuance bridge, replacing (and cancelling) any open one
    pub fn open_bridge(&self, request: BridgeRequest) -> WalletResult<Url> {
        let params = request.into_params(&lock(&self.config, "Config")?.bridge);
        let tx = self.outcome_tx.clone();
        let session = BridgeSession::new(&params, move |outcome| {
            // Receiver lives as long as AppState
            let _ = tx.send(outcome);
        })?;
        let url = session.url().clone();
        lock(&self.bridge, "Bridge")?.replace(session);
        Ok(url)
    }

    /// Run `f` against the open bridge session
    pub fn with_bridge<R>(&self, f: impl FnOnce(&mut BridgeSession) -> R) -> WalletResult<R> {
        let mut slot = lock(&self.bridge, "Bridge")?;
        let session = slot
            .as_mut()
            .ok_or_else(|| WalletError::Bridge("No card bridge is open".into()))?;
        Ok(f(session))
    }

    /// Collect finished bridge outcomes. Closed sessions are released and
    /// newly added cards join the stack.
    pub fn take_bridge_outcomes(&self) -> WalletResult<Vec<BridgeOutcome>> {
        {
            let mut slot = lock(&self.bridge, "Bridge")?;
            if slot.as_ref().is_some_and(BridgeSession::is_closed) {
                *slot = None;
            }
        }

        let outcomes: Vec<BridgeOutcome> = self.outcome_rx.try_iter().collect();
        for outcome in &outcomes {
            if let BridgeOutcome::Success(added) = outcome {
                lock(&self.stack, "Card stack")?.add_card(Card::from(added));
            }
        }
        Ok(outcomes)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), WalletConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonConfigStore;
    use crate::bridge::{BridgeEventKind, BridgeMessage, CardAddedData};
    use crate::domain::CardType;

    fn request() -> BridgeRequest {
        BridgeRequest {
            user_token: "tok".into(),
            ..BridgeRequest::default()
        }
    }

    #[test]
    fn default_state_is_empty() {
        let state = AppState::default();
        assert!(state.stack.lock().unwrap().is_empty());
        assert!(state.bridge.lock().unwrap().is_none());
        assert!(state.take_bridge_outcomes().unwrap().is_empty());
    }

    #[test]
    fn card_added_joins_the_stack() {
        let state = AppState::default();
        state.open_bridge(request()).unwrap();
        let added = CardAddedData {
            card_id: "new".into(),
            card_type: CardType::Credit,
            last_four_digits: "1111".into(),
        };
        let msg = BridgeMessage::new(BridgeEventKind::CardAdded).with_data(&added);
        state.with_bridge(|s| s.handle(&msg)).unwrap();

        let outcomes = state.take_bridge_outcomes().unwrap();
        assert_eq!(outcomes, vec![BridgeOutcome::Success(added)]);
        assert!(state.bridge.lock().unwrap().is_none());
        assert_eq!(state.stack.lock().unwrap().len(), 1);
    }

    #[test]
    fn reopening_cancels_the_previous_bridge() {
        let state = AppState::default();
        state.open_bridge(request()).unwrap();
        state.open_bridge(request()).unwrap();
        assert_eq!(
            state.take_bridge_outcomes().unwrap(),
            vec![BridgeOutcome::Cancelled]
        );
        assert!(state.bridge.lock().unwrap().is_some());
    }

    #[test]
    fn theme_toggle_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::default();
        state
            .attach_config_store(Box::new(JsonConfigStore::in_dir(dir.path())))
            .unwrap();
        assert_eq!(state.toggle_theme().unwrap(), ThemeMode::Dark);

        let saved = JsonConfigStore::in_dir(dir.path()).load().unwrap();
        assert_eq!(saved.theme, ThemeMode::Dark);
    }

    #[test]
    fn with_bridge_requires_an_open_session() {
        let state = AppState::default();
        assert!(matches!(
            state.with_bridge(|s| s.is_closed()),
            Err(WalletError::Bridge(_))
        ));
    }
}
