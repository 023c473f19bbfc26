//! Payment flow navigator
//!
//! Owns the route stack for one QR payment. Screen handlers never touch
//! the stack directly: they return a `FlowCommand`, which goes through the
//! dispatcher channel and is applied by `pump()`.

use crossbeam_channel::Receiver;
use serde::Serialize;

use crate::amount::AmountKey;
use crate::domain::{Bank, WalletError, WalletResult};
use crate::ports::{Clock, TransactionIdSource};

use super::amount::{AmountScreen, AmountView};
use super::bank::{BankScreen, BankView};
use super::dispatch::{Dispatcher, FlowCommand, Route};
use super::params::RouteParams;
use super::pin::{PinScreen, PinStatus, PinView};
use super::receipt::Receipt;
use super::scan;

/// Screen model for one route stack entry
#[derive(Debug, Clone)]
pub enum Screen {
    Scan,
    Amount(AmountScreen),
    Bank(BankScreen),
    Pin(PinScreen),
    Success(Receipt),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Scan => Route::Scan,
            Screen::Amount(_) => Route::AmountEntry,
            Screen::Bank(_) => Route::BankSelection,
            Screen::Pin(_) => Route::PinEntry,
            Screen::Success(_) => Route::Success,
        }
    }
}

/// Serializable snapshot of the visible screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum ScreenView {
    Scan,
    Amount(AmountView),
    Bank(BankView),
    Pin(PinView),
    Success(Receipt),
}

#[derive(Debug)]
struct Entry {
    params: RouteParams,
    screen: Screen,
}

static ROOT: Screen = Screen::Scan;

pub struct PaymentFlow {
    banks: Vec<Bank>,
    clock: Box<dyn Clock>,
    ids: Box<dyn TransactionIdSource>,
    stack: Vec<Entry>,
    dispatcher: Dispatcher,
    commands: Receiver<FlowCommand>,
    last_receipt: Option<Receipt>,
}

impl PaymentFlow {
    pub fn new(
        banks: Vec<Bank>,
        clock: Box<dyn Clock>,
        ids: Box<dyn TransactionIdSource>,
    ) -> Self {
        let (dispatcher, commands) = Dispatcher::channel();
        Self {
            banks,
            clock,
            ids,
            stack: vec![Self::root()],
            dispatcher,
            commands,
            last_receipt: None,
        }
    }

    fn root() -> Entry {
        Entry {
            params: RouteParams::new(),
            screen: Screen::Scan,
        }
    }

    /// Sender for commands raised outside a screen handler (e.g. the
    /// hardware back button)
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    pub fn screen(&self) -> &Screen {
        self.stack.last().map_or(&ROOT, |e| &e.screen)
    }

    pub fn route(&self) -> Route {
        self.screen().route()
    }

    pub fn params(&self) -> Option<&RouteParams> {
        self.stack.last().map(|e| &e.params)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Receipt of the most recently finished payment
    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.last_receipt.as_ref()
    }

    pub fn view(&self) -> ScreenView {
        match self.screen() {
            Screen::Scan => ScreenView::Scan,
            Screen::Amount(s) => ScreenView::Amount(s.view()),
            Screen::Bank(s) => ScreenView::Bank(s.view()),
            Screen::Pin(s) => ScreenView::Pin(s.view()),
            Screen::Success(r) => ScreenView::Success(r.clone()),
        }
    }

    fn wrong_screen(&self, wanted: Route) -> WalletError {
        WalletError::Flow(format!("Expected {wanted:?} screen, showing {:?}", self.route()))
    }

    fn current_mut(&mut self) -> Option<&mut Screen> {
        self.stack.last_mut().map(|e| &mut e.screen)
    }

    /// A QR payload came back from the camera
    pub fn scan(&mut self, raw: &str) -> WalletResult<Route> {
        if !matches!(self.screen(), Screen::Scan) {
            return Err(self.wrong_screen(Route::Scan));
        }
        let command = scan::on_scanned(raw)?;
        self.dispatcher.dispatch(command)?;
        self.pump()
    }

    pub fn amount_key(&mut self, key: AmountKey) -> WalletResult<bool> {
        match self.current_mut() {
            Some(Screen::Amount(screen)) => Ok(screen.press(key)),
            _ => Err(self.wrong_screen(Route::AmountEntry)),
        }
    }

    pub fn set_message(&mut self, message: &str) -> WalletResult<()> {
        match self.current_mut() {
            Some(Screen::Amount(screen)) => {
                screen.set_message(message);
                Ok(())
            }
            _ => Err(self.wrong_screen(Route::AmountEntry)),
        }
    }

    /// "Proceed" on the amount screen. A rejected amount stays on screen
    /// as the inline error and is also returned.
    pub fn confirm_amount(&mut self) -> WalletResult<Route> {
        let command = match self.current_mut() {
            Some(Screen::Amount(screen)) => screen.confirm()?,
            _ => return Err(self.wrong_screen(Route::AmountEntry)),
        };
        self.dispatcher.dispatch(command)?;
        self.pump()
    }

    pub fn select_bank(&mut self, bank_id: &str) -> WalletResult<Route> {
        let command = match self.screen() {
            Screen::Bank(screen) => screen.select(bank_id)?,
            _ => return Err(self.wrong_screen(Route::BankSelection)),
        };
        self.dispatcher.dispatch(command)?;
        self.pump()
    }

    pub fn pin_digit(&mut self, digit: u8) -> WalletResult<PinStatus> {
        if self.route() != Route::PinEntry {
            return Err(self.wrong_screen(Route::PinEntry));
        }
        let Some(Entry {
            screen: Screen::Pin(screen),
            ..
        }) = self.stack.last_mut()
        else {
            return Ok(PinStatus::Pending);
        };
        let status = screen.press_digit(digit, self.clock.as_ref(), self.ids.as_mut());
        if let PinStatus::Accepted(command) = &status {
            self.dispatcher.dispatch(command.clone())?;
            self.pump()?;
        }
        Ok(status)
    }

    pub fn pin_backspace(&mut self) -> WalletResult<bool> {
        match self.current_mut() {
            Some(Screen::Pin(screen)) => Ok(screen.backspace()),
            _ => Err(self.wrong_screen(Route::PinEntry)),
        }
    }

    pub fn back(&mut self) -> WalletResult<Route> {
        self.dispatcher.dispatch(FlowCommand::Back)?;
        self.pump()
    }

    /// "Done" on the success screen, or abandoning the flow anywhere
    pub fn done(&mut self) -> WalletResult<Route> {
        let command = match self.screen() {
            Screen::Success(receipt) => receipt.done(),
            _ => FlowCommand::Finish,
        };
        self.dispatcher.dispatch(command)?;
        self.pump()
    }

    /// Apply every queued command, returning the route now showing
    pub fn pump(&mut self) -> WalletResult<Route> {
        while let Ok(command) = self.commands.try_recv() {
            self.apply(command)?;
        }
        Ok(self.route())
    }

    fn apply(&mut self, command: FlowCommand) -> WalletResult<()> {
        match command {
            FlowCommand::Navigate { route, params } => {
                let screen = self.build_screen(route, &params)?;
                log::debug!("Payment flow -> {route:?}");
                self.stack.push(Entry { params, screen });
            }
            FlowCommand::Back => {
                if self.stack.len() <= 1 || matches!(self.screen(), Screen::Success(_)) {
                    return self.apply(FlowCommand::Finish);
                }
                self.stack.pop();
                log::debug!("Payment flow back to {:?}", self.route());
            }
            FlowCommand::Finish => {
                if let Screen::Success(receipt) = self.screen() {
                    log::info!("Payment {} complete", receipt.transaction_id);
                    self.last_receipt = Some(receipt.clone());
                } else {
                    log::info!("Payment flow abandoned at {:?}", self.route());
                }
                self.stack.clear();
                self.stack.push(Self::root());
            }
        }
        Ok(())
    }

    fn build_screen(&self, route: Route, params: &RouteParams) -> WalletResult<Screen> {
        Ok(match route {
            Route::Scan => Screen::Scan,
            Route::AmountEntry => Screen::Amount(AmountScreen::from_params(params)),
            Route::BankSelection => Screen::Bank(BankScreen::new(params, self.banks.clone())),
            Route::PinEntry => Screen::Pin(PinScreen::from_params(params)),
            Route::Success => Screen::Success(Receipt::from_params(params)?),
        })
    }
}
