//! PIN entry screen
//!
//! Demo authentication only: the PIN is fixed and checked locally. A
//! mismatch shows an inline error and clears the buffer; there is no
//! attempt limit.

use serde::Serialize;

use crate::amount::format_amount;
use crate::domain::PaymentDraft;
use crate::ports::{Clock, TransactionIdSource};

use super::dispatch::{FlowCommand, Route};
use super::params::{self, RouteParams};

pub const PIN_LENGTH: usize = 4;
const DEMO_PIN: &str = "0000";
pub const INCORRECT_PIN_MESSAGE: &str = "Incorrect PIN. Please try again.";
/// Format of the `date` route parameter, e.g. "18 Oct 2026, 02:30 PM"
pub const RECEIPT_DATE_FORMAT: &str = "%d %b %Y, %I:%M %p";

/// Result of one key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinStatus {
    /// Waiting for more digits (or the key was ignored)
    Pending,
    /// Wrong PIN; buffer cleared and inline error set
    Rejected,
    Accepted(FlowCommand),
}

#[derive(Debug, Clone)]
pub struct PinScreen {
    draft: PaymentDraft,
    entered: String,
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinView {
    pub recipient_name: String,
    pub amount_display: String,
    /// How many PIN dots are filled
    pub filled: usize,
    pub pin_length: usize,
    pub error: Option<String>,
}

impl PinScreen {
    pub fn from_params(params: &RouteParams) -> Self {
        Self {
            draft: PaymentDraft::from_params(params),
            entered: String::new(),
            error: None,
        }
    }

    pub fn filled(&self) -> usize {
        self.entered.len()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn press_digit(
        &mut self,
        digit: u8,
        clock: &dyn Clock,
        ids: &mut dyn TransactionIdSource,
    ) -> PinStatus {
        if digit > 9 || self.entered.len() >= PIN_LENGTH {
            return PinStatus::Pending;
        }
        self.error = None;
        self.entered.push(char::from(b'0' + digit));
        if self.entered.len() < PIN_LENGTH {
            return PinStatus::Pending;
        }

        let verified = self.entered == DEMO_PIN;
        self.entered.clear();
        if !verified {
            log::info!("PIN rejected");
            self.error = Some(INCORRECT_PIN_MESSAGE.to_string());
            return PinStatus::Rejected;
        }

        let transaction_id = ids.next_transaction_id();
        let date = clock.now().format(RECEIPT_DATE_FORMAT).to_string();
        log::info!("PIN verified, transaction {transaction_id}");
        let route_params = self
            .draft
            .to_params()
            .with(params::TRANSACTION_ID, transaction_id)
            .with(params::DATE, date);
        PinStatus::Accepted(FlowCommand::navigate(Route::Success, route_params))
    }

    pub fn backspace(&mut self) -> bool {
        self.entered.pop().is_some()
    }

    pub fn view(&self) -> PinView {
        PinView {
            recipient_name: self.draft.recipient_name.clone(),
            amount_display: format_amount(&self.draft.amount),
            filled: self.entered.len(),
            pin_length: PIN_LENGTH,
            error: self.error.clone(),
        }
    }
}
