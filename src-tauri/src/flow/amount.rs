//! Amount entry screen

use serde::Serialize;

use crate::amount::{parse_amount, AmountInput, AmountKey};
use crate::domain::{PaymentDraft, WalletError, WalletResult};

use super::dispatch::{FlowCommand, Route};
use super::params::RouteParams;

/// Longest note the payer can attach
pub const MAX_MESSAGE_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct AmountScreen {
    draft: PaymentDraft,
    input: AmountInput,
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountView {
    pub recipient_name: String,
    pub upi_id: String,
    pub amount: String,
    pub amount_display: String,
    pub amount_words: String,
    pub message: String,
    pub error: Option<String>,
}

impl AmountScreen {
    /// Build from the scan route; a merchant-fixed amount pre-fills the keypad
    pub fn from_params(params: &RouteParams) -> Self {
        let draft = PaymentDraft::from_params(params);
        let input = AmountInput::from_raw(&draft.amount);
        Self {
            draft,
            input,
            error: None,
        }
    }

    pub fn input(&self) -> &AmountInput {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn press(&mut self, key: AmountKey) -> bool {
        self.error = None;
        self.input.press(key)
    }

    /// Replace the note, truncated to `MAX_MESSAGE_CHARS`
    pub fn set_message(&mut self, message: &str) {
        self.draft.message = message.chars().take(MAX_MESSAGE_CHARS).collect();
    }

    /// Validate and move on to bank selection. On failure the reason is
    /// also kept as the inline error.
    pub fn confirm(&mut self) -> WalletResult<FlowCommand> {
        match parse_amount(self.input.raw()) {
            Ok(amount) => {
                self.error = None;
                let draft = PaymentDraft {
                    amount: amount.to_plain_string(),
                    ..self.draft.clone()
                };
                Ok(FlowCommand::navigate(Route::BankSelection, draft.to_params()))
            }
            Err(e) => {
                self.error = Some(match &e {
                    WalletError::Amount(reason) => reason.clone(),
                    other => other.to_string(),
                });
                Err(e)
            }
        }
    }

    pub fn view(&self) -> AmountView {
        AmountView {
            recipient_name: self.draft.recipient_name.clone(),
            upi_id: self.draft.upi_id.clone(),
            amount: self.input.raw().to_string(),
            amount_display: self.input.display(),
            amount_words: self.input.words(),
            message: self.draft.message.clone(),
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::params;

    fn screen_with(keys: &str) -> AmountScreen {
        let route = RouteParams::new()
            .with(params::UPI_ID, "ravi@upi")
            .with(params::RECIPIENT_NAME, "Ravi");
        let mut screen = AmountScreen::from_params(&route);
        for c in keys.chars() {
            screen.press(AmountKey::parse(&c.to_string()).unwrap());
        }
        screen
    }

    #[test]
    fn cap_accepted_at_boundary() {
        let mut screen = screen_with("1000000");
        let FlowCommand::Navigate { route, params: p } = screen.confirm().unwrap() else {
            panic!("expected navigate");
        };
        assert_eq!(route, Route::BankSelection);
        assert_eq!(p.get(params::AMOUNT), Some("1000000"));
        assert_eq!(p.get(params::UPI_ID), Some("ravi@upi"));
    }

    #[test]
    fn over_cap_sets_inline_error() {
        let mut screen = screen_with("1000001");
        assert!(screen.confirm().is_err());
        assert_eq!(screen.error(), Some("Amount cannot exceed ₹10,00,000"));
        screen.press(AmountKey::Backspace);
        assert_eq!(screen.error(), None);
    }

    #[test]
    fn empty_amount_is_rejected() {
        let mut screen = screen_with("");
        assert!(screen.confirm().is_err());
        assert_eq!(screen.error(), Some("Please enter an amount"));
    }

    #[test]
    fn prefilled_amount_from_qr() {
        let route = RouteParams::new().with(params::AMOUNT, "120.00");
        let screen = AmountScreen::from_params(&route);
        assert_eq!(screen.input().raw(), "120.00");
        assert_eq!(screen.view().amount_display, "120.00");
    }

    #[test]
    fn message_is_truncated_and_forwarded() {
        let mut screen = screen_with("250");
        screen.set_message(&"x".repeat(80));
        assert_eq!(screen.view().message.len(), MAX_MESSAGE_CHARS);
        let FlowCommand::Navigate { params: p, .. } = screen.confirm().unwrap() else {
            panic!("expected navigate");
        };
        assert_eq!(p.get(params::MESSAGE).map(str::len), Some(MAX_MESSAGE_CHARS));
    }
}
