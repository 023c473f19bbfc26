//! Bank selection screen

use serde::Serialize;

use crate::amount::format_amount;
use crate::domain::{Bank, PaymentDraft, WalletError, WalletResult};

use super::dispatch::{FlowCommand, Route};
use super::params::RouteParams;

#[derive(Debug, Clone)]
pub struct BankScreen {
    draft: PaymentDraft,
    banks: Vec<Bank>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankView {
    pub recipient_name: String,
    pub amount_display: String,
    pub banks: Vec<Bank>,
}

impl BankScreen {
    pub fn new(params: &RouteParams, banks: Vec<Bank>) -> Self {
        Self {
            draft: PaymentDraft::from_params(params),
            banks,
        }
    }

    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    /// Pay from `bank_id` and continue to PIN entry
    pub fn select(&self, bank_id: &str) -> WalletResult<FlowCommand> {
        let bank = self
            .banks
            .iter()
            .find(|b| b.id == bank_id)
            .ok_or_else(|| WalletError::Flow(format!("Unknown bank '{bank_id}'")))?;
        log::debug!("Paying from {}", bank.name);

        let draft = PaymentDraft {
            bank_id: bank.id.clone(),
            ..self.draft.clone()
        };
        Ok(FlowCommand::navigate(Route::PinEntry, draft.to_params()))
    }

    pub fn view(&self) -> BankView {
        BankView {
            recipient_name: self.draft.recipient_name.clone(),
            amount_display: format_amount(&self.draft.amount),
            banks: self.banks.clone(),
        }
    }
}
