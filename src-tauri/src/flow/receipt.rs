//! Success screen model

use serde::Serialize;

use crate::amount::{amount_in_words, format_amount};
use crate::domain::{PaymentDraft, WalletError, WalletResult};

use super::dispatch::FlowCommand;
use super::params::{self, RouteParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub amount: String,
    pub amount_display: String,
    pub amount_words: String,
    pub recipient_name: String,
    pub upi_id: String,
    pub bank_id: String,
    pub message: String,
    pub transaction_id: String,
    pub date: String,
}

impl Receipt {
    /// Rebuild the receipt from the success route parameters
    pub fn from_params(route_params: &RouteParams) -> WalletResult<Self> {
        let transaction_id = route_params
            .get(params::TRANSACTION_ID)
            .ok_or_else(|| WalletError::Flow("Success route without a transaction id".into()))?
            .to_string();
        let draft = PaymentDraft::from_params(route_params);
        Ok(Self {
            amount_display: format_amount(&draft.amount),
            amount_words: amount_in_words(&draft.amount),
            amount: draft.amount,
            recipient_name: draft.recipient_name,
            upi_id: draft.upi_id,
            bank_id: draft.bank_id,
            message: draft.message,
            transaction_id,
            date: route_params.get_or_empty(params::DATE).to_string(),
        })
    }

    /// "Done" button
    pub fn done(&self) -> FlowCommand {
        FlowCommand::Finish
    }
}
