//! String route parameters

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::PaymentDraft;

pub const AMOUNT: &str = "amount";
pub const MESSAGE: &str = "message";
pub const BANK_ID: &str = "bankId";
pub const RECIPIENT_NAME: &str = "recipientName";
pub const UPI_ID: &str = "upiId";
pub const TRANSACTION_ID: &str = "transactionId";
pub const DATE: &str = "date";

/// Route parameters as a navigation stack passes them: string keys to string values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value for `key`, or "" when absent
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PaymentDraft {
    pub fn from_params(params: &RouteParams) -> Self {
        Self {
            amount: params.get_or_empty(AMOUNT).to_string(),
            message: params.get_or_empty(MESSAGE).to_string(),
            bank_id: params.get_or_empty(BANK_ID).to_string(),
            recipient_name: params.get_or_empty(RECIPIENT_NAME).to_string(),
            upi_id: params.get_or_empty(UPI_ID).to_string(),
        }
    }

    /// Encode as route parameters. Empty fields are left out.
    pub fn to_params(&self) -> RouteParams {
        let mut params = RouteParams::new();
        for (key, value) in [
            (AMOUNT, &self.amount),
            (MESSAGE, &self.message),
            (BANK_ID, &self.bank_id),
            (RECIPIENT_NAME, &self.recipient_name),
            (UPI_ID, &self.upi_id),
        ] {
            if !value.is_empty() {
                params.set(key, value.clone());
            }
        }
        params
    }
}
