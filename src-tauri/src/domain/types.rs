//! Core domain types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a payment card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of payment instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Debit,
    Credit,
    Prepaid,
    Gift,
}

impl CardType {
    /// Wire name, as used in bridge payloads and URL parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Debit => "debit",
            CardType::Credit => "credit",
            CardType::Prepaid => "prepaid",
            CardType::Gift => "gift",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One payment instrument. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    /// Asset key of the card artwork
    pub image: String,
    pub name: String,
    /// e.g. "•••• 4821"
    pub masked_number: String,
    pub card_type: CardType,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        masked_number: impl Into<String>,
        card_type: CardType,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: CardId::new(id),
            image: image.into(),
            name: name.into(),
            masked_number: masked_number.into(),
            card_type,
        }
    }
}

/// A bank account the user can pay from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub id: String,
    pub name: String,
    /// Masked account number shown under the bank name
    pub account_hint: String,
}

/// Transient payment state carried across the QR payment screens.
///
/// Empty strings stand for "not chosen yet"; the draft is rebuilt from
/// route parameters on every screen and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub amount: String,
    pub message: String,
    pub bank_id: String,
    pub recipient_name: String,
    pub upi_id: String,
}
