//! Demo wallet contents for development builds.
//!
//! Activate by setting POCKETPAY_DEMO=1 in the environment:
//!
//!   POCKETPAY_DEMO=1 RUST_LOG=pocketpay_lib=info npm run tauri dev
//!
//! Without it the wallet starts empty and cards arrive through the
//! card-issuance bridge.

use crate::domain::{Bank, Card, CardType};

pub const DEMO_ENV: &str = "POCKETPAY_DEMO";

pub struct DemoWallet;

impl DemoWallet {
    pub fn enabled() -> bool {
        std::env::var(DEMO_ENV).is_ok_and(|v| v == "1")
    }

    pub fn cards() -> Vec<Card> {
        let cards = vec![
            Card::new("demo-debit", "Everyday Debit", "•••• 4821", CardType::Debit, "card_indigo"),
            Card::new("demo-credit", "Rewards Credit", "•••• 7710", CardType::Credit, "card_onyx"),
            Card::new("demo-prepaid", "Travel Prepaid", "•••• 3056", CardType::Prepaid, "card_teal"),
            Card::new("demo-gift", "Festive Gift Card", "•••• 9034", CardType::Gift, "card_gold"),
        ];
        log::info!("[DEMO WALLET] Loaded {} cards", cards.len());
        cards
    }

    pub fn banks() -> Vec<Bank> {
        let banks = vec![
            Bank {
                id: "sbi".into(),
                name: "State Bank of India".into(),
                account_hint: "XXXX 2231".into(),
            },
            Bank {
                id: "hdfc".into(),
                name: "HDFC Bank".into(),
                account_hint: "XXXX 8802".into(),
            },
            Bank {
                id: "icici".into(),
                name: "ICICI Bank".into(),
                account_hint: "XXXX 1457".into(),
            },
        ];
        log::info!("[DEMO WALLET] Loaded {} banks", banks.len());
        banks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_card_ids_are_unique() {
        let cards = DemoWallet::cards();
        let ids: HashSet<_> = cards.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn demo_banks_cover_every_card_type_flow() {
        assert!(!DemoWallet::banks().is_empty());
        let types: HashSet<_> = DemoWallet::cards().iter().map(|c| c.card_type).collect();
        assert_eq!(types.len(), 4);
    }
}
