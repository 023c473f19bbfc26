//! Payment amounts
//!
//! - `format`: grouped-digit display text (Indian lakh/crore grouping)
//! - `words`: spoken-word rendering for the amount screen
//! - `input`: keypad editing of the raw amount string

pub mod format;
pub mod input;
pub mod words;

pub use format::format_amount;
pub use input::{AmountInput, AmountKey};
pub use words::amount_in_words;

use std::fmt;

use serde::Serialize;

use crate::domain::{WalletError, WalletResult};

/// Largest single payment, in rupees
pub const MAX_AMOUNT_RUPEES: u64 = 1_000_000;

const PAISE_PER_RUPEE: u64 = 100;

/// A validated amount, held in paise
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Amount {
    paise: u64,
}

impl Amount {
    pub fn from_paise(paise: u64) -> Self {
        Self { paise }
    }

    pub fn paise(&self) -> u64 {
        self.paise
    }

    pub fn rupees(&self) -> u64 {
        self.paise / PAISE_PER_RUPEE
    }

    /// Paise beyond the whole rupees (0-99)
    pub fn fraction(&self) -> u64 {
        self.paise % PAISE_PER_RUPEE
    }

    /// Ungrouped decimal text, as carried in route parameters ("1500", "12.50")
    pub fn to_plain_string(&self) -> String {
        if self.fraction() == 0 {
            self.rupees().to_string()
        } else {
            format!("{}.{:02}", self.rupees(), self.fraction())
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rupees = format::group_indian(&self.rupees().to_string());
        if self.fraction() == 0 {
            write!(f, "₹{rupees}")
        } else {
            write!(f, "₹{rupees}.{:02}", self.fraction())
        }
    }
}

/// Split a plain decimal string into whole and fractional digit runs.
/// Accepts digits with at most one '.', and at most two fractional digits.
pub(crate) fn split_decimal(raw: &str) -> Option<(&str, &str)> {
    let (whole, frac) = match raw.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (raw, ""),
    };
    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !digits(whole) || !digits(frac) || frac.len() > 2 {
        return None;
    }
    Some((whole, frac))
}

/// Paise value of a plain decimal string, with grouping commas ignored.
/// No range checks; `None` when it is not a number.
pub(crate) fn parse_amount_lenient(raw: &str) -> Option<u64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let (whole, frac) = split_decimal(&cleaned)?;

    let whole_rupees: u64 = if whole.is_empty() {
        0
    } else {
        // Anything too long for u64 is far beyond the cap anyway
        whole.parse().unwrap_or(u64::MAX / PAISE_PER_RUPEE)
    };
    let frac_paise: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().unwrap_or(0) * 10,
        _ => frac.parse().unwrap_or(0),
    };

    Some(
        whole_rupees
            .saturating_mul(PAISE_PER_RUPEE)
            .saturating_add(frac_paise),
    )
}

/// Parse and validate a user-entered amount.
///
/// Grouping commas are ignored. The amount must be positive and at most
/// `MAX_AMOUNT_RUPEES`.
pub fn parse_amount(raw: &str) -> WalletResult<Amount> {
    if raw.trim().is_empty() {
        return Err(WalletError::Amount("Please enter an amount".into()));
    }
    let paise = parse_amount_lenient(raw)
        .ok_or_else(|| WalletError::Amount(format!("'{raw}' is not a valid amount")))?;

    if paise == 0 {
        return Err(WalletError::Amount("Amount must be greater than zero".into()));
    }
    if paise > MAX_AMOUNT_RUPEES * PAISE_PER_RUPEE {
        return Err(WalletError::Amount(format!(
            "Amount cannot exceed ₹{}",
            format::group_indian(&MAX_AMOUNT_RUPEES.to_string())
        )));
    }
    Ok(Amount::from_paise(paise))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_is_enforced_exactly_at_the_boundary() {
        assert_eq!(parse_amount("1000000").unwrap().rupees(), 1_000_000);
        assert!(parse_amount("1000001").is_err());
        assert!(parse_amount("1000000.01").is_err());
        assert!(parse_amount("1500000").is_err());
        assert!(parse_amount("150000").is_ok());
    }

    #[test]
    fn zero_and_empty_are_rejected() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("0.00").is_err());
        assert!(parse_amount("   ").is_err());
    }

    #[test]
    fn decimals_become_paise() {
        assert_eq!(parse_amount("12.5").unwrap().paise(), 1250);
        assert_eq!(parse_amount("12.05").unwrap().paise(), 1205);
        assert_eq!(parse_amount(".5").unwrap().paise(), 50);
        assert_eq!(parse_amount("1,50,000").unwrap().rupees(), 150_000);
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(parse_amount("12.345").is_err());
        assert!(parse_amount("1.2.3").is_err());
        assert!(parse_amount("12a").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("99999999999999999999999").is_err());
    }

    #[test]
    fn display_uses_rupee_sign_and_grouping() {
        assert_eq!(Amount::from_paise(15_000_000).to_string(), "₹1,50,000");
        assert_eq!(Amount::from_paise(123_405).to_string(), "₹1,234.05");
    }

    #[test]
    fn plain_string_drops_zero_paise() {
        assert_eq!(parse_amount("1500.").unwrap().to_plain_string(), "1500");
        assert_eq!(parse_amount("12.5").unwrap().to_plain_string(), "12.50");
    }
}
