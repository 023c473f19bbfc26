//! Keypad editing of the raw amount string

use serde::{Deserialize, Serialize};

use super::{amount_in_words, format_amount};

/// Whole-rupee digits accepted by the keypad (enough to type past the cap)
const MAX_WHOLE_DIGITS: usize = 7;
const MAX_FRACTION_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum AmountKey {
    Digit(u8),
    Decimal,
    Backspace,
}

impl AmountKey {
    /// Parse a keypad label: "0"-"9", "." or "backspace"
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "." => Some(AmountKey::Decimal),
            "backspace" | "⌫" => Some(AmountKey::Backspace),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| AmountKey::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }
}

/// Raw amount as typed on the keypad
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountInput {
    raw: String,
}

impl AmountInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing raw value (e.g. an amount encoded in a QR code).
    /// Keys are replayed so the result obeys the same editing rules.
    pub fn from_raw(raw: &str) -> Self {
        let mut input = Self::new();
        for c in raw.chars() {
            if let Some(key) = AmountKey::parse(&c.to_string()) {
                input.press(key);
            }
        }
        input
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn display(&self) -> String {
        format_amount(&self.raw)
    }

    pub fn words(&self) -> String {
        if self.raw.is_empty() {
            return String::new();
        }
        amount_in_words(&self.raw)
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Apply a key. Returns false when the key was refused.
    pub fn press(&mut self, key: AmountKey) -> bool {
        match key {
            AmountKey::Digit(d) if d <= 9 => self.push_digit(d),
            AmountKey::Digit(_) => false,
            AmountKey::Decimal => {
                if self.raw.contains('.') {
                    return false;
                }
                if self.raw.is_empty() {
                    self.raw.push('0');
                }
                self.raw.push('.');
                true
            }
            AmountKey::Backspace => self.raw.pop().is_some(),
        }
    }

    fn push_digit(&mut self, d: u8) -> bool {
        let c = char::from(b'0' + d);
        match self.raw.split_once('.') {
            Some((_, frac)) => {
                if frac.len() >= MAX_FRACTION_DIGITS {
                    return false;
                }
            }
            None => {
                if self.raw == "0" {
                    // Replace a lone leading zero rather than growing "00"
                    self.raw.clear();
                } else if self.raw.len() >= MAX_WHOLE_DIGITS {
                    return false;
                }
            }
        }
        self.raw.push(c);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> AmountInput {
        AmountInput::from_raw(keys)
    }

    #[test]
    fn digits_accumulate_and_display_grouped() {
        let input = typed("150000");
        assert_eq!(input.raw(), "150000");
        assert_eq!(input.display(), "1,50,000");
        assert_eq!(input.words(), "One Lakh Fifty Thousand Rupees Only");
    }

    #[test]
    fn leading_zero_is_replaced() {
        assert_eq!(typed("007").raw(), "7");
        assert_eq!(typed("0.5").raw(), "0.5");
    }

    #[test]
    fn only_one_decimal_point_and_two_fraction_digits() {
        let mut input = typed("12.345");
        assert_eq!(input.raw(), "12.34");
        assert!(!input.press(AmountKey::Decimal));
        assert!(!input.press(AmountKey::Digit(9)));
    }

    #[test]
    fn decimal_first_gets_a_leading_zero() {
        assert_eq!(typed(".5").raw(), "0.5");
    }

    #[test]
    fn whole_part_is_limited_to_seven_digits() {
        let input = typed("123456789");
        assert_eq!(input.raw(), "1234567");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut input = typed("12.");
        assert!(input.press(AmountKey::Backspace));
        assert_eq!(input.raw(), "12");
        input.clear();
        assert!(!input.press(AmountKey::Backspace));
        assert_eq!(input.words(), "");
        assert_eq!(input.display(), "0");
    }

    #[test]
    fn key_labels_parse() {
        assert_eq!(AmountKey::parse("7"), Some(AmountKey::Digit(7)));
        assert_eq!(AmountKey::parse("."), Some(AmountKey::Decimal));
        assert_eq!(AmountKey::parse("backspace"), Some(AmountKey::Backspace));
        assert_eq!(AmountKey::parse("12"), None);
        assert_eq!(AmountKey::parse("x"), None);
        assert!(!AmountInput::new().press(AmountKey::Digit(12)));
    }
}
