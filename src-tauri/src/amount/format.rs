//! Grouped-digit display text

use super::split_decimal;

/// Group a run of digits the Indian way: last three, then pairs.
/// "150000" -> "1,50,000", "12345678" -> "1,23,45,678"
pub fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, last3) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{last3}", groups.join(","))
}

/// Render a raw numeric amount string for display.
///
/// Leading zeros are dropped, the fractional part is kept as typed (so
/// "12." shows while the user is mid-entry), and empty input shows "0".
/// Anything that is not a plain decimal number is returned unchanged.
pub fn format_amount(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "0".to_string();
    }
    let Some((whole, frac)) = split_decimal(raw) else {
        return raw.to_string();
    };

    let trimmed = whole.trim_start_matches('0');
    let whole = if trimmed.is_empty() { "0" } else { trimmed };
    let grouped = group_indian(whole);

    if raw.contains('.') {
        format!("{grouped}.{frac}")
    } else {
        grouped
    }
}
