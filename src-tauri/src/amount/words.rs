//! Spoken-word rendering ("One Lakh Fifty Thousand Rupees Only")

use super::parse_amount_lenient;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

fn below_hundred(n: u64) -> String {
    let n = n as usize;
    if n < 20 {
        ONES[n].to_string()
    } else if n % 10 == 0 {
        TENS[n / 10].to_string()
    } else {
        format!("{} {}", TENS[n / 10], ONES[n % 10])
    }
}

/// Words for a whole number using the crore / lakh / thousand / hundred scale
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let crore = n / 10_000_000;
    let lakh = (n / 100_000) % 100;
    let thousand = (n / 1_000) % 100;
    let hundred = (n / 100) % 10;
    let rest = n % 100;

    if crore > 0 {
        parts.push(format!("{} Crore", number_to_words(crore)));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", below_hundred(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", below_hundred(thousand)));
    }
    if hundred > 0 {
        parts.push(format!("{} Hundred", ONES[hundred as usize]));
    }
    if rest > 0 {
        parts.push(below_hundred(rest));
    }
    parts.join(" ")
}

/// Spoken form of a raw amount string. Empty for input that is not a number.
pub fn amount_in_words(raw: &str) -> String {
    let Some(paise) = parse_amount_lenient(raw) else {
        return String::new();
    };
    let rupees = paise / 100;
    let fraction = paise % 100;

    let unit = if rupees == 1 { "Rupee" } else { "Rupees" };
    let mut words = format!("{} {unit}", number_to_words(rupees));
    if fraction > 0 {
        words.push_str(&format!(" and {} Paise", number_to_words(fraction)));
    }
    words.push_str(" Only");
    words
}
