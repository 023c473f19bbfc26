//! Header titles for screens inside the hosted card-issuance app

/// Shown before the app reports a screen, and for unknown screen keys
pub const DEFAULT_TITLE: &str = "Add Card";

/// Single source of truth for screen key ↔ title mapping.
pub const SCREEN_TITLES: &[(&str, &str)] = &[
    ("card-type", "Choose Card Type"),
    ("card-details", "Card Details"),
    ("personal-details", "Personal Details"),
    ("kyc", "Verify Identity"),
    ("otp", "Verify OTP"),
    ("review", "Review & Confirm"),
    ("success", "Card Added"),
];

pub fn title_for_screen(screen: &str) -> &'static str {
    SCREEN_TITLES
        .iter()
        .find(|(key, _)| *key == screen)
        .map(|(_, title)| *title)
        .unwrap_or(DEFAULT_TITLE)
}
