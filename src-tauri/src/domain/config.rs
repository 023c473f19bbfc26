//! Wallet configuration
//!
//! Persisted as JSON through the `ConfigStore` port. Every field has a
//! default so an older or partial settings file still loads.

use serde::{Deserialize, Serialize};

use super::ThemeMode;

/// Environment variable overriding the hosted card-issuance app URL
pub const PWA_URL_ENV: &str = "POCKETPAY_PWA_URL";
/// Environment variable overriding the hosted app environment tag
pub const PWA_ENV_ENV: &str = "POCKETPAY_PWA_ENV";

fn default_pwa_base_url() -> String {
    "https://instacard.example.com/".to_string()
}

fn default_screen_width() -> f32 {
    390.0
}

/// Where the card-issuance web app lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    #[serde(default = "default_pwa_base_url")]
    pub pwa_base_url: String,
    /// Environment tag forwarded as `env` (e.g. "staging")
    #[serde(default)]
    pub env: Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            pwa_base_url: default_pwa_base_url(),
            env: None,
        }
    }
}

/// Geometry the card stack animates against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Logical screen width in px
    #[serde(default = "default_screen_width")]
    pub screen_width: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width: default_screen_width(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub bridge: BridgeConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub theme: ThemeMode,
}

impl WalletConfig {
    /// Apply `POCKETPAY_PWA_URL` / `POCKETPAY_PWA_ENV` from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(std::env::var(PWA_URL_ENV).ok(), std::env::var(PWA_ENV_ENV).ok())
    }

    /// Replace the bridge URL and environment tag when given. Blank values are ignored.
    pub fn with_overrides(mut self, pwa_url: Option<String>, env: Option<String>) -> Self {
        if let Some(url) = pwa_url.filter(|u| !u.trim().is_empty()) {
            log::info!("Using PWA base URL override: {url}");
            self.bridge.pwa_base_url = url;
        }
        if let Some(env) = env.filter(|e| !e.trim().is_empty()) {
            self.bridge.env = Some(env);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = WalletConfig::default();
        assert_eq!(config.bridge.pwa_base_url, "https://instacard.example.com/");
        assert_eq!(config.bridge.env, None);
        assert_eq!(config.display.screen_width, 390.0);
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: WalletConfig = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.display.screen_width, 390.0);
    }

    #[test]
    fn overrides_replace_bridge_settings() {
        let config = WalletConfig::default().with_overrides(
            Some("https://staging.example.com/app/".into()),
            Some("staging".into()),
        );
        assert_eq!(config.bridge.pwa_base_url, "https://staging.example.com/app/");
        assert_eq!(config.bridge.env.as_deref(), Some("staging"));
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = WalletConfig::default().with_overrides(Some("  ".into()), Some(String::new()));
        assert_eq!(config, WalletConfig::default());
    }
}
