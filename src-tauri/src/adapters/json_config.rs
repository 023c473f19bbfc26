//! JSON file settings store
//!
//! Keeps the wallet configuration as pretty-printed JSON in one file,
//! normally `<app data dir>/settings.json`.

use std::path::{Path, PathBuf};

use crate::domain::{WalletConfig, WalletError, WalletResult};
use crate::ports::ConfigStore;

pub const SETTINGS_FILE: &str = "settings.json";

pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Store `settings.json` inside `dir` (created on first save)
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> WalletResult<WalletConfig> {
        if !self.path.exists() {
            log::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(WalletConfig::default());
        }
        let json = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| {
            WalletError::Config(format!("Failed to parse {}: {e}", self.path.display()))
        })
    }

    fn save(&self, config: &WalletConfig) -> WalletResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| WalletError::Config(format!("Serialization error: {e}")))?;
        std::fs::write(&self.path, json)?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemeMode;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::in_dir(dir.path());
        assert_eq!(store.load().unwrap(), WalletConfig::default());
    }

    #[test]
    fn save_then_load_keeps_changes() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::in_dir(dir.path().join("nested"));
        let mut config = WalletConfig::default();
        config.theme = ThemeMode::Dark;
        config.bridge.env = Some("staging".into());
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn corrupt_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::in_dir(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(WalletError::Config(_))));
    }
}
