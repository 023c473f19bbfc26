//! Settings persistence port

use crate::domain::{WalletConfig, WalletResult};

/// Loads and saves the wallet configuration
pub trait ConfigStore: Send {
    /// Load the saved configuration, or defaults if nothing was saved yet
    fn load(&self) -> WalletResult<WalletConfig>;

    fn save(&self, config: &WalletConfig) -> WalletResult<()>;
}
