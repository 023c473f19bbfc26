//! Adapters (implementations of the port traits)
//!
//! - `system_clock` - local wall clock via chrono, plus a fixed clock
//! - `random_ids` - `TXN` transaction ids from rand
//! - `json_config` - settings.json persistence
//! - `demo_wallet` - demo cards and banks for development builds

pub mod demo_wallet;
pub mod json_config;
pub mod random_ids;
pub mod system_clock;

pub use demo_wallet::DemoWallet;
pub use json_config::JsonConfigStore;
pub use random_ids::{RandomTransactionIds, SequentialTransactionIds};
pub use system_clock::{FixedClock, SystemClock};
