//! Core domain types
//!
//! Pure types with no I/O dependencies. These represent the core concepts
//! of the wallet: cards, banks, payment drafts, configuration and theme.

pub mod config;
pub mod error;
pub mod theme;
pub mod types;

pub use config::*;
pub use error::*;
pub use theme::*;
pub use types::*;
