//! Tauri command handlers
//!
//! Thin wrappers over `AppState`: lock, call into the core, map errors
//! to String for IPC, emit events the frontend listens for.

pub mod bridge;
pub mod cards;
pub mod payment;
pub mod settings;
