//! Port traits (interfaces)
//!
//! These traits define the boundaries between the core and the outside
//! world: wall-clock time, transaction id generation and settings storage.
//! Adapters implement them; tests substitute fixed versions.

pub mod clock;
pub mod config_store;
pub mod ids;

pub use clock::*;
pub use config_store::*;
pub use ids::*;
