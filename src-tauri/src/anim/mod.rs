//! Animation primitives
//!
//! Framework-independent stand-ins for the reactive "shared values" a UI
//! toolkit would provide: continuous values that animate when ticked by a
//! frame clock, and observable cells that notify only on settle.
//!
//! - `easing`: timing curves
//! - `interpolate`: piecewise-linear range mapping with clamping
//! - `value`: `AnimatedValue` (timing and spring animations)
//! - `signal`: `Signal<T>` (settle-only change notification)

pub mod easing;
pub mod interpolate;
pub mod signal;
pub mod value;

pub use easing::Easing;
pub use interpolate::{interpolate, lerp, Extrapolation};
pub use signal::{Signal, SubscriptionId};
pub use value::{AnimatedValue, SpringConfig};
