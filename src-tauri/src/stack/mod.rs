//! Card-stack engine
//!
//! A deck of cards treated as a ring, with one front card. Horizontal
//! swipes advance (left) or recede (right) the ring; an external "focus"
//! signal dims every card but the selected one.
//!
//! - `position`: pure per-card layout math, no state
//! - `gesture`: pan events, the drag state machine and release resolution
//! - `engine`: `CardStack`, which owns the animated values and ties it together

pub mod engine;
pub mod gesture;
pub mod position;

pub use engine::{CardStack, StackConfig, StackFrame};
pub use gesture::{GestureMachine, GesturePhase, PanEvent, Release};
pub use position::{card_transform, stack_position, CardTransform, StackFrameState};
