//! Pan gesture handling
//!
//! The platform's pan recognizer is reduced to four events. The machine
//! moves `Idle -> Dragging -> Settling -> Idle`; while a committed swipe
//! (advance or recede) is settling, new gestures are refused.

use serde::{Deserialize, Serialize};

use super::position::{SWIPE_THRESHOLD, VELOCITY_THRESHOLD};

/// Pan lifecycle as reported by the platform gesture recognizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PanEvent {
    Begin,
    Update {
        #[serde(rename = "translationX")]
        translation_x: f32,
        #[serde(rename = "velocityX", default)]
        velocity_x: f32,
    },
    End {
        #[serde(rename = "translationX")]
        translation_x: f32,
        #[serde(rename = "velocityX", default)]
        velocity_x: f32,
    },
    /// The recognizer gave up (e.g. another gesture took over)
    Cancel,
}

/// What a released drag turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Release {
    /// Fling the front card away and bring up the next one
    Advance,
    /// Bring the previous card back in from the left
    Recede,
    /// Not far or fast enough: return to rest
    SnapBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "release", rename_all = "camelCase")]
pub enum GesturePhase {
    Idle,
    Dragging,
    Settling(Release),
}

/// Decide the outcome of a drag released at `translation_x` (px) moving at `velocity_x` (px/s)
pub fn resolve_release(translation_x: f32, velocity_x: f32, card_count: usize) -> Release {
    if card_count <= 1 {
        return Release::SnapBack;
    }
    if translation_x < -SWIPE_THRESHOLD || velocity_x < -VELOCITY_THRESHOLD {
        Release::Advance
    } else if translation_x > SWIPE_THRESHOLD || velocity_x > VELOCITY_THRESHOLD {
        Release::Recede
    } else {
        Release::SnapBack
    }
}

/// Fraction of a leftward drag across the screen, in [0, 1]
pub fn drag_progress(translation_x: f32, screen_width: f32) -> f32 {
    if screen_width <= 0.0 {
        return 0.0;
    }
    (-translation_x.min(0.0) / screen_width).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct GestureMachine {
    phase: GesturePhase,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self {
            phase: GesturePhase::Idle,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Re-entrancy guard: true while a committed swipe is still animating
    pub fn is_swiping(&self) -> bool {
        matches!(
            self.phase,
            GesturePhase::Settling(Release::Advance) | GesturePhase::Settling(Release::Recede)
        )
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Start a drag. Refused while a swipe is in flight; a snap-back may be interrupted.
    pub fn begin(&mut self) -> bool {
        if self.is_swiping() || self.is_dragging() {
            return false;
        }
        self.phase = GesturePhase::Dragging;
        true
    }

    /// Leave `Dragging` for `Settling(release)`. Ignored unless dragging.
    pub fn release(&mut self, release: Release) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.phase = GesturePhase::Settling(release);
        true
    }

    /// Settle animation complete (or abandoned)
    pub fn finish(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new()
    }
}
