//! Per-card layout
//!
//! Everything here is a pure function of a `StackFrameState` snapshot so
//! it can be evaluated every frame and tested without the engine.

use serde::Serialize;

use crate::anim::{interpolate, lerp, Extrapolation};

/// Cards at or beyond this depth are not rendered
pub const VISIBLE_CARDS: usize = 15;
/// Drag distance (px) that commits a swipe
pub const SWIPE_THRESHOLD: f32 = 120.0;
/// Release speed (px/s) that commits a swipe regardless of distance
pub const VELOCITY_THRESHOLD: f32 = 1500.0;
/// Scale lost per position behind the front card
pub const SCALE_STEP: f32 = 0.05;
/// Vertical offset (px) per position behind the front card
pub const OFFSET_STEP: f32 = -35.0;
/// Front card tilt at `2 * SWIPE_THRESHOLD` of leftward drag
pub const MAX_ROTATION_DEG: f32 = -12.0;
pub const MIN_FRONT_OPACITY: f32 = 0.8;
/// Maximum lift (px) of dimmed cards in focus mode
pub const FOCUS_LIFT: f32 = 120.0;
/// Front card shrink at full focus
pub const FOCUS_SHRINK: f32 = 0.10;
/// Index distance from the selection beyond which a card is dimmed
pub const FOCUS_DISTANCE_THRESHOLD: f32 = 0.5;

/// Rendered properties of one card for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub z_index: i32,
    /// Whether this card receives gestures
    pub interactive: bool,
}

impl CardTransform {
    pub fn hidden() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotation_deg: 0.0,
            opacity: 0.0,
            z_index: 0,
            interactive: false,
        }
    }
}

/// The animated values a frame is computed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackFrameState {
    pub count: usize,
    pub current_index: usize,
    pub translation_x: f32,
    pub stack_progress: f32,
    pub is_animating_back: bool,
    pub slide_back_x: f32,
    pub screen_width: f32,
    pub focus_progress: f32,
    pub selected_index: f32,
}

/// Circular distance of card `index` behind the front card
pub fn stack_position(index: usize, current_index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let raw = index as i64 - current_index as i64;
    let n = count as i64;
    (((raw % n) + n) % n) as usize
}

pub fn resting_scale(position: f32) -> f32 {
    1.0 - position * SCALE_STEP
}

pub fn resting_offset_y(position: f32) -> f32 {
    position * OFFSET_STEP
}

/// Shortest distance between two (possibly fractional) indices on a ring of `count`
pub fn circular_distance(a: f32, b: f32, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let n = count as f32;
    let d = (a - b).abs() % n;
    d.min(n - d)
}

/// How far the cards behind the front have moved toward their next slot, in [0, 1]
fn forward_blend(state: &StackFrameState) -> f32 {
    if state.is_animating_back {
        if state.screen_width <= 0.0 {
            return 0.0;
        }
        (state.slide_back_x / -state.screen_width).clamp(0.0, 1.0)
    } else {
        state.stack_progress.clamp(0.0, 1.0)
    }
}

/// Tilt and fade of the front card for a given horizontal offset
fn front_tilt(translate_x: f32) -> (f32, f32) {
    let range = [-2.0 * SWIPE_THRESHOLD, 0.0];
    let rotation = interpolate(translate_x, &range, &[MAX_ROTATION_DEG, 0.0], Extrapolation::Clamp);
    let opacity = interpolate(translate_x, &range, &[MIN_FRONT_OPACITY, 1.0], Extrapolation::Clamp);
    (rotation, opacity)
}

/// Compute the transform of card `index` for the given frame
pub fn card_transform(index: usize, state: &StackFrameState) -> CardTransform {
    if state.count == 0 || index >= state.count {
        return CardTransform::hidden();
    }

    let position = stack_position(index, state.current_index, state.count);
    if position >= VISIBLE_CARDS {
        return CardTransform::hidden();
    }

    let mut t = if position == 0 {
        // Rightward drags never move the front card; recede is handled by slide_back_x
        let translate_x = if state.is_animating_back {
            state.slide_back_x
        } else {
            state.translation_x.min(0.0)
        };
        let (rotation_deg, opacity) = front_tilt(translate_x);
        CardTransform {
            translate_x,
            translate_y: 0.0,
            scale: 1.0,
            rotation_deg,
            opacity,
            z_index: 0,
            interactive: true,
        }
    } else {
        let slot = position as f32;
        let target = slot - 1.0;
        let blend = forward_blend(state);
        CardTransform {
            translate_x: 0.0,
            translate_y: lerp(resting_offset_y(slot), resting_offset_y(target), blend),
            scale: lerp(resting_scale(slot), resting_scale(target), blend),
            rotation_deg: 0.0,
            opacity: 1.0,
            z_index: 0,
            interactive: false,
        }
    };
    t.z_index = (state.count - position) as i32;

    let focus = state.focus_progress.clamp(0.0, 1.0);
    if focus > 0.0 {
        let distance = circular_distance(index as f32, state.selected_index, state.count);
        if distance > FOCUS_DISTANCE_THRESHOLD {
            let proximity = (1.0 - (distance - 1.0) / VISIBLE_CARDS as f32).clamp(0.0, 1.0);
            t.opacity *= 1.0 - focus;
            t.translate_y -= FOCUS_LIFT * focus * proximity;
        }
        if position == 0 {
            t.scale *= 1.0 - FOCUS_SHRINK * focus;
        }
    }

    t
}
