//! CardStack: owns the deck and every animated value behind it.
//!
//! The owner feeds it pan events and a frame clock (`tick`) and reads
//! back per-card transforms. Index changes are published through a
//! `Signal`, which only fires once a transition has fully settled.

use serde::Serialize;

use crate::anim::{AnimatedValue, Easing, Signal, SpringConfig, SubscriptionId};
use crate::domain::{Card, CardId, DisplayConfig};

use super::gesture::{drag_progress, resolve_release, GestureMachine, GesturePhase, PanEvent, Release};
use super::position::{card_transform, CardTransform, StackFrameState};

/// Duration of the advance fling and the recede slide-in
pub const SWIPE_DURATION_MS: f32 = 400.0;
/// Duration of the focus dim/undim
pub const FOCUS_DURATION_MS: f32 = 300.0;
/// Duration of the selection ease
pub const SELECT_DURATION_MS: f32 = 300.0;
/// How quickly the cards behind drop back after an aborted drag
const SNAP_BACK_PROGRESS_MS: f32 = 200.0;
/// The flung card travels this many screen widths to the left
const FLING_DISTANCE_SCREENS: f32 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct StackConfig {
    pub screen_width: f32,
}

impl StackConfig {
    pub fn new(screen_width: f32) -> Self {
        Self { screen_width }
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        DisplayConfig::default().into()
    }
}

impl From<DisplayConfig> for StackConfig {
    fn from(display: DisplayConfig) -> Self {
        Self::new(display.screen_width)
    }
}

/// Everything the view needs to draw one frame
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    pub current_index: usize,
    pub phase: GesturePhase,
    pub transforms: Vec<CardTransform>,
}

pub struct CardStack {
    cards: Vec<Card>,
    config: StackConfig,
    index: Signal<usize>,
    gesture: GestureMachine,
    /// Translation already applied when the current drag began
    drag_origin: f32,
    translation_x: AnimatedValue,
    stack_progress: AnimatedValue,
    is_animating_back: bool,
    slide_back_x: AnimatedValue,
    focus_progress: AnimatedValue,
    selected_index: AnimatedValue,
}

impl CardStack {
    pub fn new(cards: Vec<Card>, config: StackConfig) -> Self {
        log::debug!("Card stack created with {} cards", cards.len());
        Self {
            cards,
            config,
            index: Signal::new(0),
            gesture: GestureMachine::new(),
            drag_origin: 0.0,
            translation_x: AnimatedValue::new(0.0),
            stack_progress: AnimatedValue::new(0.0),
            is_animating_back: false,
            slide_back_x: AnimatedValue::new(0.0),
            focus_progress: AnimatedValue::new(0.0),
            selected_index: AnimatedValue::new(0.0),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current_index(&self) -> usize {
        *self.index.get()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current_index())
    }

    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    pub fn translation_x(&self) -> f32 {
        self.translation_x.get()
    }

    pub fn stack_progress(&self) -> f32 {
        self.stack_progress.get()
    }

    pub fn is_animating_back(&self) -> bool {
        self.is_animating_back
    }

    pub fn focus_progress(&self) -> f32 {
        self.focus_progress.get()
    }

    /// Append a newly issued card at the back of the ring. A card whose id
    /// is already in the deck replaces that entry in place. The front card
    /// does not change.
    pub fn add_card(&mut self, card: Card) {
        if let Some(existing) = self.cards.iter_mut().find(|c| c.id == card.id) {
            log::debug!("Card {} already in stack, replacing", card.id);
            *existing = card;
            return;
        }
        log::debug!("Card {} added to stack", card.id);
        self.cards.push(card);
    }

    pub fn set_screen_width(&mut self, screen_width: f32) {
        self.config.screen_width = screen_width;
    }

    /// Listen for settled index changes
    pub fn subscribe_index(&mut self, listener: impl FnMut(&usize) + Send + 'static) -> SubscriptionId {
        self.index.subscribe(listener)
    }

    pub fn unsubscribe_index(&mut self, id: SubscriptionId) -> bool {
        self.index.unsubscribe(id)
    }

    /// Feed one pan gesture event. Empty decks ignore gestures.
    pub fn pan(&mut self, event: PanEvent) {
        if self.cards.is_empty() {
            return;
        }

        match event {
            PanEvent::Begin => {
                if !self.gesture.begin() {
                    log::debug!("Pan ignored: swipe already in flight");
                    return;
                }
                // Grabbing a card mid snap-back continues from where it is
                self.drag_origin = self.translation_x.get();
                self.translation_x.set(self.drag_origin);
                self.stack_progress.set(self.stack_progress.get());
            }
            PanEvent::Update { translation_x, .. } => {
                if self.gesture.is_dragging() {
                    self.apply_drag(translation_x);
                }
            }
            PanEvent::End {
                translation_x,
                velocity_x,
            } => {
                if !self.gesture.is_dragging() {
                    return;
                }
                self.apply_drag(translation_x);
                let release = resolve_release(self.translation_x.get(), velocity_x, self.cards.len());
                self.gesture.release(release);
                log::debug!(
                    "Pan released at {:.1}px / {:.0}px/s -> {release:?}",
                    self.translation_x.get(),
                    velocity_x
                );
                self.start_settle(release, velocity_x);
            }
            PanEvent::Cancel => {
                if self.gesture.is_dragging() {
                    self.gesture.release(Release::SnapBack);
                    self.start_settle(Release::SnapBack, 0.0);
                }
            }
        }
    }

    fn apply_drag(&mut self, translation_x: f32) {
        let x = self.drag_origin + translation_x;
        self.translation_x.set(x);
        self.stack_progress
            .set(drag_progress(x, self.config.screen_width));
    }

    fn start_settle(&mut self, release: Release, velocity_x: f32) {
        let width = self.config.screen_width;
        match release {
            Release::Advance => {
                self.translation_x.animate_to(
                    -width * FLING_DISTANCE_SCREENS,
                    SWIPE_DURATION_MS,
                    Easing::EaseOut,
                );
                self.stack_progress
                    .animate_to(1.0, SWIPE_DURATION_MS, Easing::EaseOut);
            }
            Release::Recede => {
                let n = self.cards.len();
                let previous = (self.current_index() + n - 1) % n;
                self.index.set(previous);
                self.translation_x.set(0.0);
                self.stack_progress.set(0.0);
                self.is_animating_back = true;
                self.slide_back_x.set(-width);
                self.slide_back_x
                    .animate_to(0.0, SWIPE_DURATION_MS, Easing::EaseOut);
            }
            Release::SnapBack => {
                self.translation_x
                    .spring_to(0.0, velocity_x, SpringConfig::default());
                self.stack_progress
                    .animate_to(0.0, SNAP_BACK_PROGRESS_MS, Easing::EaseOut);
            }
        }
    }

    /// Advance every animation by `dt_ms` and complete any settle that finished.
    pub fn tick(&mut self, dt_ms: f32) {
        self.translation_x.tick(dt_ms);
        self.stack_progress.tick(dt_ms);
        self.slide_back_x.tick(dt_ms);
        self.focus_progress.tick(dt_ms);
        self.selected_index.tick(dt_ms);

        // Completion is read from state rather than from the tick that
        // finished, so a skipped frame cannot lose it.
        let GesturePhase::Settling(release) = self.gesture.phase() else {
            return;
        };
        match release {
            Release::Advance => {
                if !self.translation_x.is_animating() && !self.stack_progress.is_animating() {
                    let n = self.cards.len();
                    self.index.set((self.current_index() + 1) % n);
                    self.translation_x.set(0.0);
                    self.stack_progress.set(0.0);
                    self.drag_origin = 0.0;
                    self.gesture.finish();
                    self.publish_index();
                }
            }
            Release::Recede => {
                if !self.slide_back_x.is_animating() {
                    self.is_animating_back = false;
                    self.slide_back_x.set(0.0);
                    self.gesture.finish();
                    self.publish_index();
                }
            }
            Release::SnapBack => {
                if !self.translation_x.is_animating() && !self.stack_progress.is_animating() {
                    self.drag_origin = 0.0;
                    self.gesture.finish();
                }
            }
        }
    }

    /// Open or close focus mode (driven by the management drawer)
    pub fn set_focus(&mut self, open: bool) {
        if open && !self.focus_progress.is_animating() && self.focus_progress.get() == 0.0 {
            self.selected_index.set(self.current_index() as f32);
        }
        let target = if open { 1.0 } else { 0.0 };
        self.focus_progress
            .animate_to(target, FOCUS_DURATION_MS, Easing::EaseInOut);
    }

    /// Jump straight to the card with `id`, abandoning any gesture in progress.
    /// `None` eases the focus selection back to the current card.
    pub fn select_card(&mut self, id: Option<&CardId>) {
        let Some(id) = id else {
            self.selected_index
                .animate_to(self.current_index() as f32, SELECT_DURATION_MS, Easing::EaseOut);
            return;
        };
        let Some(target) = self.cards.iter().position(|c| &c.id == id) else {
            log::warn!("select_card: no card with id {id}");
            return;
        };

        self.gesture.finish();
        self.drag_origin = 0.0;
        self.translation_x.set(0.0);
        self.stack_progress.set(0.0);
        self.is_animating_back = false;
        self.slide_back_x.set(0.0);

        self.index.set(target);
        self.selected_index
            .animate_to(target as f32, SELECT_DURATION_MS, Easing::EaseOut);
        self.publish_index();
    }

    fn publish_index(&mut self) {
        if self.index.settle() {
            log::debug!("Front card is now index {}", self.current_index());
        }
    }

    pub fn frame_state(&self) -> StackFrameState {
        StackFrameState {
            count: self.cards.len(),
            current_index: self.current_index(),
            translation_x: self.translation_x.get(),
            stack_progress: self.stack_progress.get(),
            is_animating_back: self.is_animating_back,
            slide_back_x: self.slide_back_x.get(),
            screen_width: self.config.screen_width,
            focus_progress: self.focus_progress.get(),
            selected_index: self.selected_index.get(),
        }
    }

    pub fn transform(&self, index: usize) -> CardTransform {
        card_transform(index, &self.frame_state())
    }

    pub fn frame(&self) -> StackFrame {
        let state = self.frame_state();
        StackFrame {
            current_index: state.current_index,
            phase: self.phase(),
            transforms: (0..self.cards.len())
                .map(|i| card_transform(i, &state))
                .collect(),
        }
    }
}
