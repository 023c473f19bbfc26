//! Frame-driven animated values
//!
//! An `AnimatedValue` holds a continuous `f32` and at most one running
//! animation. The owner advances it with `tick(dt_ms)` once per frame.
//! Starting a new animation or calling `set` replaces the running one;
//! there is no completion callback to fire or skip, the owner simply
//! observes the frame on which `tick` reports that the value settled.

use super::Easing;

/// Damped spring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Settle once both displacement and speed fall below this
    pub rest_threshold: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_threshold: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Animation {
    Timing {
        from: f32,
        to: f32,
        duration_ms: f32,
        elapsed_ms: f32,
        easing: Easing,
    },
    Spring {
        to: f32,
        /// px per second
        velocity: f32,
        config: SpringConfig,
    },
}

/// Integration step for springs, in ms
const SPRING_STEP_MS: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f32,
    animation: Option<Animation>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            animation: None,
        }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    /// Jump to `value`, cancelling any running animation
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.animation = None;
    }

    /// Ease toward `to` over `duration_ms`
    pub fn animate_to(&mut self, to: f32, duration_ms: f32, easing: Easing) {
        if duration_ms <= 0.0 {
            self.set(to);
            return;
        }
        self.animation = Some(Animation::Timing {
            from: self.value,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
        });
    }

    /// Spring toward `to`, starting with `velocity` px/s
    pub fn spring_to(&mut self, to: f32, velocity: f32, config: SpringConfig) {
        self.animation = Some(Animation::Spring {
            to,
            velocity,
            config,
        });
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the value is headed (its current value when idle)
    pub fn target(&self) -> f32 {
        match self.animation {
            Some(Animation::Timing { to, .. }) | Some(Animation::Spring { to, .. }) => to,
            None => self.value,
        }
    }

    /// Advance the running animation by `dt_ms`.
    ///
    /// Returns `true` only on the tick where an animation reaches its end.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let dt_ms = dt_ms.max(0.0);

        let finished = match animation {
            Animation::Timing {
                from,
                to,
                duration_ms,
                elapsed_ms,
                easing,
            } => {
                *elapsed_ms += dt_ms;
                let t = (*elapsed_ms / *duration_ms).min(1.0);
                self.value = *from + (*to - *from) * easing.apply(t);
                if t >= 1.0 {
                    self.value = *to;
                    true
                } else {
                    false
                }
            }
            Animation::Spring {
                to,
                velocity,
                config,
            } => {
                let steps = (dt_ms / SPRING_STEP_MS).ceil().max(1.0) as usize;
                let h = dt_ms / steps as f32 / 1000.0;
                let mut settled = false;
                for _ in 0..steps {
                    let displacement = self.value - *to;
                    let force = -config.stiffness * displacement - config.damping * *velocity;
                    *velocity += force / config.mass * h;
                    self.value += *velocity * h;
                    if (self.value - *to).abs() < config.rest_threshold
                        && velocity.abs() < config.rest_threshold
                    {
                        settled = true;
                        break;
                    }
                }
                if settled {
                    self.value = *to;
                }
                settled
            }
        };

        if finished {
            self.animation = None;
        }
        finished
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
