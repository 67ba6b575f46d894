//! One-shot reveal animation for content cards
//!
//! Cards start hidden and ease in the first time they scroll into view.
//! A reveal never restarts once triggered.

use std::time::{Duration, Instant};

/// Duration of the reveal ease
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);
/// Rows a card must clear above the viewport bottom before revealing
pub const REVEAL_MARGIN: u16 = 2;

/// Reveal state of a single card
#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    started_at: Option<Instant>,
}

impl Reveal {
    /// Start the reveal; later calls are no-ops
    pub fn trigger(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Reveal instantly, skipping the animation (reduced motion)
    pub fn trigger_complete(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now - REVEAL_DURATION);
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.started_at.is_some()
    }

    /// Eased progress: 0.0 hidden, 1.0 fully shown
    pub fn progress(&self, now: Instant) -> f32 {
        match self.started_at {
            None => 0.0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                if elapsed >= REVEAL_DURATION {
                    1.0
                } else {
                    simple_easing::cubic_out(
                        elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32(),
                    )
                }
            }
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_triggered() && self.progress(now) < 1.0
    }
}
