//! Viewport scroll position with eased smooth-scroll animation

use std::time::{Duration, Instant};

/// Duration of an anchor smooth-scroll
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);
/// Breathing room left above a section heading when jumping to its anchor
pub const ANCHOR_MARGIN: u16 = 1;

/// In-flight smooth scroll
#[derive(Debug)]
struct ScrollAnim {
    from: f32,
    to: f32,
    started_at: Instant,
}

/// Scroll offset of the document under the header, in rows
#[derive(Debug, Default)]
pub struct ScrollState {
    position: f32,
    anim: Option<ScrollAnim>,
}

impl ScrollState {
    /// Current offset as a whole row
    pub fn row(&self) -> u16 {
        self.position.round().max(0.0) as u16
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Scroll target for a section anchor: just above the heading, never
    /// past the top of the document
    pub fn anchor_target(section_top: u16) -> f32 {
        section_top.saturating_sub(ANCHOR_MARGIN) as f32
    }

    /// Start a smooth scroll to `target`, or jump straight there
    pub fn scroll_to(&mut self, target: f32, now: Instant, instant: bool) {
        let target = target.max(0.0);
        if instant {
            self.anim = None;
            self.position = target;
        } else {
            self.anim = Some(ScrollAnim {
                from: self.position,
                to: target,
                started_at: now,
            });
        }
    }

    /// Manual scrolling; interrupts any smooth scroll in flight
    pub fn scroll_by(&mut self, delta: f32, max: f32) {
        self.anim = None;
        self.position = (self.position + delta).clamp(0.0, max.max(0.0));
    }

    /// Advance the smooth-scroll animation
    pub fn update(&mut self, now: Instant) {
        if let Some(anim) = &self.anim {
            let elapsed = now.saturating_duration_since(anim.started_at);
            if elapsed >= SMOOTH_SCROLL_DURATION {
                self.position = anim.to;
                self.anim = None;
            } else {
                let progress =
                    elapsed.as_secs_f32() / SMOOTH_SCROLL_DURATION.as_secs_f32();
                let eased = simple_easing::cubic_out(progress);
                self.position = anim.from + (anim.to - anim.from) * eased;
            }
        }
    }
}
