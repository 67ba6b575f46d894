//! Transient toast notifications with a single live slot
//!
//! A notification slides in shortly after it is shown, stays for a fixed
//! time, slides out, and is removed. Showing a new one evicts any live one
//! synchronously; once shown, the lifecycle cannot be cancelled.

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// Delay before the toast starts sliding on-screen
pub const ENTER_DELAY: Duration = Duration::from_millis(100);
/// How long the toast stays fully visible
pub const VISIBLE_FOR: Duration = Duration::from_millis(5000);
/// Duration of the slide-out transition
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);
/// Duration of the slide-in transition
const ENTER_ANIMATION: Duration = Duration::from_millis(250);

/// Notification category, driving its accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

/// Lifecycle phase derived from elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Inserted but still (partially) off-screen
    Entering,
    /// Fully on-screen
    Visible,
    /// Sliding off-screen
    Leaving,
    /// Lifecycle over; the slot can be reclaimed
    Gone,
}

/// A live toast
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Wall-clock creation time, for diagnostics
    pub created_at: DateTime<Utc>,
    shown_at: Instant,
}

impl Notification {
    fn new(message: String, kind: NotificationKind, now: Instant) -> Self {
        Self {
            message,
            kind,
            created_at: Utc::now(),
            shown_at: now,
        }
    }

    /// Phase at the given instant
    pub fn phase(&self, now: Instant) -> NotificationPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < ENTER_DELAY {
            NotificationPhase::Entering
        } else if elapsed < ENTER_DELAY + VISIBLE_FOR {
            NotificationPhase::Visible
        } else if elapsed < ENTER_DELAY + VISIBLE_FOR + EXIT_ANIMATION {
            NotificationPhase::Leaving
        } else {
            NotificationPhase::Gone
        }
    }

    /// Horizontal slide progress: 0.0 fully off-screen, 1.0 fully on-screen
    pub fn slide_progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        match self.phase(now) {
            NotificationPhase::Entering => 0.0,
            NotificationPhase::Visible => {
                let sliding = elapsed - ENTER_DELAY;
                if sliding >= ENTER_ANIMATION {
                    1.0
                } else {
                    simple_easing::cubic_out(
                        sliding.as_secs_f32() / ENTER_ANIMATION.as_secs_f32(),
                    )
                }
            }
            NotificationPhase::Leaving => {
                let leaving = elapsed - ENTER_DELAY - VISIBLE_FOR;
                1.0 - simple_easing::cubic_out(
                    leaving.as_secs_f32() / EXIT_ANIMATION.as_secs_f32(),
                )
            }
            NotificationPhase::Gone => 0.0,
        }
    }
}

/// Owner of the single notification slot
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, evicting any live one before inserting the new one
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification::new(message.into(), kind, now));
    }

    /// Reclaim the slot once the lifecycle is over
    pub fn update(&mut self, now: Instant) {
        if let Some(n) = &self.current {
            if n.phase(now) == NotificationPhase::Gone {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn test_enters_then_shows_then_leaves_then_gone() {
            let t0 = Instant::now();
            let mut notifier = Notifier::new();
            notifier.notify("مرحبا", NotificationKind::Info, t0);

            let n = notifier.current().unwrap().clone();
            assert_eq!(n.phase(at(t0, 50)), NotificationPhase::Entering);
            assert_eq!(n.phase(at(t0, 400)), NotificationPhase::Visible);
            assert_eq!(n.phase(at(t0, 5099)), NotificationPhase::Visible);
            assert_eq!(n.phase(at(t0, 5200)), NotificationPhase::Leaving);
            assert_eq!(n.phase(at(t0, 5400)), NotificationPhase::Gone);
        }

        #[test]
        fn test_update_reclaims_slot_after_lifecycle() {
            let t0 = Instant::now();
            let mut notifier = Notifier::new();
            notifier.notify("مرحبا", NotificationKind::Success, t0);

            notifier.update(at(t0, 5300));
            assert!(notifier.current().is_some());
            notifier.update(at(t0, 5500));
            assert!(notifier.current().is_none());
        }

        #[test]
        fn test_created_at_is_recorded() {
            let mut notifier = Notifier::new();
            notifier.notify("مرحبا", NotificationKind::Info, Instant::now());
            assert!(notifier.current().unwrap().created_at <= Utc::now());
        }
    }

    mod single_slot {
        use super::*;

        #[test]
        fn test_new_notification_evicts_previous_synchronously() {
            let t0 = Instant::now();
            let mut notifier = Notifier::new();
            notifier.notify("الأولى", NotificationKind::Error, t0);
            notifier.notify("الثانية", NotificationKind::Success, at(t0, 10));

            let n = notifier.current().unwrap();
            assert_eq!(n.message, "الثانية");
            assert_eq!(n.kind, NotificationKind::Success);
        }

        #[test]
        fn test_replacement_restarts_lifecycle() {
            let t0 = Instant::now();
            let mut notifier = Notifier::new();
            notifier.notify("الأولى", NotificationKind::Info, t0);
            notifier.notify("الثانية", NotificationKind::Info, at(t0, 4900));

            // The second toast is still alive well past the first one's span
            notifier.update(at(t0, 6000));
            assert!(notifier.current().is_some());
            notifier.update(at(t0, 4900 + 5500));
            assert!(notifier.current().is_none());
        }
    }

    mod slide {
        use super::*;

        #[test]
        fn test_off_screen_before_enter_delay() {
            let t0 = Instant::now();
            let mut notifier = Notifier::new();
            notifier.notify("مرحبا", NotificationKind::Info, t0);
            let n = notifier.current().unwrap();
            assert_eq!(n.slide_progress(at(t0, 50)), 0.0);
        }

        #[test]
        fn test_fully_on_screen_while_visible() {
            let t0 = Instant::now();
            let mut notifier = Notifier::new();
            notifier.notify("مرحبا", NotificationKind::Info, t0);
            let n = notifier.current().unwrap();
            assert_eq!(n.slide_progress(at(t0, 2000)), 1.0);
        }

        #[test]
        fn test_sliding_out_while_leaving() {
            let t0 = Instant::now();
            let mut notifier = Notifier::new();
            notifier.notify("مرحبا", NotificationKind::Info, t0);
            let n = notifier.current().unwrap();
            let p = n.slide_progress(at(t0, 5250));
            assert!(p > 0.0 && p < 1.0, "expected mid-slide, got {p}");
        }
    }
}
