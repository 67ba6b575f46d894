//! Application state definitions

use super::{ContactForm, PageLoad, Reveal, ScrollState, REVEAL_MARGIN};
use crate::content::{document, SectionId, NAV_CLOSE_LABEL, NAV_OPEN_LABEL};
use std::time::Instant;

/// Terminal width below which the nav collapses behind a toggle
pub const NAV_BREAKPOINT_COLS: u16 = 70;
/// Scroll offset past which the header gets its "scrolled" treatment
pub const HEADER_SHADOW_THRESHOLD: u16 = 2;
/// Rows below the header probed when deciding the active nav link
pub const ACTIVE_SECTION_PROBE: u16 = 4;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The scrolled one-page site
    #[default]
    Page,
    /// The contact form, opened from the contact section
    ContactForm,
}

/// A stop on the keyboard focus ring, in tab order: skip link first, then
/// the navigation, then the in-page links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStop {
    /// Hidden-until-focused accessibility link
    SkipLink,
    /// Menu toggle, only present on narrow terminals
    NavToggle,
    /// Inline header link (wide terminals), by section position
    NavLink(usize),
    /// Dropdown menu link (narrow terminals, menu open), by section position
    MenuLink(usize),
    /// Focusable in-page link, indexed into `Document::links`
    PageLink(usize),
}

/// Main application state
pub struct AppState {
    pub current_view: View,
    /// Keyboard focus; `None` until the user starts tabbing
    pub focus: Option<FocusStop>,
    pub scroll: ScrollState,
    pub active_section: SectionId,
    pub header_scrolled: bool,
    /// Collapsed nav menu (narrow terminals)
    pub menu_open: bool,
    pub form: ContactForm,
    /// Reveal state per content card, by global card index
    pub reveals: Vec<Reveal>,
    pub page_load: PageLoad,
}

impl AppState {
    pub fn new(now: Instant) -> Self {
        Self {
            current_view: View::Page,
            focus: None,
            scroll: ScrollState::default(),
            active_section: SectionId::Home,
            header_scrolled: false,
            menu_open: false,
            form: ContactForm::new(),
            reveals: vec![Reveal::default(); document().card_count()],
            page_load: PageLoad::new(now),
        }
    }

    /// Accessible label of the nav toggle, flipping with its expanded state
    pub fn nav_toggle_label(&self) -> &'static str {
        if self.menu_open {
            NAV_CLOSE_LABEL
        } else {
            NAV_OPEN_LABEL
        }
    }

    /// Largest allowed scroll offset for the given viewport height
    pub fn max_scroll(&self, viewport_rows: u16) -> f32 {
        document().height().saturating_sub(viewport_rows) as f32
    }

    /// Recompute scroll-derived state: active nav link and header shadow
    pub fn sync_scroll_derived(&mut self) {
        let probe = self.scroll.row() + ACTIVE_SECTION_PROBE;
        self.active_section = document().section_at(probe);
        self.header_scrolled = self.scroll.row() > HEADER_SHADOW_THRESHOLD;
    }

    /// Trigger reveals for cards that have entered the viewport
    pub fn sync_reveals(&mut self, now: Instant, viewport_rows: u16, reduced_motion: bool) {
        let visible_below = self.scroll.row() + viewport_rows.saturating_sub(REVEAL_MARGIN);
        for (card, &row) in document().card_rows.iter().enumerate() {
            if row < visible_below {
                if reduced_motion {
                    self.reveals[card].trigger_complete(now);
                } else {
                    self.reveals[card].trigger(now);
                }
            }
        }
    }

    /// The focus ring for the current layout, in tab order
    pub fn focus_ring(&self, narrow: bool) -> Vec<FocusStop> {
        let mut ring = vec![FocusStop::SkipLink];
        if narrow {
            ring.push(FocusStop::NavToggle);
            if self.menu_open {
                for idx in 0..SectionId::ALL.len() {
                    ring.push(FocusStop::MenuLink(idx));
                }
            }
        } else {
            for idx in 0..SectionId::ALL.len() {
                ring.push(FocusStop::NavLink(idx));
            }
        }
        for idx in 0..document().links.len() {
            ring.push(FocusStop::PageLink(idx));
        }
        ring
    }

    /// Move focus to the next stop on the ring
    pub fn focus_next(&mut self, narrow: bool) {
        let ring = self.focus_ring(narrow);
        self.focus = Some(match self.ring_position(&ring) {
            Some(pos) => ring[(pos + 1) % ring.len()],
            None => ring[0],
        });
    }

    /// Move focus to the previous stop on the ring
    pub fn focus_prev(&mut self, narrow: bool) {
        let ring = self.focus_ring(narrow);
        self.focus = Some(match self.ring_position(&ring) {
            Some(0) | None => ring[ring.len() - 1],
            Some(pos) => ring[pos - 1],
        });
    }

    fn ring_position(&self, ring: &[FocusStop]) -> Option<usize> {
        let current = self.focus?;
        ring.iter().position(|stop| *stop == current)
    }
}
