//! Application state and core logic

use crate::clock::{Clock, SystemClock};
use crate::config::TuiConfig;
use crate::content::{
    document, LinkAction, SectionId, BLOG_TEASER_NOTICE, FORM_ERROR_NOTICE, FORM_SUCCESS_NOTICE,
    SEND_FAILURE_NOTICE, SITE_EMAIL,
};
use crate::gateway::{ContactGateway, SimulatedGateway, SubmissionRequest};
use crate::notify::{NotificationKind, Notifier};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{
    AppState, FocusStop, ScrollState, UiArea, View, HEADER_HEIGHT, NAV_BREAKPOINT_COLS,
};
use crate::ui;
use crate::validate::validate;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Fixed delay of the simulated submission round trip
pub const SUBMIT_ROUND_TRIP: Duration = Duration::from_millis(1500);
/// Debounce applied to terminal resizes before layout side effects run
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);
/// Rows scrolled per mouse wheel notch
const WHEEL_STEP: f32 = 3.0;

/// A scheduled submission; fires once, cannot be cancelled
struct PendingSubmission {
    request: SubmissionRequest,
    due_at: Instant,
}

/// Debounced resize waiting to apply its side effects
struct PendingResize {
    width: u16,
    due_at: Instant,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Single-slot toast notifications
    pub notifier: Notifier,
    /// User configuration
    pub config: TuiConfig,
    /// Submission transport (simulated)
    gateway: Arc<dyn ContactGateway>,
    /// Time source for timers and animations
    clock: Arc<dyn Clock>,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Instant of the last tick, read by the renderer for animation progress
    pub last_tick: Instant,
    pending_submission: Option<PendingSubmission>,
    pending_resize: Option<PendingResize>,
}

impl App {
    /// Create a new App instance with the production gateway and clock
    pub fn new(config: TuiConfig) -> Self {
        Self::with_parts(config, Arc::new(SimulatedGateway), Arc::new(SystemClock))
    }

    /// Create an App with injected gateway and clock (used by tests)
    pub fn with_parts(
        config: TuiConfig,
        gateway: Arc<dyn ContactGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let now = clock.now();
        let mut state = AppState::new(now);
        if config.reduced_motion() {
            state.page_load.complete();
        }

        let mut app = Self {
            state,
            notifier: Notifier::new(),
            config,
            gateway,
            clock,
            copy_message: None,
            terminal_size: None,
            last_tick: now,
            pending_submission: None,
            pending_resize: None,
        };

        // Open on a configured section, without the scroll animation
        if let Some(name) = app.config.start_section.clone() {
            if let Some(id) = SectionId::from_name(&name) {
                let target = ScrollState::anchor_target(document().section_top(id))
                    .min(app.state.max_scroll(app.viewport_rows()));
                app.state.scroll.scroll_to(target, now, true);
            }
        }
        app.state.sync_scroll_derived();
        app
    }

    fn width(&self) -> u16 {
        self.terminal_size.map(|(_, w)| w).unwrap_or(80)
    }

    fn height(&self) -> u16 {
        self.terminal_size.map(|(h, _)| h).unwrap_or(24)
    }

    /// Rows of page body visible between the header and the status bar
    pub fn viewport_rows(&self) -> u16 {
        self.height().saturating_sub(HEADER_HEIGHT + 1)
    }

    fn is_narrow(&self) -> bool {
        self.width() < NAV_BREAKPOINT_COLS
    }

    /// Whether anything is animating; drives the event-loop poll cadence
    pub fn is_animating(&self) -> bool {
        !self.state.page_load.is_ready()
            || self.state.scroll.is_animating()
            || self.notifier.current().is_some()
            || self.pending_submission.is_some()
            || self
                .state
                .reveals
                .iter()
                .any(|r| r.is_animating(self.last_tick))
    }

    /// Advance timers and animations. Called once per event-loop pass.
    pub async fn tick(&mut self) -> Result<()> {
        let now = self.clock.now();
        self.last_tick = now;

        self.state.page_load.update(now);
        self.state.scroll.update(now);
        self.state.sync_scroll_derived();
        self.state
            .sync_reveals(now, self.viewport_rows(), self.config.reduced_motion());
        self.notifier.update(now);

        // Apply a debounced resize: growing past the breakpoint closes the
        // collapsed menu
        if let Some(resize) = &self.pending_resize {
            if now >= resize.due_at {
                if resize.width >= NAV_BREAKPOINT_COLS {
                    self.state.menu_open = false;
                }
                self.pending_resize = None;
            }
        }

        // Complete the simulated submission round trip
        if let Some(pending) = self.pending_submission.take_if(|p| now >= p.due_at) {
            match self.gateway.deliver(&pending.request).await {
                Ok(receipt) => {
                    tracing::info!(receipt = %receipt.id, "اكتمل إرسال نموذج الاتصال");
                    self.notifier
                        .notify(FORM_SUCCESS_NOTICE, NotificationKind::Success, now);
                    self.state.form.reset();
                }
                Err(error) => {
                    tracing::error!(%error, "فشل إرسال نموذج الاتصال");
                    self.notifier
                        .notify(SEND_FAILURE_NOTICE, NotificationKind::Error, now);
                }
            }
            self.state.form.sending = false;
        }

        Ok(())
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any copy feedback on key press
        self.copy_message = None;

        match self.state.current_view {
            View::Page => self.handle_page_key(key),
            View::ContactForm => self.handle_form_key(key),
        }
    }

    /// Handle keys on the scrolled page
    fn handle_page_key(&mut self, key: KeyEvent) -> Result<()> {
        let narrow = self.is_narrow();
        let in_menu = matches!(self.state.focus, Some(FocusStop::MenuLink(_)));

        match key.code {
            KeyCode::Esc if self.state.menu_open => self.close_menu(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Enter => self.activate_focus()?,
            KeyCode::Char('m') if narrow => self.toggle_menu(),
            // Menu traversal while a menu link is focused
            KeyCode::Up | KeyCode::Char('k') if in_menu => self.focus_prev(),
            KeyCode::Down | KeyCode::Char('j') if in_menu => self.focus_next(),
            // Page scrolling
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1.0),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1.0),
            KeyCode::PageUp => self.scroll_by(-(self.viewport_rows() as f32 - 2.0)),
            KeyCode::PageDown => self.scroll_by(self.viewport_rows() as f32 - 2.0),
            KeyCode::Home | KeyCode::Char('g') => self.jump_to(0.0),
            KeyCode::End | KeyCode::Char('G') => {
                self.jump_to(self.state.max_scroll(self.viewport_rows()))
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the contact form view
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit_row = self.state.form.is_on_submit_row();
        let in_textarea = self
            .state
            .form
            .active_field()
            .is_some_and(|f| f.is_multiline());

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Submit shortcut works from anywhere in the form; Ctrl+S on
            // every platform, Cmd+S additionally on macOS
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact_form()
            }
            KeyCode::Char('s') if key.modifiers.contains(SUBMIT_MODIFIER) => {
                self.submit_contact_form()
            }
            KeyCode::Esc => {
                // Back to the page; typed values survive
                self.state.current_view = View::Page;
            }
            KeyCode::Enter if on_submit_row => self.submit_contact_form(),
            // Enter adds a newline only in the message textarea; in
            // single-line inputs it submits, as a browser form would
            KeyCode::Enter if in_textarea => self.state.form.input_char('\n'),
            KeyCode::Enter => self.submit_contact_form(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::ScrollUp if self.state.current_view == View::Page => {
                self.scroll_by(-WHEEL_STEP)
            }
            MouseEventKind::ScrollDown if self.state.current_view == View::Page => {
                self.scroll_by(WHEEL_STEP)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row)?
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Result<()> {
        self.copy_message = None;

        if self.state.current_view == View::ContactForm {
            if UiArea::Body.contains_row(row) {
                let body = Rect::new(0, HEADER_HEIGHT, self.width(), self.viewport_rows());
                if let Some(idx) = ui::contact_row_at(body, row) {
                    if idx == self.state.form.fields().len() {
                        self.submit_contact_form();
                    } else {
                        self.state.form.focus_row(idx);
                    }
                }
            }
            return Ok(());
        }

        // Header bar: toggle or inline nav links
        if row < HEADER_HEIGHT {
            if self.is_narrow() {
                let (x_start, x_end) = ui::toggle_span(self, self.width());
                if (x_start..x_end).contains(&column) {
                    self.toggle_menu();
                    return Ok(());
                }
            } else if let Some(span) = ui::nav_link_spans(self.width())
                .into_iter()
                .find(|s| (s.x_start..s.x_end).contains(&column))
            {
                self.state.focus = Some(FocusStop::NavLink(span.index));
                self.activate_nav_link(span.index);
                return Ok(());
            }
            // A click elsewhere on the header falls through to the
            // outside-the-menu check below
        }

        // Open menu: a click inside activates a link, outside closes it
        if self.state.menu_open && self.is_narrow() {
            let screen = Rect::new(0, 0, self.width(), self.height());
            if let Some(idx) = ui::menu_link_at(screen, column, row) {
                self.state.focus = Some(FocusStop::MenuLink(idx));
                self.activate_nav_link(idx);
            } else {
                self.close_menu();
            }
            return Ok(());
        }

        // Page body: in-page links
        if UiArea::Body.contains_row(row) {
            let row_in_body = UiArea::Body.relative_row(row);
            if let Some(idx) = ui::body_link_at(self, row_in_body) {
                self.state.focus = Some(FocusStop::PageLink(idx));
                self.activate_page_link(idx)?;
            }
        }
        Ok(())
    }

    /// Handle a terminal resize; side effects are debounced
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = Some((height, width));
        self.pending_resize = Some(PendingResize {
            width,
            due_at: self.clock.now() + RESIZE_DEBOUNCE,
        });
    }

    // --- Focus & navigation ---------------------------------------------

    fn focus_next(&mut self) {
        let narrow = self.is_narrow();
        self.state.focus_next(narrow);
        self.scroll_focus_into_view();
    }

    fn focus_prev(&mut self) {
        let narrow = self.is_narrow();
        self.state.focus_prev(narrow);
        self.scroll_focus_into_view();
    }

    /// Keep a focused in-page link visible, like a browser following tab focus
    fn scroll_focus_into_view(&mut self) {
        let Some(FocusStop::PageLink(idx)) = self.state.focus else {
            return;
        };
        let row = document().link_rows[idx];
        let viewport = self.viewport_rows();
        let top = self.state.scroll.row();
        if row < top || row >= top + viewport {
            let target = row.saturating_sub(viewport / 2) as f32;
            self.smooth_scroll_to(target);
        }
    }

    fn activate_focus(&mut self) -> Result<()> {
        match self.state.focus {
            Some(FocusStop::SkipLink) => {
                // Jump to the main content, past the header
                self.smooth_scroll_to(0.0);
            }
            Some(FocusStop::NavToggle) => self.toggle_menu(),
            Some(FocusStop::NavLink(idx)) | Some(FocusStop::MenuLink(idx)) => {
                self.activate_nav_link(idx)
            }
            Some(FocusStop::PageLink(idx)) => self.activate_page_link(idx)?,
            None => {}
        }
        Ok(())
    }

    /// Navigate to a section; closes the collapsed menu like a link tap
    fn activate_nav_link(&mut self, index: usize) {
        if let Some(id) = SectionId::ALL.get(index).copied() {
            self.state.menu_open = false;
            let target = ScrollState::anchor_target(document().section_top(id));
            self.smooth_scroll_to(target);
        }
    }

    fn activate_page_link(&mut self, index: usize) -> Result<()> {
        let Some(link) = document().links.get(index) else {
            return Ok(());
        };
        match link.action {
            LinkAction::Jump(id) => {
                let target = ScrollState::anchor_target(document().section_top(id));
                self.smooth_scroll_to(target);
            }
            LinkAction::OpenContactForm => {
                self.state.current_view = View::ContactForm;
            }
            LinkAction::BlogTeaser => {
                self.notifier.notify(
                    BLOG_TEASER_NOTICE,
                    NotificationKind::Info,
                    self.clock.now(),
                );
            }
            LinkAction::CopyEmail => match self.copy_to_clipboard(SITE_EMAIL) {
                Ok(()) => {
                    self.copy_message = Some("تم نسخ البريد الإلكتروني".to_string());
                }
                Err(error) => {
                    tracing::warn!(%error, "تعذر الوصول إلى الحافظة");
                    self.copy_message = Some("تعذر النسخ إلى الحافظة".to_string());
                }
            },
        }
        Ok(())
    }

    fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
    }

    fn close_menu(&mut self) {
        self.state.menu_open = false;
        // Focus on a vanished menu link would go stale
        if matches!(self.state.focus, Some(FocusStop::MenuLink(_))) {
            self.state.focus = Some(FocusStop::NavToggle);
        }
    }

    // --- Scrolling -------------------------------------------------------

    fn scroll_by(&mut self, delta: f32) {
        let max = self.state.max_scroll(self.viewport_rows());
        self.state.scroll.scroll_by(delta, max);
        self.state.sync_scroll_derived();
    }

    fn jump_to(&mut self, target: f32) {
        let max = self.state.max_scroll(self.viewport_rows());
        self.state.scroll.scroll_to(target.min(max), self.clock.now(), true);
        self.state.sync_scroll_derived();
    }

    fn smooth_scroll_to(&mut self, target: f32) {
        let max = self.state.max_scroll(self.viewport_rows());
        self.state.scroll.scroll_to(
            target.min(max),
            self.clock.now(),
            self.config.reduced_motion(),
        );
    }

    // --- Contact form ----------------------------------------------------

    /// Validate and submit the contact form.
    ///
    /// Invalid forms render every violation inline plus one corroborating
    /// toast and never schedule the round trip. Valid forms disable the
    /// submit control and schedule the fixed simulated delay.
    fn submit_contact_form(&mut self) {
        if self.state.form.sending {
            // The control is disabled for the duration of the round trip
            return;
        }
        let now = self.clock.now();

        let errors = validate(&self.state.form);
        if !errors.is_empty() {
            tracing::debug!(violations = errors.len(), "رُفض نموذج الاتصال");
            self.state.form.apply_errors(&errors);
            self.notifier
                .notify(FORM_ERROR_NOTICE, NotificationKind::Error, now);
            return;
        }

        let request = self.state.form.to_request();
        self.state.form.sending = true;
        self.pending_submission = Some(PendingSubmission {
            request,
            due_at: now + SUBMIT_ROUND_TRIP,
        });
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::content::DocLine;
    use crate::gateway::{DeliveryReceipt, MockContactGateway};
    use crate::notify::NotificationKind;
    use crate::state::{FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME, FIELD_SUBJECT};
    use chrono::Utc;
    use uuid::Uuid;

    fn ok_gateway() -> MockContactGateway {
        let mut gateway = MockContactGateway::new();
        gateway.expect_deliver().returning(|_| {
            Ok(DeliveryReceipt {
                id: Uuid::new_v4(),
                accepted_at: Utc::now(),
            })
        });
        gateway
    }

    fn test_app_with(gateway: MockContactGateway) -> (App, Arc<ManualClock>) {
        let clock = ManualClock::new();
        let mut app = App::with_parts(
            TuiConfig::default(),
            Arc::new(gateway),
            clock.clone(),
        );
        app.terminal_size = Some((30, 100));
        (app, clock)
    }

    fn test_app() -> (App, Arc<ManualClock>) {
        test_app_with(ok_gateway())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn fill_form(app: &mut App) {
        app.state.form.set_value(FIELD_NAME, "أحمد السالم");
        app.state.form.set_value(FIELD_EMAIL, "ahmed@example.com");
        app.state.form.set_value(FIELD_SUBJECT, "استفسار عن المنتجات");
        app.state
            .form
            .set_value(FIELD_MESSAGE, "أرغب في معرفة المزيد عن منتجاتكم.");
    }

    fn page_link_index(action: LinkAction) -> usize {
        document()
            .links
            .iter()
            .position(|l| l.action == action)
            .expect("link exists")
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_invalid_submit_shows_errors_and_never_schedules() {
            let (mut app, clock) = test_app();
            app.state.current_view = View::ContactForm;
            app.state.form.set_value(FIELD_NAME, "أحمد");

            app.handle_key(ctrl('s')).unwrap();

            assert!(app.state.form.has_errors());
            assert!(!app.state.form.sending);
            assert!(app.pending_submission.is_none());
            let toast = app.notifier.current().unwrap();
            assert_eq!(toast.kind, NotificationKind::Error);
            assert_eq!(toast.message, FORM_ERROR_NOTICE);

            // Values survive a rejected submission
            clock.advance(Duration::from_millis(2000));
            app.tick().await.unwrap();
            assert_eq!(app.state.form.field(FIELD_NAME).unwrap().value, "أحمد");
        }

        #[tokio::test]
        async fn test_valid_submit_disables_then_succeeds_and_resets() {
            let (mut app, clock) = test_app();
            app.state.current_view = View::ContactForm;
            fill_form(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            assert!(app.state.form.sending);
            assert!(!app.state.form.has_errors());

            // Still in flight before the fixed delay elapses
            clock.advance(Duration::from_millis(1000));
            app.tick().await.unwrap();
            assert!(app.state.form.sending);
            assert!(app.notifier.current().is_none());

            clock.advance(Duration::from_millis(600));
            app.tick().await.unwrap();
            assert!(!app.state.form.sending);
            let toast = app.notifier.current().unwrap();
            assert_eq!(toast.kind, NotificationKind::Success);
            assert_eq!(toast.message, FORM_SUCCESS_NOTICE);
            assert_eq!(app.state.form.field(FIELD_NAME).unwrap().value, "");
        }

        #[tokio::test]
        async fn test_submit_is_blocked_while_in_flight() {
            let mut gateway = MockContactGateway::new();
            // Exactly one delivery despite two submit attempts
            gateway.expect_deliver().times(1).returning(|_| {
                Ok(DeliveryReceipt {
                    id: Uuid::new_v4(),
                    accepted_at: Utc::now(),
                })
            });
            let (mut app, clock) = test_app_with(gateway);
            app.state.current_view = View::ContactForm;
            fill_form(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(ctrl('s')).unwrap();

            clock.advance(Duration::from_millis(1600));
            app.tick().await.unwrap();
            assert!(!app.state.form.sending);
        }

        #[tokio::test]
        async fn test_gateway_failure_keeps_values_and_toasts_error() {
            let mut gateway = MockContactGateway::new();
            gateway
                .expect_deliver()
                .returning(|_| Err(anyhow::anyhow!("mail relay unavailable")));
            let (mut app, clock) = test_app_with(gateway);
            app.state.current_view = View::ContactForm;
            fill_form(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            clock.advance(Duration::from_millis(1600));
            app.tick().await.unwrap();

            assert!(!app.state.form.sending);
            let toast = app.notifier.current().unwrap();
            assert_eq!(toast.kind, NotificationKind::Error);
            assert_ne!(app.state.form.field(FIELD_NAME).unwrap().value, "");
        }

        #[tokio::test]
        async fn test_enter_in_single_line_field_submits() {
            let (mut app, _clock) = test_app();
            app.state.current_view = View::ContactForm;

            // Empty form: Enter on the name field runs the full validation
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.form.has_errors());
        }

        #[tokio::test]
        async fn test_enter_in_textarea_inserts_newline() {
            let (mut app, _clock) = test_app();
            app.state.current_view = View::ContactForm;
            // Focus the message textarea (row 4)
            for _ in 0..4 {
                app.handle_key(key(KeyCode::Tab)).unwrap();
            }
            app.handle_key(key(KeyCode::Char('أ'))).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.form.field(FIELD_MESSAGE).unwrap().value, "أ\n");
        }
    }

    mod notifications {
        use super::*;

        #[tokio::test]
        async fn test_blog_teaser_toast_is_single_slot() {
            let (mut app, _clock) = test_app();
            let idx = page_link_index(LinkAction::BlogTeaser);
            app.state.focus = Some(FocusStop::PageLink(idx));

            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();

            let toast = app.notifier.current().unwrap();
            assert_eq!(toast.message, BLOG_TEASER_NOTICE);
            assert_eq!(toast.kind, NotificationKind::Info);
        }

        #[tokio::test]
        async fn test_toast_expires_after_lifecycle() {
            let (mut app, clock) = test_app();
            let idx = page_link_index(LinkAction::BlogTeaser);
            app.state.focus = Some(FocusStop::PageLink(idx));
            app.handle_key(key(KeyCode::Enter)).unwrap();

            clock.advance(Duration::from_millis(5500));
            app.tick().await.unwrap();
            assert!(app.notifier.current().is_none());
        }
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_nav_link_smooth_scrolls_to_section() {
            let (mut app, clock) = test_app();
            let services = SectionId::ALL
                .iter()
                .position(|s| *s == SectionId::Services)
                .unwrap();
            app.state.focus = Some(FocusStop::NavLink(services));
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.scroll.is_animating());

            clock.advance(Duration::from_millis(500));
            app.tick().await.unwrap();
            let expected =
                ScrollState::anchor_target(document().section_top(SectionId::Services));
            assert_eq!(app.state.scroll.position(), expected);
            assert_eq!(app.state.active_section, SectionId::Services);
        }

        #[tokio::test]
        async fn test_skip_link_returns_to_main_content() {
            let (mut app, clock) = test_app();
            app.state
                .scroll
                .scroll_to(50.0, clock.now(), true);

            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.focus, Some(FocusStop::SkipLink));
            app.handle_key(key(KeyCode::Enter)).unwrap();

            clock.advance(Duration::from_millis(500));
            app.tick().await.unwrap();
            assert_eq!(app.state.scroll.position(), 0.0);
        }

        #[tokio::test]
        async fn test_open_contact_form_link_switches_view() {
            let (mut app, _clock) = test_app();
            let idx = page_link_index(LinkAction::OpenContactForm);
            app.state.focus = Some(FocusStop::PageLink(idx));
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.current_view, View::ContactForm);

            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.current_view, View::Page);
        }

        #[tokio::test]
        async fn test_manual_scroll_updates_header_shadow() {
            let (mut app, _clock) = test_app();
            assert!(!app.state.header_scrolled);
            app.handle_key(key(KeyCode::PageDown)).unwrap();
            assert!(app.state.header_scrolled);
            app.handle_key(key(KeyCode::Home)).unwrap();
            assert!(!app.state.header_scrolled);
        }

        #[tokio::test]
        async fn test_tab_to_page_link_scrolls_it_into_view() {
            let (mut app, _clock) = test_app();
            let idx = page_link_index(LinkAction::OpenContactForm);
            app.state.focus = Some(FocusStop::PageLink(idx.saturating_sub(1)));
            app.handle_key(key(KeyCode::Tab)).unwrap();
            // The focused link lives far down the page
            assert!(app.state.scroll.is_animating());
        }
    }

    mod menu {
        use super::*;

        fn narrow_app() -> (App, Arc<ManualClock>) {
            let (mut app, clock) = test_app();
            app.terminal_size = Some((30, 60));
            (app, clock)
        }

        #[tokio::test]
        async fn test_toggle_key_opens_and_label_flips() {
            let (mut app, _clock) = narrow_app();
            assert_eq!(app.state.nav_toggle_label(), "فتح القائمة");
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            assert!(app.state.menu_open);
            assert_eq!(app.state.nav_toggle_label(), "إغلاق القائمة");
        }

        #[tokio::test]
        async fn test_escape_closes_menu() {
            let (mut app, _clock) = narrow_app();
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.menu_open);
        }

        #[tokio::test]
        async fn test_activating_menu_link_closes_menu_and_scrolls() {
            let (mut app, _clock) = narrow_app();
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            app.state.focus = Some(FocusStop::MenuLink(2));
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.menu_open);
            assert!(app.state.scroll.is_animating());
        }

        #[tokio::test]
        async fn test_click_outside_menu_closes_it() {
            let (mut app, _clock) = narrow_app();
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            let click = MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 1,
                row: 20,
                modifiers: KeyModifiers::NONE,
            };
            app.handle_mouse(click).unwrap();
            assert!(!app.state.menu_open);
        }

        #[tokio::test]
        async fn test_resize_to_wide_closes_menu_after_debounce() {
            let (mut app, clock) = narrow_app();
            app.handle_key(key(KeyCode::Char('m'))).unwrap();

            app.handle_resize(100, 30);
            app.tick().await.unwrap();
            // Debounce window still open
            assert!(app.state.menu_open);

            clock.advance(Duration::from_millis(300));
            app.tick().await.unwrap();
            assert!(!app.state.menu_open);
        }

        #[tokio::test]
        async fn test_resize_to_narrow_keeps_menu() {
            let (mut app, clock) = narrow_app();
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            app.handle_resize(50, 30);
            clock.advance(Duration::from_millis(300));
            app.tick().await.unwrap();
            assert!(app.state.menu_open);
        }
    }

    mod page_state {
        use super::*;

        #[tokio::test]
        async fn test_page_fades_in_after_load() {
            let (mut app, clock) = test_app();
            app.tick().await.unwrap();
            assert!(!app.state.page_load.is_ready());

            clock.advance(Duration::from_millis(500));
            app.tick().await.unwrap();
            assert!(app.state.page_load.is_ready());
        }

        #[tokio::test]
        async fn test_reduced_motion_skips_fade_and_scroll_animation() {
            let clock = ManualClock::new();
            let config = TuiConfig {
                reduced_motion: Some(true),
                ..Default::default()
            };
            let mut app =
                App::with_parts(config, Arc::new(ok_gateway()), clock.clone());
            app.terminal_size = Some((30, 100));
            assert!(app.state.page_load.is_ready());

            app.state.focus = Some(FocusStop::NavLink(6));
            app.handle_key(key(KeyCode::Enter)).unwrap();
            // Anchors jump instead of animating
            assert!(!app.state.scroll.is_animating());
            assert!(app.state.scroll.position() > 0.0);
        }

        #[tokio::test]
        async fn test_start_section_config_opens_scrolled() {
            let clock = ManualClock::new();
            let config = TuiConfig {
                start_section: Some("contact".to_string()),
                ..Default::default()
            };
            let app = App::with_parts(config, Arc::new(ok_gateway()), clock);
            let expected =
                ScrollState::anchor_target(document().section_top(SectionId::Contact));
            assert_eq!(app.state.scroll.position(), expected.min(app.state.max_scroll(app.viewport_rows())));
        }

        #[tokio::test]
        async fn test_click_on_body_link_activates_it() {
            let (mut app, _clock) = test_app();
            // Put the first in-page link at a known screen row
            let link_row = document().link_rows[0];
            assert!(matches!(
                document().lines[link_row as usize],
                DocLine::Link(0)
            ));
            let click = MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 40,
                row: HEADER_HEIGHT + link_row,
                modifiers: KeyModifiers::NONE,
            };
            app.handle_mouse(click).unwrap();
            // The first link is the hero call-to-action jumping to contact
            assert!(app.state.scroll.is_animating());
            assert_eq!(app.state.focus, Some(FocusStop::PageLink(0)));
        }

        #[tokio::test]
        async fn test_copy_contact_email_sets_feedback() {
            let (mut app, _clock) = test_app();
            let idx = page_link_index(LinkAction::CopyEmail);
            app.state.focus = Some(FocusStop::PageLink(idx));
            app.handle_key(key(KeyCode::Enter)).unwrap();
            // Either outcome surfaces feedback; headless CI has no clipboard
            assert!(app.copy_message.is_some());
        }
    }
}
