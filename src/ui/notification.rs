//! Toast notification overlay
//!
//! The toast hangs below the header near the left edge and slides in and
//! out horizontally, clipped at the screen edge while moving.

use crate::app::App;
use crate::notify::NotificationKind;
use crate::state::HEADER_HEIGHT;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Full toast width when on-screen
const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 3;

fn accent(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Info => Color::Blue,
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    }
}

/// Draw the live toast, if any
pub fn draw_notification(frame: &mut Frame, app: &App) {
    let Some(notification) = app.notifier.current() else {
        return;
    };
    let screen = frame.area();
    let progress = notification.slide_progress(app.last_tick);

    let full = TOAST_WIDTH.min(screen.width.saturating_sub(2));
    let visible = (full as f32 * progress).round() as u16;
    if visible < 2 {
        return;
    }

    let area = Rect {
        x: 0,
        y: HEADER_HEIGHT + 1,
        width: visible,
        height: TOAST_HEIGHT.min(screen.height.saturating_sub(HEADER_HEIGHT + 1)),
    };
    frame.render_widget(Clear, area);

    let color = accent(notification.kind);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let body = Paragraph::new(
        Line::from(Span::raw(notification.message.clone())).alignment(Alignment::Right),
    )
    .block(block);
    frame.render_widget(body, area);
}
