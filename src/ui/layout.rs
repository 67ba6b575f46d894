//! Layout components (header/body split, status bar)

use crate::app::App;
use crate::state::{FocusStop, View, HEADER_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header bar, page body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header bar
            Constraint::Min(0),                // Page body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Active section indicator
    spans.push(Span::styled(
        format!(" ◈ {} ", app.state.active_section.nav_label()),
        Style::default().fg(Color::Green),
    ));

    // Keyboard hints
    if app.config.show_hints() {
        spans.push(Span::styled(
            get_view_hints(app),
            Style::default().fg(Color::Gray),
        ));
    }

    // Copy feedback
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:خروج ";
    let quit_width = quit_hint.chars().count() as u16;
    if area.width < quit_width {
        return;
    }
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_width),
        y: area.height.saturating_sub(1),
        width: quit_width,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view and focus
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::ContactForm => {
            "Tab:التالي  Enter:إرسال  Ctrl+S:إرسال  Esc:رجوع".to_string()
        }
        View::Page => match app.state.focus {
            Some(FocusStop::SkipLink) => "Enter:انتقل إلى المحتوى".to_string(),
            Some(FocusStop::NavToggle) => "Enter:القائمة  Esc:إغلاق".to_string(),
            Some(FocusStop::NavLink(_)) | Some(FocusStop::MenuLink(_)) => {
                "Enter:انتقال  Tab:التالي".to_string()
            }
            Some(FocusStop::PageLink(_)) => "Enter:تفعيل  Tab:التالي".to_string(),
            None => "j/k:تمرير  Tab:تنقل  m:القائمة".to_string(),
        },
    }
}
