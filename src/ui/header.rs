//! Fixed header bar: brand, navigation links, menu toggle, skip link
//!
//! The bar is laid out right-to-left: the brand sits at the right edge and
//! the nav links run leftwards from it, so the first section is the
//! rightmost link. On narrow terminals the links collapse behind a toggle.

use crate::app::App;
use crate::content::{SectionId, SKIP_LINK_LABEL};
use crate::state::{FocusStop, NAV_BREAKPOINT_COLS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Site brand shown at the right edge of the header
const BRAND: &str = "نخلة";
/// Columns between adjacent header items
const LINK_GAP: u16 = 3;

/// Horizontal span of one header item, for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpan {
    /// Index into `SectionId::ALL`
    pub index: usize,
    pub x_start: u16,
    pub x_end: u16,
}

/// Display width approximation; Arabic glyphs take one cell each
fn text_width(text: &str) -> u16 {
    text.chars().count() as u16
}

/// Whether the nav collapses behind a toggle at this terminal width
pub fn is_narrow(width: u16) -> bool {
    width < NAV_BREAKPOINT_COLS
}

/// Column spans of the inline nav links, right-to-left from the brand.
/// Empty on narrow terminals (the links live in the dropdown menu there).
pub fn nav_link_spans(width: u16) -> Vec<LinkSpan> {
    if is_narrow(width) {
        return Vec::new();
    }
    let mut spans = Vec::new();
    // Right border + brand + gap
    let mut cursor = width.saturating_sub(1 + text_width(BRAND) + LINK_GAP);
    for (index, id) in SectionId::ALL.iter().enumerate() {
        let w = text_width(id.nav_label());
        if cursor < w + 1 {
            break;
        }
        let x_start = cursor - w;
        spans.push(LinkSpan {
            index,
            x_start,
            x_end: cursor,
        });
        cursor = x_start.saturating_sub(LINK_GAP);
    }
    spans
}

/// Column span of the menu toggle on narrow terminals
pub fn toggle_span(app: &App, width: u16) -> (u16, u16) {
    let label = toggle_text(app);
    let w = text_width(&label);
    let x_end = width.saturating_sub(1 + text_width(BRAND) + LINK_GAP);
    (x_end.saturating_sub(w), x_end)
}

fn toggle_text(app: &App) -> String {
    format!("☰ {}", app.state.nav_toggle_label())
}

/// Draw the header bar
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    // The scrolled header gets a heavier border, standing in for the shadow
    let (border_type, border_style) = if app.state.header_scrolled {
        (BorderType::Thick, Style::default().fg(Color::Gray))
    } else {
        (BorderType::Plain, Style::default().fg(Color::DarkGray))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Too narrow for brand and links; keep the bare bar
    if area.width < 16 {
        return;
    }

    // Skip link: hidden until focused, then it covers the header content
    if app.state.focus == Some(FocusStop::SkipLink) {
        let banner = Paragraph::new(Line::from(Span::styled(
            format!(" {SKIP_LINK_LABEL} ⏎ "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(banner, inner);
        return;
    }

    let width = area.width;
    let row = inner.y;

    // Brand at the right edge
    let brand_w = text_width(BRAND);
    let brand_area = Rect {
        x: width.saturating_sub(1 + brand_w),
        y: row,
        width: brand_w,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        brand_area,
    );

    if is_narrow(width) {
        // Menu toggle with its accessible label
        let label = toggle_text(app);
        let (x_start, x_end) = toggle_span(app, width);
        let focused = app.state.focus == Some(FocusStop::NavToggle);
        let style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::REVERSED)
        } else if app.state.menu_open {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let toggle_area = Rect {
            x: x_start,
            y: row,
            width: x_end - x_start,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Span::styled(label, style)), toggle_area);
        return;
    }

    // Inline nav links, right-to-left
    for span in nav_link_spans(width) {
        let id = SectionId::ALL[span.index];
        let is_active = app.state.active_section == id;
        let is_focused = app.state.focus == Some(FocusStop::NavLink(span.index));
        let mut style = if is_active {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        if is_focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let link_area = Rect {
            x: span.x_start,
            y: row,
            width: span.x_end - span.x_start,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Span::styled(id.nav_label(), style)), link_area);
    }
}
