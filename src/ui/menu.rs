//! Collapsed navigation menu (narrow terminals)

use crate::app::App;
use crate::content::SectionId;
use crate::state::{FocusStop, HEADER_HEIGHT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Menu width in columns
const MENU_WIDTH: u16 = 24;

/// Screen area of the open dropdown menu; also used to detect outside clicks
pub fn menu_area(screen: Rect) -> Rect {
    let width = MENU_WIDTH.min(screen.width);
    Rect {
        x: screen.width.saturating_sub(width + 1),
        y: HEADER_HEIGHT,
        width,
        height: (SectionId::ALL.len() as u16 + 2).min(screen.height.saturating_sub(HEADER_HEIGHT)),
    }
}

/// Document row → menu link index, for mouse clicks inside the menu
pub fn link_at(screen: Rect, column: u16, row: u16) -> Option<usize> {
    let area = menu_area(screen);
    if column < area.x || column >= area.x + area.width {
        return None;
    }
    if row <= area.y || row >= area.y + area.height - 1 {
        return None;
    }
    let index = (row - area.y - 1) as usize;
    (index < SectionId::ALL.len()).then_some(index)
}

/// Draw the dropdown over the page body
pub fn draw_menu(frame: &mut Frame, app: &App) {
    let area = menu_area(frame.area());
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(index, id)| {
            let is_active = app.state.active_section == *id;
            let is_focused = app.state.focus == Some(FocusStop::MenuLink(index));
            let mut style = if is_active {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if is_focused {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(format!(" {} ", id.nav_label()), style))
                .alignment(Alignment::Right)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
