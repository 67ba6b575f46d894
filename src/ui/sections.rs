//! Page body: the scrolled document of sections and cards

use crate::app::App;
use crate::content::{document, DocLine};
use crate::state::{FocusStop, PageLoadPhase};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the page body with the current scroll offset
pub fn draw_page(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.page_load.phase() == PageLoadPhase::Hidden {
        return;
    }

    let lines: Vec<Line> = document()
        .lines
        .iter()
        .map(|line| render_line(app, line, area.width))
        .collect();

    let mut paragraph = Paragraph::new(lines).scroll((app.state.scroll.row(), 0));
    if app.state.page_load.phase() == PageLoadPhase::FadingIn {
        paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
    }
    frame.render_widget(paragraph, area);
}

fn render_line<'a>(app: &App, line: &'a DocLine, width: u16) -> Line<'a> {
    let doc = document();
    match line {
        DocLine::Blank => Line::default(),
        DocLine::SectionTitle(id) => Line::from(Span::styled(
            id.nav_label(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        DocLine::Rule => Line::from(Span::styled(
            "─".repeat(width as usize),
            Style::default().fg(Color::DarkGray),
        )),
        DocLine::Text(text) => {
            Line::from(Span::raw(*text)).alignment(Alignment::Right)
        }
        DocLine::CardTitle { card, text } => Line::from(Span::styled(
            format!("◆ {text}"),
            card_style(app, *card, true),
        ))
        .alignment(Alignment::Right),
        DocLine::CardBody { card, text } => {
            Line::from(Span::styled(*text, card_style(app, *card, false)))
                .alignment(Alignment::Right)
        }
        DocLine::Link(index) => {
            let link = &doc.links[*index];
            let focused = app.state.focus == Some(FocusStop::PageLink(*index));
            let mut style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED);
            if focused {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            Line::from(Span::styled(format!("‹ {} ›", link.label), style))
                .alignment(Alignment::Right)
        }
        DocLine::ContactInfo(text) => Line::from(vec![
            Span::styled(*text, Style::default().fg(Color::Gray)),
            Span::styled(" •", Style::default().fg(Color::Green)),
        ])
        .alignment(Alignment::Right),
    }
}

/// Style of a card row given its reveal progress: hidden cards render as
/// blank space, revealing cards fade in through grey
fn card_style(app: &App, card: usize, is_title: bool) -> Style {
    let progress = app
        .state
        .reveals
        .get(card)
        .map(|r| r.progress(app.last_tick))
        .unwrap_or(1.0);

    if progress <= 0.0 {
        // Not revealed yet: keep the row but hide the glyphs
        return Style::default().fg(Color::Black).add_modifier(Modifier::HIDDEN);
    }
    let base = if is_title {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    if progress < 1.0 {
        base.add_modifier(Modifier::DIM)
    } else {
        base
    }
}

/// Map a click in the body area onto a focusable page link
pub fn link_at(app: &App, row_in_body: u16) -> Option<usize> {
    let doc_row = app.state.scroll.row().checked_add(row_in_body)?;
    doc_row_link(doc_row)
}

fn doc_row_link(doc_row: u16) -> Option<usize> {
    let doc = document();
    doc.link_rows
        .iter()
        .position(|&row| row == doc_row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_row_link_finds_links() {
        let doc = document();
        let first = doc.link_rows[0];
        assert_eq!(doc_row_link(first), Some(0));
        assert_eq!(doc_row_link(first + 1), None);
    }
}
