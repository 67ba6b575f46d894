//! Contact form view: bordered fields with inline Arabic errors

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{ContactField, SENDING_LABEL, SUBMIT_LABEL};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows per single-line field: bordered input (3) + inline error line (1)
const FIELD_ROWS: u16 = 4;
/// Rows for the message field: taller input (5) + inline error line (1)
const MESSAGE_ROWS: u16 = 6;

/// Draw the contact form view
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // title + hint
            Constraint::Length(FIELD_ROWS),   // name
            Constraint::Length(FIELD_ROWS),   // email
            Constraint::Length(FIELD_ROWS),   // phone
            Constraint::Length(FIELD_ROWS),   // subject
            Constraint::Length(MESSAGE_ROWS), // message
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "نموذج التواصل",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        Line::from(Span::styled(
            format!("{SUBMIT_SHORTCUT}: إرسال — Esc: رجوع"),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right),
    ]);
    frame.render_widget(title, chunks[0]);

    for (idx, field) in form.fields().iter().enumerate() {
        let is_active = form.active_index() == idx;
        draw_field(frame, chunks[idx + 1], field, is_active);
    }

    // Submit control; disabled and relabelled while the round trip runs
    let label = if form.sending {
        SENDING_LABEL
    } else {
        SUBMIT_LABEL
    };
    let button_area = centered_button(chunks[6]);
    render_button(
        frame,
        button_area,
        label,
        form.is_on_submit_row(),
        !form.sending,
    );
}

/// Shrink the button row to a centered control
fn centered_button(area: Rect) -> Rect {
    let width = 24.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Draw one form field with its label, value, cursor and error line
fn draw_field(frame: &mut Frame, area: Rect, field: &ContactField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = field
            .value
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value.clone(), value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let required_mark = if field.required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.label, required_mark))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    // Inline error line, right-aligned below the field
    if let Some(reason) = field.error {
        let error = Paragraph::new(Line::from(Span::styled(
            reason.to_string(),
            Style::default().fg(Color::Red),
        ))
        .alignment(Alignment::Right));
        frame.render_widget(error, chunks[1]);
    }
}

/// Map a click row inside the form area onto a form row index
/// (fields 0..=4, submit control = 5)
pub fn row_at(area: Rect, click_row: u16) -> Option<usize> {
    if click_row < area.y {
        return None;
    }
    let rel = click_row - area.y;
    let field_block = 2; // title rows
    let offsets = [
        field_block,
        field_block + FIELD_ROWS,
        field_block + 2 * FIELD_ROWS,
        field_block + 3 * FIELD_ROWS,
        field_block + 4 * FIELD_ROWS,
        field_block + 4 * FIELD_ROWS + MESSAGE_ROWS,
        field_block + 4 * FIELD_ROWS + MESSAGE_ROWS + BUTTON_HEIGHT,
    ];
    for idx in 0..6 {
        if rel >= offsets[idx] && rel < offsets[idx + 1] {
            return Some(idx);
        }
    }
    None
}
