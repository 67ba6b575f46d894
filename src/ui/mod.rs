//! UI module for rendering the TUI

mod components;
mod contact;
mod header;
mod layout;
mod menu;
mod notification;
mod sections;

pub use contact::row_at as contact_row_at;
pub use header::{nav_link_spans, toggle_span};
pub use menu::link_at as menu_link_at;
pub use sections::link_at as body_link_at;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, body_area) = layout::create_layout(area);

    match app.state.current_view {
        View::Page => {
            sections::draw_page(frame, body_area, app);
        }
        View::ContactForm => {
            contact::draw_contact_form(frame, body_area, app);
        }
    }

    // Header sits above the body; the dropdown and toast overlay both
    header::draw_header(frame, header_area, app);
    if app.state.menu_open && header::is_narrow(area.width) {
        menu::draw_menu(frame, app);
    }
    notification::draw_notification(frame, app);

    layout::draw_status_bar(frame, app);
}
