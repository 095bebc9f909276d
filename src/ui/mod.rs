//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

pub use forms::{FormLayout, HitTarget};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);
    forms::draw_registration_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if let Some(summary) = &app.state.confirmation {
        components::render_confirmation_dialog(frame, summary);
    }
}
