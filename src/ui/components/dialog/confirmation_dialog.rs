//! Registration confirmation dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the submitted-values summary centered on the screen
pub fn render_confirmation_dialog(frame: &mut Frame, summary: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to continue"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Registered",
            title_color: Color::Green,
            border_color: Color::Green,
            message: summary,
            hint: Some(hint),
            max_width: 64,
        },
    );
}
