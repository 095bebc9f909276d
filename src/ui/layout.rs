//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{FieldName, FormButton, SubmitPhase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HEADER_HEIGHT: u16 = 2;

/// Split the screen into header, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Title
            Constraint::Min(0),                // Form
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the form heading
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Student Registration Form",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    spans.push(Span::styled(
        get_focus_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        let color = match app.state.form.phase() {
            SubmitPhase::Rejected => Color::LightRed,
            SubmitPhase::Idle | SubmitPhase::Submitting => Color::Green,
        };
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused stop
fn get_focus_hints(app: &App) -> &'static str {
    if app.state.confirmation.is_some() {
        return "Enter/Esc:dismiss";
    }
    match app.state.active_field() {
        Some(FieldName::Gender) => "Tab:next  ←/→ or f/m/o:choose  ^S:register",
        Some(FieldName::Course) => "Tab:next  ←/→/Space:choose  ^S:register",
        Some(FieldName::Dob) => "Tab:next  DD/MM/YYYY  ^S:register",
        Some(FieldName::Address) => "Tab:next  Enter:newline  ^S:register",
        Some(_) => "Tab:next  Shift+Tab:prev  ^S:register",
        None => match app.state.form_selected_button {
            FormButton::Register => "←/→:button  Enter:register",
            FormButton::Clear => "←/→:button  Enter:clear form",
        },
    }
}
