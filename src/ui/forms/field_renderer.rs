//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything needed to draw one form field
pub struct FieldView<'a> {
    pub label: &'a str,
    /// Pre-styled content; text fields get a cursor appended when active
    pub content: Vec<Line<'a>>,
    pub is_active: bool,
    /// Whether the field takes free text (shows a cursor)
    pub is_text: bool,
    /// Error shown under the field
    pub error: Option<&'a str>,
    /// Gray helper text shown when there is no error
    pub hint: Option<&'a str>,
}

/// Draw a form field box and its helper line
pub fn draw_field(frame: &mut Frame, area: Rect, helper_area: Rect, field: FieldView) {
    let border_color = match (field.error.is_some(), field.is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };

    let mut lines = field.content;
    if field.is_active && field.is_text {
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor),
            None => lines.push(Line::from(cursor)),
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );

    let helper = match (field.error, field.hint) {
        (Some(error), _) => Span::styled(error, Style::default().fg(Color::Red)),
        (None, Some(hint)) if field.is_active => {
            Span::styled(hint, Style::default().fg(Color::DarkGray))
        }
        _ => Span::raw(""),
    };
    frame.render_widget(Paragraph::new(Line::from(vec![Span::raw(" "), helper])), helper_area);
}

/// Plain text content, split into lines, with a placeholder when empty
pub fn text_content<'a>(value: &str, placeholder: &'a str, is_active: bool) -> Vec<Line<'a>> {
    if value.is_empty() {
        if is_active {
            return vec![Line::from("")];
        }
        return vec![Line::from(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect()
}
