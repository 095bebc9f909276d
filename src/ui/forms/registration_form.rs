//! Student registration form rendering

use super::field_renderer::{draw_field, text_content, FieldView};
use crate::app::App;
use crate::state::{Course, FieldName, FormButton, Gender, ACTIONS_ROW};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::create_layout;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

/// Rows of a single-line field box (borders + content)
const FIELD_HEIGHT: u16 = 3;
/// Rows of the address box
const ADDRESS_HEIGHT: u16 = 5;
/// Widest the form is drawn
const FORM_MAX_WIDTH: u16 = 72;

/// Screen areas for one field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSlot {
    pub input: Rect,
    pub helper: Rect,
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Field(FieldName),
    Button(FormButton),
}

/// Placement of every field and button for a given screen size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub frame: Rect,
    /// Indexed by [`FieldName::index`]
    pub fields: [FieldSlot; 7],
    pub register: Rect,
    pub clear: Rect,
}

impl FormLayout {
    /// Lay out the form for the whole terminal area
    pub fn for_screen(screen: Rect) -> Self {
        let (_, main_area, _) = create_layout(screen);
        Self::new(main_area)
    }

    /// Lay out the form inside the main content area
    pub fn new(area: Rect) -> Self {
        let width = area.width.min(FORM_MAX_WIDTH);
        let frame = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };
        let inner = Block::default().borders(Borders::ALL).inner(frame);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),   // Name
                Constraint::Length(1),              // Name helper
                Constraint::Length(FIELD_HEIGHT),   // Mobile | Date of birth
                Constraint::Length(1),              // helpers
                Constraint::Length(FIELD_HEIGHT),   // Gender
                Constraint::Length(1),              // Gender helper
                Constraint::Length(FIELD_HEIGHT),   // Email
                Constraint::Length(1),              // Email helper
                Constraint::Length(FIELD_HEIGHT),   // Course
                Constraint::Length(1),              // Course helper
                Constraint::Length(ADDRESS_HEIGHT), // Address
                Constraint::Length(1),              // Address helper
                Constraint::Length(BUTTON_HEIGHT),  // Buttons
                Constraint::Min(0),
            ])
            .horizontal_margin(1)
            .split(inner);

        let split_pair = |row: Rect| {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(2)
                .split(row);
            (halves[0], halves[1])
        };
        let (mobile, dob) = split_pair(rows[2]);
        let (mobile_helper, dob_helper) = split_pair(rows[3]);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16),
                Constraint::Length(12),
                Constraint::Min(0),
            ])
            .spacing(2)
            .split(rows[12]);

        let slot = |input, helper| FieldSlot { input, helper };
        Self {
            frame,
            fields: [
                slot(rows[0], rows[1]),
                slot(mobile, mobile_helper),
                slot(dob, dob_helper),
                slot(rows[4], rows[5]),
                slot(rows[6], rows[7]),
                slot(rows[8], rows[9]),
                slot(rows[10], rows[11]),
            ],
            register: buttons[0],
            clear: buttons[1],
        }
    }

    pub fn slot(&self, field: FieldName) -> FieldSlot {
        self.fields[field.index()]
    }

    /// Find the field or button under a screen cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        if self.register.contains(pos) {
            return Some(HitTarget::Button(FormButton::Register));
        }
        if self.clear.contains(pos) {
            return Some(HitTarget::Button(FormButton::Clear));
        }
        FieldName::ALL
            .into_iter()
            .find(|f| {
                let slot = self.slot(*f);
                slot.input.contains(pos) || slot.helper.contains(pos)
            })
            .map(HitTarget::Field)
    }
}

/// Draw the registration form
pub fn draw_registration_form(frame: &mut Frame, area: Rect, app: &App) {
    let layout = FormLayout::new(area);
    let state = &app.state;

    let block = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, layout.frame);

    for field in FieldName::ALL {
        let is_active = state.active_field() == Some(field);
        let display = state.field_display_value(field);
        let content = match field {
            FieldName::Gender => gender_content(state.form.values().gender),
            FieldName::Course => course_content(state.form.values().course, is_active),
            FieldName::Dob => text_content(&display, "DD/MM/YYYY", is_active),
            _ => text_content(&display, "", is_active),
        };
        let slot = layout.slot(field);

        draw_field(
            frame,
            slot.input,
            slot.helper,
            FieldView {
                label: field.label(),
                content,
                is_active,
                is_text: !matches!(field, FieldName::Gender | FieldName::Course),
                error: state.form.display_error(field),
                hint: field_hint(field),
            },
        );
    }

    let on_actions = state.active_form_field == ACTIONS_ROW;
    let busy = state.form.is_submitting();
    render_button(
        frame,
        layout.register,
        FormButton::Register.label(),
        on_actions && state.form_selected_button == FormButton::Register,
        !busy,
        Some(Color::Green),
    );
    render_button(
        frame,
        layout.clear,
        FormButton::Clear.label(),
        on_actions && state.form_selected_button == FormButton::Clear,
        !busy,
        Some(Color::Gray),
    );
}

fn field_hint(field: FieldName) -> Option<&'static str> {
    match field {
        FieldName::Mobile => Some("10 digits"),
        FieldName::Dob => Some("DD/MM/YYYY"),
        FieldName::Email => Some("name@example.com"),
        FieldName::Address => Some("Enter adds a new line"),
        _ => None,
    }
}

/// Radio row: `(•) Female  ( ) Male  ( ) Other`
fn gender_content(selected: Option<Gender>) -> Vec<Line<'static>> {
    let spans = Gender::ALL
        .iter()
        .flat_map(|g| {
            let is_selected = selected == Some(*g);
            let (mark, style) = if is_selected {
                (
                    "(•) ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("( ) ", Style::default().fg(Color::Gray))
            };
            [
                Span::styled(format!("{mark}{}", g.label()), style),
                Span::raw("   "),
            ]
        })
        .collect::<Vec<_>>();
    vec![Line::from(spans)]
}

/// Dropdown: selected course with arrows when focused
fn course_content(selected: Option<Course>, is_active: bool) -> Vec<Line<'static>> {
    let (text, style) = match selected {
        Some(course) => (course.label(), Style::default().fg(Color::White)),
        None => ("Select a course", Style::default().fg(Color::DarkGray)),
    };
    let mut spans = Vec::new();
    if is_active {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled(text, style));
    spans.push(Span::styled(
        if is_active { " ▶" } else { " ▾" },
        Style::default().fg(Color::DarkGray),
    ));
    vec![Line::from(spans)]
}
