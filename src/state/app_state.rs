//! Application state definitions

use super::forms::{
    cycle_option, parse_date, Course, FieldName, FieldValue, FormStateController, Gender,
};

/// Longest accepted date of birth draft (`DD/MM/YYYY`)
const DATE_DRAFT_LEN: usize = 10;

/// Number of focus stops: seven fields plus the action row
pub const FORM_FOCUS_COUNT: usize = FieldName::ALL.len() + 1;

/// Index of the action row in the focus order
pub const ACTIONS_ROW: usize = FieldName::ALL.len();

/// Buttons on the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Register,
    Clear,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Clear => "Clear",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Registration form core
    pub form: FormStateController,
    /// Focused stop: a field index, or [`ACTIONS_ROW`]
    pub active_form_field: usize,
    /// Selected button when the action row is focused
    pub form_selected_button: FormButton,
    /// Raw date of birth text; the form only sees the parsed date
    pub dob_draft: String,
    /// Confirmation text of the last accepted registration, shown as a dialog
    pub confirmation: Option<String>,
    /// One-line feedback for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Field that currently has focus, `None` on the action row
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_form_field)
    }

    pub fn is_action_row_active(&self) -> bool {
        self.active_form_field == ACTIONS_ROW
    }

    /// Move focus to a stop, blurring the field being left
    pub fn focus(&mut self, index: usize) {
        let index = index.min(ACTIONS_ROW);
        if index == self.active_form_field {
            return;
        }
        if let Some(field) = self.active_field() {
            self.form.on_field_blur(field);
        }
        self.active_form_field = index;
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.focus((self.active_form_field + 1) % FORM_FOCUS_COUNT);
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.focus(FORM_FOCUS_COUNT - 1);
        } else {
            self.focus(self.active_form_field - 1);
        }
    }

    /// Toggle between the action row buttons
    pub fn next_button(&mut self) {
        self.form_selected_button = match self.form_selected_button {
            FormButton::Register => FormButton::Clear,
            FormButton::Clear => FormButton::Register,
        };
    }

    /// Handle character input for the focused field
    pub fn form_input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };

        match self.active_field() {
            Some(FieldName::Dob) => {
                if (ch.is_ascii_digit() || ch == '/') && self.dob_draft.len() < DATE_DRAFT_LEN {
                    self.dob_draft.push(ch);
                    self.sync_dob();
                }
            }
            Some(FieldName::Gender) => {
                let choice = match ch.to_ascii_lowercase() {
                    'f' => Some(Gender::Female),
                    'm' => Some(Gender::Male),
                    'o' => Some(Gender::Other),
                    ' ' => cycle_option(&Gender::ALL, self.form.values().gender, true),
                    _ => return,
                };
                self.change(FieldName::Gender, FieldValue::Gender(choice));
            }
            Some(FieldName::Course) => {
                if ch == ' ' {
                    self.cycle_choice(true);
                }
            }
            Some(field) => {
                let mut text = self.form.values().text(field).unwrap_or_default().to_string();
                text.push(ch);
                self.change(field, FieldValue::Text(text));
            }
            None => {}
        }
    }

    /// Handle backspace for the focused field
    pub fn form_backspace(&mut self) {
        match self.active_field() {
            Some(FieldName::Dob) => {
                if self.dob_draft.pop().is_some() {
                    self.sync_dob();
                }
            }
            Some(FieldName::Gender) => self.change(FieldName::Gender, FieldValue::Gender(None)),
            Some(FieldName::Course) => self.change(FieldName::Course, FieldValue::Course(None)),
            Some(field) => {
                let mut text = self.form.values().text(field).unwrap_or_default().to_string();
                if text.pop().is_some() {
                    self.change(field, FieldValue::Text(text));
                }
            }
            None => {}
        }
    }

    /// Insert a line break into the focused multiline field
    pub fn form_newline(&mut self) {
        if let Some(field) = self.active_field().filter(FieldName::is_multiline) {
            let mut text = self.form.values().text(field).unwrap_or_default().to_string();
            text.push('\n');
            self.change(field, FieldValue::Text(text));
        }
    }

    /// Step the focused radio group or dropdown
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.active_field() {
            Some(FieldName::Gender) => {
                let next = cycle_option(&Gender::ALL, self.form.values().gender, forward);
                self.change(FieldName::Gender, FieldValue::Gender(next));
            }
            Some(FieldName::Course) => {
                let next = cycle_option(&Course::ALL, self.form.values().course, forward);
                self.change(FieldName::Course, FieldValue::Course(next));
            }
            _ => {}
        }
    }

    /// Clear the form and renderer-side drafts
    pub fn clear_form(&mut self) {
        self.form.reset();
        self.dob_draft.clear();
        self.active_form_field = 0;
        self.form_selected_button = FormButton::default();
    }

    /// Text shown inside a field's box
    pub fn field_display_value(&self, field: FieldName) -> String {
        match field {
            FieldName::Dob => self.dob_draft.clone(),
            _ => self.form.values().get(field).display_value(),
        }
    }

    pub fn dismiss_confirmation(&mut self) {
        self.confirmation = None;
    }

    fn sync_dob(&mut self) {
        let parsed = parse_date(&self.dob_draft);
        self.change(FieldName::Dob, FieldValue::Date(parsed));
    }

    fn change(&mut self, field: FieldName, value: FieldValue) {
        if let Err(err) = self.form.on_field_change(field, value) {
            self.status_message = Some(err.to_string());
        }
    }
}
