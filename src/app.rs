//! Application state and core logic

use crate::state::{AppState, FieldName, FormButton, SubmitError, ACTIONS_ROW};
use crate::submission::ConfirmationNotifier;
use crate::ui::{FormLayout, HitTarget};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedReceiver;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Sink that receives accepted registrations
    notifier: ConfirmationNotifier,
    /// Confirmations waiting to be shown
    confirmations: UnboundedReceiver<String>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        let (notifier, confirmations) = ConfirmationNotifier::channel();
        Self {
            state: AppState::default(),
            notifier,
            confirmations,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Move any pending confirmation into the dialog slot
    pub fn drain_confirmations(&mut self) {
        while let Ok(summary) = self.confirmations.try_recv() {
            self.state.confirmation = Some(summary);
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.confirmation.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_confirmation();
            }
            return Ok(());
        }

        let on_action_panel = self.state.is_action_row_active();
        let on_choice = matches!(
            self.state.active_field(),
            Some(FieldName::Gender | FieldName::Course)
        );
        let is_shortcut = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            KeyCode::Down => self.state.next_form_field(),
            KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Left | KeyCode::Right if on_action_panel => self.state.next_button(),
            KeyCode::Left if on_choice => self.state.cycle_choice(false),
            KeyCode::Right if on_choice => self.state.cycle_choice(true),
            KeyCode::Enter if on_action_panel => match self.state.form_selected_button {
                FormButton::Register => self.submit().await,
                FormButton::Clear => {
                    self.state.clear_form();
                    self.state.status_message = Some("Form cleared".to_string());
                }
            },
            KeyCode::Enter => {
                if self.state.active_field() == Some(FieldName::Address) {
                    self.state.form_newline();
                } else {
                    self.state.next_form_field();
                }
            }
            KeyCode::Char(c) if !on_action_panel && !is_shortcut => self
                .state
                .form_input_char(c, key.modifiers.contains(KeyModifiers::SHIFT)),
            KeyCode::Backspace if !on_action_panel => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event: clicks focus fields and press buttons
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.confirmation.is_some() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.state.dismiss_confirmation();
            }
            return Ok(());
        }

        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };
        let Some((height, width)) = self.terminal_size else {
            return Ok(());
        };

        let layout = FormLayout::for_screen(Rect::new(0, 0, width, height));
        match layout.hit_test(mouse.column, mouse.row) {
            Some(HitTarget::Field(field)) => self.state.focus(field.index()),
            Some(HitTarget::Button(button)) => {
                self.state.focus(ACTIONS_ROW);
                self.state.form_selected_button = button;
                match button {
                    FormButton::Register => self.submit().await,
                    FormButton::Clear => self.state.clear_form(),
                }
            }
            None => {}
        }
        Ok(())
    }

    /// Submit the form and report the outcome in the status bar
    async fn submit(&mut self) {
        match self.state.form.submit(&self.notifier).await {
            Ok(receipt) => {
                self.state.dob_draft.clear();
                self.state.active_form_field = 0;
                self.state.form_selected_button = FormButton::default();
                self.state.status_message = Some(format!(
                    "Registration {} received",
                    &receipt.id.simple().to_string()[..8]
                ));
            }
            Err(SubmitError::Rejected(errors)) => {
                // Jump to the first field that needs fixing
                if let Some((field, _)) = errors.iter().next() {
                    self.state.focus(field.index());
                }
                self.state.status_message =
                    Some(format!("Please fix {} field(s) before registering", errors.len()));
            }
            Err(err @ SubmitError::InProgress) => {
                self.state.status_message = Some(err.to_string());
            }
        }
        self.drain_confirmations();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
