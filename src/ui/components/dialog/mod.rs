//! Dialog components for TUI

mod base;
mod confirmation_dialog;

pub use confirmation_dialog::render_confirmation_dialog;
