//! Form rendering module
//!
//! - `field_renderer`: Field box and helper line rendering
//! - `registration_form`: Student registration form layout and drawing

mod field_renderer;
mod registration_form;

pub use registration_form::{draw_registration_form, FormLayout, HitTarget};
