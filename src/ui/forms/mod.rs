//! Form rendering module
//!
//! - `a11y`: per-field validity attributes
//! - `field_renderer`: text, radio and checkbox controls
//! - `rows`: visual grouping of the field catalog
//! - `contact_form`: the contact form itself

mod a11y;
mod contact_form;
mod field_renderer;
pub mod rows;

pub use contact_form::draw_contact_form;
