//! Application state definitions

use super::forms::{ContactForm, FieldDescriptor, FIELDS};

/// Which control currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Index into the field catalog
    Field(usize),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(0)
    }
}

impl Focus {
    pub fn next(&self) -> Self {
        match *self {
            Focus::Field(i) if i + 1 < FIELDS.len() => Focus::Field(i + 1),
            Focus::Field(_) => Focus::Submit,
            Focus::Submit => Focus::Field(0),
        }
    }

    pub fn prev(&self) -> Self {
        match *self {
            Focus::Field(0) => Focus::Submit,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::Submit => Focus::Field(FIELDS.len() - 1),
        }
    }

    /// Descriptor of the focused field, if focus is on a field
    pub fn descriptor(&self) -> Option<&'static FieldDescriptor> {
        match *self {
            Focus::Field(i) => FIELDS.get(i),
            Focus::Submit => None,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: ContactForm,
    pub focus: Focus,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: ContactForm::new(),
            focus: Focus::default(),
            show_help: true,
        }
    }
}

impl AppState {
    /// Move focus to `focus`, firing the focus event of the field it lands on
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if let Some(desc) = focus.descriptor() {
            tracing::trace!(field = desc.name, "Focus moved");
            self.form.on_field_focus(desc.error_key());
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }
}
