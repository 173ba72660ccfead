//! Form domain layer
//!
//! Field catalog, validation rules and the controller that owns the
//! contact form values.

mod catalog;
mod field;
mod form_state;
mod validator;

pub use catalog::{find, index_of, FieldDescriptor, FieldKind, FIELDS};
pub use field::{FieldChange, FieldKey, FormData, QueryType, TextField};
pub use form_state::{ContactForm, SubmitOutcome, SUCCESS_BANNER_DURATION, SUCCESS_MESSAGE};
pub use validator::{ErrorMap, FieldError};
