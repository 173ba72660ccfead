//! Field-by-field validation of the contact form

use super::field::{FieldKey, FormData};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

pub const NAME_LENGTH: (usize, usize) = (2, 50);
pub const MESSAGE_LENGTH: (usize, usize) = (10, 500);

/// A rule violation; `Display` is the message shown under the field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("{label} must be between {min} and {max} characters")]
    Length {
        label: &'static str,
        min: usize,
        max: usize,
    },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select a query type")]
    MissingQueryType,
    #[error("To submit this form, please consent to being contacted")]
    ConsentRequired,
}

/// Current validation errors keyed by field; a missing key means no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldKey, FieldError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FieldKey, error: FieldError) {
        self.0.insert(key, error);
    }

    pub fn remove(&mut self, key: FieldKey) -> Option<FieldError> {
        self.0.remove(&key)
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldError> {
        self.0.get(&key)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.0.contains_key(&key)
    }

    /// User-facing message for a field, if it has an error
    pub fn message(&self, key: FieldKey) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of validating one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: ErrorMap,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a form snapshot. Every rule is checked; none short-circuits another.
pub fn validate(data: &FormData) -> Validation {
    let mut errors = ErrorMap::new();
    for key in FieldKey::ALL {
        if let Some(error) = check_field(key, data) {
            errors.insert(key, error);
        }
    }
    Validation { errors }
}

/// Check the rule of a single field
pub fn check_field(key: FieldKey, data: &FormData) -> Option<FieldError> {
    match key {
        FieldKey::FirstName => check_name(&data.first_name, "First name"),
        FieldKey::LastName => check_name(&data.last_name, "Last Name"),
        FieldKey::Email => check_email(&data.email),
        FieldKey::QueryType => data
            .query_type
            .is_none()
            .then_some(FieldError::MissingQueryType),
        FieldKey::Message => check_message(&data.message),
        FieldKey::Consent => (!data.consent).then_some(FieldError::ConsentRequired),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn check_name(value: &str, label: &'static str) -> Option<FieldError> {
    check_length(value, label, NAME_LENGTH)
}

fn check_message(value: &str) -> Option<FieldError> {
    check_length(value, "Message", MESSAGE_LENGTH)
}

fn check_length(
    value: &str,
    label: &'static str,
    (min, max): (usize, usize),
) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::Required);
    }
    // UTF-16 code units, as browsers count string length
    let len = value.encode_utf16().count();
    if len < min || len > max {
        Some(FieldError::Length { label, min, max })
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<FieldError> {
    if is_valid_email(value) {
        None
    } else {
        Some(FieldError::InvalidEmail)
    }
}
