//! Contact form state and its change/focus/submit transitions

use super::field::{FieldChange, FieldKey, FormData};
use super::validator::{validate, ErrorMap};
use std::time::Duration;

/// Message shown in the success banner title
pub const SUCCESS_MESSAGE: &str = "Message Sent!";

/// How long the success banner stays up after a valid submission
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_millis(5000);

/// Outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid and has been reset. The banner for `generation`
    /// should be expired after [`SUCCESS_BANNER_DURATION`].
    Accepted { generation: u64 },
    /// Validation failed; errors are now visible
    Rejected { error_count: usize },
}

/// Owner of the form values, the error map and the banner flags
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    data: FormData,
    errors: ErrorMap,
    submitted: bool,
    alert_message: Option<String>,
    banner_generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn alert_message(&self) -> Option<&str> {
        self.alert_message.as_deref()
    }

    /// The success banner is shown only while both flags are set
    pub fn banner_visible(&self) -> bool {
        self.submitted && self.alert_message.is_some()
    }

    /// Apply a value change from an input. Never validates.
    pub fn on_field_change(&mut self, change: FieldChange) {
        match change {
            FieldChange::Text(field, value) => *self.data.text_mut(field) = value,
            FieldChange::QueryType(option) => self.data.query_type = Some(option),
            FieldChange::Consent(checked) => self.data.consent = checked,
        }
    }

    /// Hide the error of a field that regained focus.
    ///
    /// The field is not re-validated, so it may still be invalid until the
    /// next submit.
    pub fn on_field_focus(&mut self, key: FieldKey) {
        tracing::debug!("Focus event on: {}", key.name());
        self.errors.remove(key);
    }

    /// Validate and either commit (reset + banner) or surface the errors
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let validation = validate(&self.data);
        if validation.is_valid() {
            self.errors = validation.errors;
            self.submitted = true;
            self.alert_message = Some(SUCCESS_MESSAGE.to_string());
            self.data = FormData::default();
            self.banner_generation += 1;
            tracing::info!(generation = self.banner_generation, "Contact form submitted");
            SubmitOutcome::Accepted {
                generation: self.banner_generation,
            }
        } else {
            let error_count = validation.errors.len();
            self.errors = validation.errors;
            self.submitted = false;
            SubmitOutcome::Rejected { error_count }
        }
    }

    /// Hide the success banner if `generation` is still the latest one.
    ///
    /// Returns false when the expiry is stale and nothing changed.
    pub fn expire_banner(&mut self, generation: u64) -> bool {
        if generation != self.banner_generation {
            tracing::debug!(
                generation,
                current = self.banner_generation,
                "Ignoring stale banner expiry"
            );
            return false;
        }
        self.alert_message = None;
        self.submitted = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{FieldError, QueryType, TextField};

    fn fill_valid(form: &mut ContactForm) {
        form.on_field_change(FieldChange::Text(TextField::FirstName, "Jo".into()));
        form.on_field_change(FieldChange::Text(TextField::LastName, "Li".into()));
        form.on_field_change(FieldChange::Text(TextField::Email, "a@b.co".into()));
        form.on_field_change(FieldChange::QueryType(QueryType::GeneralEnquiry));
        form.on_field_change(FieldChange::Text(TextField::Message, "0123456789".into()));
        form.on_field_change(FieldChange::Consent(true));
    }

    mod change {
        use super::*;

        #[test]
        fn test_text_change_sets_value() {
            let mut form = ContactForm::new();
            form.on_field_change(FieldChange::Text(TextField::Message, "hello".into()));
            assert_eq!(form.data().message, "hello");
        }

        #[test]
        fn test_radio_change_replaces_query_type() {
            let mut form = ContactForm::new();
            form.on_field_change(FieldChange::QueryType(QueryType::GeneralEnquiry));
            form.on_field_change(FieldChange::QueryType(QueryType::SupportRequest));
            assert_eq!(form.data().query_type, Some(QueryType::SupportRequest));
        }

        #[test]
        fn test_checkbox_change_sets_consent() {
            let mut form = ContactForm::new();
            form.on_field_change(FieldChange::Consent(true));
            assert!(form.data().consent);
            form.on_field_change(FieldChange::Consent(false));
            assert!(!form.data().consent);
        }

        #[test]
        fn test_change_does_not_touch_errors() {
            let mut form = ContactForm::new();
            form.on_submit();
            let before = form.errors().clone();
            form.on_field_change(FieldChange::Text(TextField::FirstName, "Jo".into()));
            assert_eq!(form.errors(), &before);
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_focus_clears_only_that_error() {
            let mut form = ContactForm::new();
            form.on_submit();
            assert_eq!(form.errors().len(), 6);

            form.on_field_focus(FieldKey::Email);

            assert!(!form.errors().contains(FieldKey::Email));
            assert_eq!(form.errors().len(), 5);
        }

        #[test]
        fn test_focus_hides_error_without_revalidating() {
            let mut form = ContactForm::new();
            form.on_field_change(FieldChange::Text(TextField::FirstName, "A".into()));
            form.on_submit();
            assert!(form.errors().contains(FieldKey::FirstName));

            form.on_field_focus(FieldKey::FirstName);

            assert_eq!(form.data().first_name, "A");
            assert_eq!(form.errors().get(FieldKey::FirstName), None);
        }

        #[test]
        fn test_focus_without_error_is_noop() {
            let mut form = ContactForm::new();
            form.on_field_focus(FieldKey::Consent);
            assert!(form.errors().is_empty());
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn test_invalid_submit_surfaces_errors() {
            let mut form = ContactForm::new();
            fill_valid(&mut form);
            form.on_field_change(FieldChange::Text(TextField::FirstName, String::new()));

            let outcome = form.on_submit();

            assert_eq!(outcome, SubmitOutcome::Rejected { error_count: 1 });
            assert_eq!(
                form.errors().get(FieldKey::FirstName),
                Some(&FieldError::Required)
            );
            assert!(!form.submitted);
            assert!(!form.banner_visible());
            assert_eq!(form.data().last_name, "Li");
        }

        #[test]
        fn test_valid_submit_resets_and_shows_banner() {
            let mut form = ContactForm::new();
            fill_valid(&mut form);

            let outcome = form.on_submit();

            assert_eq!(outcome, SubmitOutcome::Accepted { generation: 1 });
            assert_eq!(form.data(), &FormData::default());
            assert!(form.errors().is_empty());
            assert!(form.submitted);
            assert_eq!(form.alert_message(), Some(SUCCESS_MESSAGE));
            assert!(form.banner_visible());
        }

        #[test]
        fn test_resubmit_replaces_error_map() {
            let mut form = ContactForm::new();
            form.on_submit();
            fill_valid(&mut form);
            form.on_field_change(FieldChange::Consent(false));

            form.on_submit();

            let keys: Vec<_> = form.errors().keys().collect();
            assert_eq!(keys, vec![FieldKey::Consent]);
        }

        #[test]
        fn test_generation_increments_per_success() {
            let mut form = ContactForm::new();
            fill_valid(&mut form);
            form.on_submit();
            fill_valid(&mut form);
            assert_eq!(form.on_submit(), SubmitOutcome::Accepted { generation: 2 });
        }

        #[test]
        fn test_success_banner_duration() {
            assert_eq!(SUCCESS_BANNER_DURATION, Duration::from_millis(5000));
        }
    }

    mod banner {
        use super::*;

        #[test]
        fn test_expire_hides_banner_only() {
            let mut form = ContactForm::new();
            fill_valid(&mut form);
            let SubmitOutcome::Accepted { generation } = form.on_submit() else {
                panic!("expected accepted submission");
            };
            form.on_field_change(FieldChange::Text(TextField::Email, "x".into()));

            assert!(form.expire_banner(generation));

            assert!(!form.banner_visible());
            assert!(!form.submitted);
            assert_eq!(form.alert_message(), None);
            assert_eq!(form.data().email, "x");
        }

        #[test]
        fn test_stale_expiry_is_ignored() {
            let mut form = ContactForm::new();
            fill_valid(&mut form);
            form.on_submit();
            fill_valid(&mut form);
            form.on_submit();

            assert!(!form.expire_banner(1));
            assert!(form.banner_visible());
            assert!(form.expire_banner(2));
        }

        #[test]
        fn test_rejected_submit_hides_banner() {
            let mut form = ContactForm::new();
            fill_valid(&mut form);
            form.on_submit();
            assert!(form.banner_visible());

            form.on_submit();

            assert!(!form.banner_visible());
            assert_eq!(form.alert_message(), Some(SUCCESS_MESSAGE));
        }
    }
}
