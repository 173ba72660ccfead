//! Form field value objects

/// Every field of the contact form that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    FirstName,
    LastName,
    Email,
    QueryType,
    Message,
    Consent,
}

impl FieldKey {
    pub const ALL: [FieldKey; 6] = [
        FieldKey::FirstName,
        FieldKey::LastName,
        FieldKey::Email,
        FieldKey::QueryType,
        FieldKey::Message,
        FieldKey::Consent,
    ];

    /// Wire name of the field, as used for input ids
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::QueryType => "queryType",
            Self::Message => "message",
            Self::Consent => "consent",
        }
    }
}

/// The free-text fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl TextField {
    pub fn key(&self) -> FieldKey {
        match self {
            Self::FirstName => FieldKey::FirstName,
            Self::LastName => FieldKey::LastName,
            Self::Email => FieldKey::Email,
            Self::Message => FieldKey::Message,
        }
    }
}

/// Query type radio options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    GeneralEnquiry,
    SupportRequest,
}

impl QueryType {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GeneralEnquiry => "generalEnquiry",
            Self::SupportRequest => "supportRequest",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::GeneralEnquiry => "General Enquiry",
            Self::SupportRequest => "Support Request",
        }
    }
}

/// Current values of all form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub query_type: Option<QueryType>,
    pub message: String,
    pub consent: bool,
}

impl FormData {
    /// Get the text value of a free-text field
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email,
            TextField::Message => &self.message,
        }
    }

    /// Mutable access to a free-text field
    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::Email => &mut self.email,
            TextField::Message => &mut self.message,
        }
    }
}

/// A value change coming from one input control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// Text input: replaces the whole value
    Text(TextField, String),
    /// Radio input: the option that became checked
    QueryType(QueryType),
    /// Checkbox input: the new checked state
    Consent(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_data_is_empty() {
        let data = FormData::default();
        assert!(data.first_name.is_empty());
        assert!(data.last_name.is_empty());
        assert!(data.email.is_empty());
        assert!(data.message.is_empty());
        assert_eq!(data.query_type, None);
        assert!(!data.consent);
    }

    #[test]
    fn test_text_mut_targets_matching_field() {
        let mut data = FormData::default();
        data.text_mut(TextField::Email).push_str("a@b.co");
        assert_eq!(data.email, "a@b.co");
        assert_eq!(data.text(TextField::Email), "a@b.co");
        assert!(data.first_name.is_empty());
    }

    #[test]
    fn test_text_field_keys() {
        assert_eq!(TextField::FirstName.key(), FieldKey::FirstName);
        assert_eq!(TextField::LastName.key(), FieldKey::LastName);
        assert_eq!(TextField::Email.key(), FieldKey::Email);
        assert_eq!(TextField::Message.key(), FieldKey::Message);
    }
}
