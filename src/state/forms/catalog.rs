//! Static catalog of the contact form inputs

use super::field::{FieldKey, QueryType, TextField};

/// How an input is rendered and which value it edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { field: TextField, multiline: bool },
    Radio(QueryType),
    /// The consent checkbox
    Checkbox,
}

/// Metadata describing one renderable input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: FieldKind,
    /// Label shown above the control (radio options after the first have none)
    pub label: Option<&'static str>,
    /// Text shown next to the control
    pub about: Option<&'static str>,
    pub required: bool,
}

impl FieldDescriptor {
    /// The error-map key this input reports to and clears on focus
    pub fn error_key(&self) -> FieldKey {
        match self.kind {
            FieldKind::Text { field, .. } => field.key(),
            FieldKind::Radio(_) => FieldKey::QueryType,
            FieldKind::Checkbox => FieldKey::Consent,
        }
    }

    /// Id of the element carrying this input's error text
    pub fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Text { multiline: true, .. })
    }
}

const fn text(
    id: &'static str,
    field: TextField,
    label: &'static str,
    multiline: bool,
) -> FieldDescriptor {
    FieldDescriptor {
        id,
        name: id,
        kind: FieldKind::Text { field, multiline },
        label: Some(label),
        about: None,
        required: true,
    }
}

const fn radio(option: QueryType, label: Option<&'static str>, required: bool) -> FieldDescriptor {
    FieldDescriptor {
        id: option.name(),
        name: option.name(),
        kind: FieldKind::Radio(option),
        label,
        about: Some(option.label()),
        required,
    }
}

/// All inputs in tab order
pub static FIELDS: [FieldDescriptor; 7] = [
    text("firstName", TextField::FirstName, "First Name", false),
    text("lastName", TextField::LastName, "Last Name", false),
    text("email", TextField::Email, "Email Address", false),
    radio(QueryType::GeneralEnquiry, Some("Query Type"), true),
    radio(QueryType::SupportRequest, None, false),
    text("message", TextField::Message, "Message", true),
    FieldDescriptor {
        id: "consent",
        name: "consent",
        kind: FieldKind::Checkbox,
        label: None,
        about: Some("I hereby consent to being contacted by the team"),
        required: true,
    },
];

/// Look up a descriptor by its id
pub fn find(id: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|f| f.id == id)
}

/// Position of a descriptor in tab order
pub fn index_of(id: &str) -> Option<usize> {
    FIELDS.iter().position(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = FIELDS.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), FIELDS.len());
    }

    #[test]
    fn test_every_error_key_has_an_input() {
        let keys: HashSet<_> = FIELDS.iter().map(|f| f.error_key()).collect();
        for key in FieldKey::ALL {
            assert!(keys.contains(&key), "no input for {key:?}");
        }
    }

    #[test]
    fn test_radios_report_query_type() {
        let radios: Vec<_> = FIELDS.iter()
            .filter(|f| matches!(f.kind, FieldKind::Radio(_)))
            .collect();
        assert_eq!(radios.len(), 2);
        assert!(radios.iter().all(|f| f.error_key() == FieldKey::QueryType));
    }

    #[test]
    fn test_only_message_is_multiline() {
        let multiline: Vec<_> = FIELDS.iter().filter(|f| f.is_multiline()).map(|f| f.id).collect();
        assert_eq!(multiline, vec!["message"]);
    }

    #[test]
    fn test_find_and_index_of() {
        assert_eq!(find("email").map(|f| f.error_key()), Some(FieldKey::Email));
        assert_eq!(index_of("consent"), Some(6));
        assert!(find("phone").is_none());
    }

    #[test]
    fn test_error_id() {
        let desc = find("firstName").unwrap();
        assert_eq!(desc.error_id(), "firstName-error");
    }
}
