//! Per-field validity attributes for assistive technology

use crate::state::{ErrorMap, FieldDescriptor};

/// Validity state of one input, mirroring `aria-invalid` and `aria-describedby`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldA11y {
    pub invalid: bool,
    /// Id of the element holding the error text, only while invalid
    pub described_by: Option<String>,
}

impl FieldA11y {
    pub fn for_field(desc: &FieldDescriptor, errors: &ErrorMap) -> Self {
        let invalid = errors.contains(desc.error_key());
        Self {
            invalid,
            described_by: invalid.then(|| desc.error_id()),
        }
    }
}
