//! Visual grouping of catalog fields into rows.
//!
//! Grouping is layout only; validation never looks at it.

use crate::state::{find, index_of, FieldDescriptor, FieldKind};

/// Rows of field ids, top to bottom
pub const ROWS: &[&[&str]] = &[
    &["firstName", "lastName"],
    &["email"],
    &["generalEnquiry", "supportRequest"],
    &["message"],
    &["consent"],
];

/// Shape of a row, which decides its height and how errors are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShape {
    /// Bordered single-line inputs side by side, one error line each
    Inputs,
    /// Bordered multi-line input
    TextArea,
    /// Radio group: shared label line above, one shared error line below
    RadioGroup,
    /// Borderless checkbox line
    Checkbox,
}

/// Catalog indices of the fields in a row. Unknown ids are skipped.
pub fn row_indices(row: &[&str]) -> Vec<usize> {
    row.iter().filter_map(|id| index_of(id)).collect()
}

pub fn row_shape(row: &[&str]) -> RowShape {
    let descriptors: Vec<&FieldDescriptor> = row.iter().filter_map(|id| find(id)).collect();
    match descriptors.first().map(|d| d.kind) {
        Some(FieldKind::Radio(_)) => RowShape::RadioGroup,
        Some(FieldKind::Checkbox) => RowShape::Checkbox,
        _ if descriptors.iter().any(|d| d.is_multiline()) => RowShape::TextArea,
        _ => RowShape::Inputs,
    }
}
