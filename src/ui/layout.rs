//! Screen layout shared by drawing and mouse hit-testing

use super::components::{BANNER_HEIGHT, BUTTON_HEIGHT};
use super::forms::rows::{row_indices, row_shape, RowShape, ROWS};
use crate::state::{Focus, FIELDS};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Rows taken by the message text area (with borders)
const TEXT_AREA_HEIGHT: u16 = 6;
/// Rows taken by a bordered single-line input
const INPUT_HEIGHT: u16 = 3;

/// Where one field's control and error text are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldArea {
    pub control: Rect,
    pub error: Rect,
}

/// Areas of one visual row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowArea {
    pub shape: RowShape,
    /// Group label line (radio rows only)
    pub label: Option<Rect>,
    /// Catalog indices placed in this row, left to right
    pub fields: Vec<usize>,
}

/// Every area of the contact form screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub banner: Option<Rect>,
    pub form: Rect,
    pub rows: Vec<RowArea>,
    /// Indexed like the field catalog
    pub fields: Vec<FieldArea>,
    pub submit: Rect,
    pub status: Rect,
}

impl FormLayout {
    /// Compute the layout for a terminal area
    pub fn compute(area: Rect, banner_visible: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if banner_visible { BANNER_HEIGHT } else { 0 }),
                Constraint::Min(0),    // Form
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let form = chunks[1];
        // Inside the form block border plus one column of padding
        let inner = Rect {
            x: form.x.saturating_add(2),
            y: form.y.saturating_add(1),
            width: form.width.saturating_sub(4),
            height: form.height.saturating_sub(2),
        };

        let mut constraints: Vec<Constraint> = ROWS
            .iter()
            .map(|row| Constraint::Length(row_height(row_shape(row))))
            .collect();
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        constraints.push(Constraint::Min(0));

        let row_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let mut fields = vec![FieldArea::default(); FIELDS.len()];
        let mut rows = Vec::with_capacity(ROWS.len());

        for (row, &row_rect) in ROWS.iter().zip(row_chunks.iter()) {
            let shape = row_shape(row);
            let indices = row_indices(row);
            let (label, control_rect, error_rect) = split_row(row_rect, shape);

            let controls = split_columns(control_rect, indices.len());
            let errors = split_columns(error_rect, indices.len());
            for (n, &idx) in indices.iter().enumerate() {
                fields[idx] = FieldArea {
                    control: controls[n],
                    // Radio options share one error line spanning the row
                    error: if shape == RowShape::RadioGroup {
                        error_rect
                    } else {
                        errors[n]
                    },
                };
            }

            rows.push(RowArea {
                shape,
                label,
                fields: indices,
            });
        }

        let submit = row_chunks[ROWS.len()];

        Self {
            banner: banner_visible.then_some(chunks[0]),
            form,
            rows,
            fields,
            submit,
            status: chunks[2],
        }
    }

    /// Control under a screen position, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Focus> {
        let pos = Position::new(column, row);
        if self.submit.contains(pos) {
            return Some(Focus::Submit);
        }
        self.fields
            .iter()
            .position(|area| area.control.contains(pos))
            .map(Focus::Field)
    }
}

fn row_height(shape: RowShape) -> u16 {
    match shape {
        RowShape::Inputs => INPUT_HEIGHT + 1,
        RowShape::TextArea => TEXT_AREA_HEIGHT + 1,
        RowShape::RadioGroup => 1 + INPUT_HEIGHT + 1,
        RowShape::Checkbox => 2,
    }
}

/// Split a row into (label, control, error) bands
fn split_row(area: Rect, shape: RowShape) -> (Option<Rect>, Rect, Rect) {
    let label_height = if shape == RowShape::RadioGroup { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(label_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let label = (label_height > 0).then_some(chunks[0]);
    (label, chunks[1], chunks[2])
}

fn split_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .spacing(2)
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::index_of;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 40)
    }

    #[test]
    fn test_no_banner_area_when_hidden() {
        let layout = FormLayout::compute(screen(), false);
        assert!(layout.banner.is_none());
        assert_eq!(layout.form.y, 0);
    }

    #[test]
    fn test_banner_pushes_form_down() {
        let layout = FormLayout::compute(screen(), true);
        assert_eq!(layout.banner.map(|b| b.height), Some(BANNER_HEIGHT));
        assert_eq!(layout.form.y, BANNER_HEIGHT);
    }

    #[test]
    fn test_status_bar_is_last_line() {
        let layout = FormLayout::compute(screen(), false);
        assert_eq!(layout.status, Rect::new(0, 39, 80, 1));
    }

    #[test]
    fn test_name_fields_share_a_row() {
        let layout = FormLayout::compute(screen(), false);
        let first = layout.fields[0].control;
        let last = layout.fields[1].control;
        assert_eq!(first.y, last.y);
        assert!(first.right() <= last.x);
        assert_eq!(first.height, INPUT_HEIGHT);
    }

    #[test]
    fn test_radio_options_share_error_line() {
        let layout = FormLayout::compute(screen(), false);
        let general = index_of("generalEnquiry").unwrap();
        let support = index_of("supportRequest").unwrap();
        assert_eq!(layout.fields[general].error, layout.fields[support].error);
        assert!(layout.rows[2].label.is_some());
    }

    #[test]
    fn test_message_is_tall() {
        let layout = FormLayout::compute(screen(), false);
        let message = index_of("message").unwrap();
        assert_eq!(layout.fields[message].control.height, TEXT_AREA_HEIGHT);
    }

    #[test]
    fn test_hit_test_finds_controls() {
        let layout = FormLayout::compute(screen(), false);
        for (idx, area) in layout.fields.iter().enumerate() {
            let hit = layout.hit_test(area.control.x, area.control.y);
            assert_eq!(hit, Some(Focus::Field(idx)));
        }
        let submit = layout.submit;
        assert_eq!(layout.hit_test(submit.x + 1, submit.y + 1), Some(Focus::Submit));
    }

    #[test]
    fn test_hit_test_misses_border_and_errors() {
        let layout = FormLayout::compute(screen(), false);
        assert_eq!(layout.hit_test(0, 0), None);
        let error = layout.fields[0].error;
        assert_eq!(layout.hit_test(error.x, error.y), None);
    }
}
