//! Contact form rendering

use super::a11y::FieldA11y;
use super::field_renderer::{
    draw_checkbox, draw_error, draw_group_label, draw_radio_option, draw_text_field,
};
use super::rows::RowShape;
use crate::state::{AppState, FieldKind, Focus, FIELDS};
use crate::ui::components::render_button;
use crate::ui::layout::FormLayout;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the form block, every field with its error text, and the submit button
pub fn draw_contact_form(frame: &mut Frame, layout: &FormLayout, state: &AppState) {
    let block = Block::default()
        .title(" Contact Us ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, layout.form);

    let data = state.form.data();
    let errors = state.form.errors();

    for row in &layout.rows {
        if let (Some(label_area), Some(&first)) = (row.label, row.fields.first()) {
            draw_group_label(frame, label_area, &FIELDS[first]);
        }

        for &idx in &row.fields {
            let desc = &FIELDS[idx];
            let area = layout.fields[idx];
            let a11y = FieldA11y::for_field(desc, errors);
            let is_active = state.focus == Focus::Field(idx);

            match desc.kind {
                FieldKind::Text { field, .. } => {
                    draw_text_field(frame, area.control, desc, data.text(field), is_active, &a11y)
                }
                FieldKind::Radio(option) => draw_radio_option(
                    frame,
                    area.control,
                    desc,
                    data.query_type == Some(option),
                    is_active,
                    &a11y,
                ),
                FieldKind::Checkbox => {
                    draw_checkbox(frame, area.control, desc, data.consent, is_active, &a11y)
                }
            }
        }

        // Radio options share one error line, drawn once
        let error_fields: &[usize] = if row.shape == RowShape::RadioGroup {
            &row.fields[..row.fields.len().min(1)]
        } else {
            &row.fields
        };
        for &idx in error_fields {
            let desc = &FIELDS[idx];
            if let Some(id) = FieldA11y::for_field(desc, errors).described_by {
                tracing::trace!(%id, "Drawing field error");
                let message = errors.message(desc.error_key());
                draw_error(frame, layout.fields[idx].error, message.as_deref());
            }
        }
    }

    render_button(
        frame,
        layout.submit,
        "Submit",
        state.focus == Focus::Submit,
        Some(Color::Green),
    );
}
