//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

pub use layout::FormLayout;

use crate::app::App;
use crate::state::{FieldKind, Focus, SUCCESS_MESSAGE};
use components::{render_banner, BannerConfig};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let form = &app.state.form;
    let layout = FormLayout::compute(frame.area(), form.banner_visible());

    if let Some(banner_area) = layout.banner {
        render_banner(
            frame,
            banner_area,
            BannerConfig {
                title: form.alert_message().unwrap_or(SUCCESS_MESSAGE),
                ..Default::default()
            },
        );
    }

    forms::draw_contact_form(frame, &layout, &app.state);

    draw_status_bar(frame, layout.status, app);
}

/// Draw the status bar with key hints for the focused control
fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if !app.state.show_help {
        return;
    }

    let hints = get_focus_hints(app.state.focus);
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused control
fn get_focus_hints(focus: Focus) -> String {
    let submit = crate::platform::SUBMIT_SHORTCUT;
    match focus.descriptor().map(|d| d.kind) {
        Some(FieldKind::Text {
            multiline: true, ..
        }) => format!("Tab:next  Enter:newline  {submit}:submit"),
        Some(FieldKind::Text { .. }) => format!("Tab:next  Enter:submit  {submit}:submit"),
        Some(FieldKind::Radio(_)) => format!("Tab:next  Space:select  {submit}:submit"),
        Some(FieldKind::Checkbox) => format!("Tab:next  Space:toggle  {submit}:submit"),
        None => "Tab:next  Enter:submit".to_string(),
    }
}
