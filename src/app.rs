//! Application state and core logic

use crate::banner::BannerScheduler;
use crate::config::TuiConfig;
use crate::state::{AppState, FieldChange, FieldKind, Focus, SubmitOutcome, SUCCESS_BANNER_DURATION};
use crate::ui::FormLayout;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Events delivered to the app from outside the terminal input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The success banner of the given submission generation has timed out
    BannerExpired(u64),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Timer for hiding the success banner
    banner: Box<dyn BannerScheduler>,
    /// Loaded user configuration
    config: TuiConfig,
    /// Whether config changes are written back to disk
    persist_config: bool,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, banner: Box<dyn BannerScheduler>) -> Self {
        let mut state = AppState::default();
        state.show_help = config.show_help();

        Self {
            state,
            banner,
            config,
            persist_config: true,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle an event posted by a background task
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::BannerExpired(generation) => {
                if self.state.form.expire_banner(generation) {
                    tracing::debug!(generation, "Success banner hidden");
                }
            }
        }
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Enter if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit()
            }
            KeyCode::F(1) => self.toggle_help(),
            KeyCode::Tab | KeyCode::Down => self.state.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus_prev(),
            _ => self.handle_focused_key(key),
        }
        Ok(())
    }

    /// Keys whose meaning depends on the focused control
    fn handle_focused_key(&mut self, key: KeyEvent) {
        let Some(desc) = self.state.focus.descriptor() else {
            // Submit button
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.submit();
            }
            return;
        };

        match desc.kind {
            FieldKind::Text { field, multiline } => {
                let mut value = self.state.form.data().text(field).to_string();
                match key.code {
                    KeyCode::Enter if multiline => value.push('\n'),
                    KeyCode::Enter => {
                        self.submit();
                        return;
                    }
                    KeyCode::Backspace => {
                        if value.pop().is_none() {
                            return;
                        }
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        value.push(c)
                    }
                    _ => return,
                }
                self.state.form.on_field_change(FieldChange::Text(field, value));
            }
            FieldKind::Radio(option) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.state.form.on_field_change(FieldChange::QueryType(option))
                }
                KeyCode::Left | KeyCode::Right => self.toggle_radio_focus(),
                _ => {}
            },
            FieldKind::Checkbox => match key.code {
                KeyCode::Char(' ') => self.toggle_consent(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if !self.config.mouse_capture() {
            return Ok(());
        }
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };

        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        let layout = FormLayout::compute(
            Rect::new(0, 0, width, height),
            self.state.form.banner_visible(),
        );
        let Some(target) = layout.hit_test(mouse.column, mouse.row) else {
            return Ok(());
        };

        self.state.set_focus(target);
        match target.descriptor().map(|d| d.kind) {
            Some(FieldKind::Radio(option)) => {
                self.state.form.on_field_change(FieldChange::QueryType(option))
            }
            Some(FieldKind::Checkbox) => self.toggle_consent(),
            Some(FieldKind::Text { .. }) => {}
            None => self.submit(),
        }
        Ok(())
    }

    /// Submit the form, scheduling the banner expiry on success
    fn submit(&mut self) {
        match self.state.form.on_submit() {
            SubmitOutcome::Accepted { generation } => {
                self.banner.schedule(SUCCESS_BANNER_DURATION, generation);
            }
            SubmitOutcome::Rejected { error_count } => {
                let fields: Vec<_> = self.state.form.errors().keys().map(|k| k.name()).collect();
                tracing::debug!(error_count, ?fields, "Contact form rejected");
            }
        }
    }

    fn toggle_consent(&mut self) {
        let checked = !self.state.form.data().consent;
        self.state.form.on_field_change(FieldChange::Consent(checked));
    }

    /// Arrow keys move between the two radio options
    fn toggle_radio_focus(&mut self) {
        let Focus::Field(idx) = self.state.focus else {
            return;
        };
        let sibling = [idx + 1, idx.wrapping_sub(1)].into_iter().find(|&i| {
            matches!(
                crate::state::FIELDS.get(i).map(|d| d.kind),
                Some(FieldKind::Radio(_))
            )
        });
        if let Some(sibling) = sibling {
            self.state.set_focus(Focus::Field(sibling));
        }
    }

    fn toggle_help(&mut self) {
        self.state.show_help = !self.state.show_help;
        self.config.show_help = Some(self.state.show_help);
        if self.persist_config {
            if let Err(err) = self.config.save() {
                tracing::warn!("Failed to save config: {err:#}");
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.banner.cancel();
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::banner::MockBannerScheduler;

    /// App with a scheduler that accepts any call and never touches disk
    pub fn test_app() -> App {
        let mut scheduler = MockBannerScheduler::new();
        scheduler.expect_schedule().returning(|_, _| ());
        scheduler.expect_cancel().returning(|| ());
        app_with(scheduler)
    }

    pub fn app_with(scheduler: MockBannerScheduler) -> App {
        let mut app = App::new(TuiConfig::default(), Box::new(scheduler));
        app.persist_config = false;
        app.terminal_size = Some((40, 80));
        app
    }
}
