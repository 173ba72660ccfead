//! Contact Form TUI - a terminal contact form
//!
//! A Ratatui-based form with inline validation, focus-cleared errors
//! and a timed success banner.

mod app;
mod banner;
mod config;
mod logging;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::{App, AppEvent};
use banner::TokioBannerScheduler;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

#[tokio::main]
async fn main() -> Result<()> {
    let loaded = TuiConfig::load();

    // Initialize logging
    let default_filter = loaded
        .as_ref()
        .map(|c| c.log_filter().to_string())
        .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.to_string());
    let _log_guard = logging::init(&default_filter, TuiConfig::log_dir().as_deref());

    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
        TuiConfig::default()
    });
    let mouse_capture = config.mouse_capture();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, Box::new(TokioBannerScheduler::new(events_tx)));
    let result = run_app(&mut terminal, &mut app, events_rx).await;
    drop(app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_capture {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut events: UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let poll_duration = Duration::from_millis(100);

    loop {
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on next draw
                }
                _ => {}
            }
        }

        // Deliver timer events posted by background tasks
        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
