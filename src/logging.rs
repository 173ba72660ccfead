//! Tracing setup. Events go to a log file so they never draw over the TUI.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "contact-form-tui.log";

/// Non-blocking writer appending to `dir/LOG_FILE_NAME`, creating `dir`
pub fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Without a usable log directory
/// events are discarded. The returned guard flushes the file when dropped.
pub fn init(default_filter: &str, dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (writer, guard) = match dir.map(file_writer) {
        Some(Ok((writer, guard))) => (BoxMakeWriter::new(writer), Some(guard)),
        Some(Err(err)) => {
            eprintln!("Logging disabled: {err:#}");
            (BoxMakeWriter::new(io::sink), None)
        }
        None => (BoxMakeWriter::new(io::sink), None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    guard
}
