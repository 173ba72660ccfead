//! Tokio-backed banner timer

use super::traits::BannerScheduler;
use crate::app::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Runs each expiry as a tokio task that posts [`AppEvent::BannerExpired`]
/// back to the event loop.
///
/// The pending task is aborted when a new one is scheduled and when the
/// scheduler is dropped, so a torn-down app never receives a late expiry.
pub struct TokioBannerScheduler {
    events: UnboundedSender<AppEvent>,
    pending: Option<JoinHandle<()>>,
}

impl TokioBannerScheduler {
    pub fn new(events: UnboundedSender<AppEvent>) -> Self {
        Self {
            events,
            pending: None,
        }
    }

    /// Whether an expiry task is still running
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl BannerScheduler for TokioBannerScheduler {
    fn schedule(&mut self, after: Duration, generation: u64) {
        self.cancel();
        tracing::debug!(
            generation,
            delay_ms = after.as_millis() as u64,
            "Scheduling banner expiry"
        );

        let events = self.events.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if events.send(AppEvent::BannerExpired(generation)).is_err() {
                tracing::debug!(generation, "Event loop gone, dropping banner expiry");
            }
        }));
    }

    fn cancel(&mut self) {
        if self.is_pending() {
            tracing::debug!("Aborting pending banner expiry");
        }
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for TokioBannerScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
