//! Trait abstraction for the banner timer to enable mocking in tests

use std::time::Duration;

/// Schedules the one-shot expiry of the success banner
#[cfg_attr(test, mockall::automock)]
pub trait BannerScheduler: Send {
    /// Arrange for the banner of `generation` to expire after `after`.
    /// Replaces any expiry still pending.
    fn schedule(&mut self, after: Duration, generation: u64);

    /// Drop the pending expiry, if any
    fn cancel(&mut self);
}
