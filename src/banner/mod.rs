//! Success banner expiry scheduling

mod scheduler;
mod traits;

pub use scheduler::TokioBannerScheduler;
pub use traits::BannerScheduler;

#[cfg(test)]
pub use traits::MockBannerScheduler;
