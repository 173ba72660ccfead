//! Reusable UI components

mod banner;
mod button;

pub use banner::{render_banner, BannerConfig, BANNER_HEIGHT};
pub use button::{render_button, BUTTON_HEIGHT};
