//! Persistent user preferences.

pub mod manager;
pub mod model;

pub use manager::{ConfigManager, HOME_ENV};
pub use model::{Config, CHART_WIDTH_RANGE};
