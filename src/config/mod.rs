pub mod constants;
pub mod settings;

pub use constants::{API_URL, DEFAULT_CACHE_INTERVAL_SECS, PROMPT};
pub use settings::Settings;
