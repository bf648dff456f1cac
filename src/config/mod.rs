// Configuration layer - environment-driven settings
pub mod database;
pub mod logging;
pub mod settings;

pub use logging::init_logging;
pub use settings::{AppSettings, ConfigError};
