//! Configuration management for the Olympics dashboard

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader, CONFIG_PATH_VAR, DEFAULT_CONFIG_FILES};
pub use settings::{
    Config, DashboardSettings, DataSettings, GraphSettings, LoggingSettings, ServerSettings,
};
