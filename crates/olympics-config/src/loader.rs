//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for olympics_common::DashboardError {
    fn from(err: ConfigError) -> Self {
        olympics_common::DashboardError::config_with_source(err.to_string(), err)
    }
}

/// Environment variable holding the configuration file path
pub const CONFIG_PATH_VAR: &str = "OLYMPICS_CONFIG_PATH";

/// Files probed in the working directory when no path is given
pub const DEFAULT_CONFIG_FILES: &[&str] = &["dashboard.yaml", "dashboard.yml"];

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with_env(path, |var| env::var(var).ok())
    }

    /// Same as [`load_config`](Self::load_config) with an explicit variable lookup
    pub fn load_config_with_env<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        debug!(path = %path.as_ref().display(), "Reading configuration file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config, lookup)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from an explicit path, `OLYMPICS_CONFIG_PATH`,
    /// `./dashboard.yaml` or `./dashboard.yml`, falling back to defaults
    pub fn load(explicit: Option<&Path>) -> olympics_common::Result<Config> {
        Ok(Self::load_from(explicit, Path::new("."), |var| env::var(var).ok())?)
    }

    /// [`load`](Self::load) with the working directory and the environment
    /// supplied by the caller
    pub fn load_from<F>(explicit: Option<&Path>, dir: &Path, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::locate(explicit, dir, &lookup) {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration");
                Self::load_config_with_env(&path, &lookup)
            }
            None => {
                info!("No configuration file found, using defaults");
                Self::defaults_with_env(&lookup)
            }
        }
    }

    /// The file [`load_from`](Self::load_from) would read, if any
    pub fn locate<F>(explicit: Option<&Path>, dir: &Path, lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Some(path) = lookup(CONFIG_PATH_VAR).filter(|p| !p.is_empty()) {
            debug!(path = %path, "Configuration path from {}", CONFIG_PATH_VAR);
            return Some(PathBuf::from(path));
        }

        DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> olympics_common::Result<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Default configuration with environment overrides applied and validated
    pub fn defaults_with_env<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config, lookup)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("OLYMPICS_ATHLETES_PATH") {
            config.data.athletes_path = path;
        }

        if let Some(path) = lookup("OLYMPICS_REGIONS_PATH") {
            config.data.regions_path = path;
        }

        if let Some(host) = lookup("OLYMPICS_HOST") {
            config.server.host = host;
        }

        if let Some(port) = lookup("OLYMPICS_PORT") {
            config.server.port = parse_var("OLYMPICS_PORT", &port)?;
        }

        if let Some(sport) = lookup("OLYMPICS_DEFAULT_SPORT") {
            config.dashboard.default_sport = sport;
        }

        if let Some(locale) = lookup("OLYMPICS_LOCALE") {
            config.dashboard.locale = locale;
        }

        if let Some(level) = lookup("OLYMPICS_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(width) = lookup("OLYMPICS_GRAPH_WIDTH") {
            config.graph.width = parse_var("OLYMPICS_GRAPH_WIDTH", &width)?;
        }

        if let Some(height) = lookup("OLYMPICS_GRAPH_HEIGHT") {
            config.graph.height = parse_var("OLYMPICS_GRAPH_HEIGHT", &height)?;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}
