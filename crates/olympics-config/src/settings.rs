//! Application configuration structures

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Input datasets
    #[validate]
    pub data: DataSettings,

    /// HTTP server binding
    #[validate]
    pub server: ServerSettings,

    /// What the dashboard shows
    #[validate]
    pub dashboard: DashboardSettings,

    /// Graph rendering settings
    #[validate]
    pub graph: GraphSettings,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

/// Dataset locations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DataSettings {
    /// Path to `athlete_events.csv`
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Athletes path must be a usable file path"
    ))]
    pub athletes_path: String,

    /// Path to `noc_regions.csv`
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Regions path must be a usable file path"
    ))]
    pub regions_path: String,

    /// NOCs whose athlete names are replaced by digests on top of GER, GDR
    /// and FRG, which are always anonymized
    #[validate(custom(
        function = "crate::validation::validate_noc_codes",
        message = "NOC codes must be three uppercase letters"
    ))]
    pub anonymized_nocs: Vec<String>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,

    /// TCP port to bind
    #[validate(range(min = 1, message = "Port must be between 1 and 65535"))]
    pub port: u16,
}

/// Dashboard content configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DashboardSettings {
    /// Team name used by the country statistics figure
    #[validate(length(min = 1, message = "Country cannot be empty"))]
    pub country: String,

    /// NOC of the focus country
    #[validate(length(equal = 3, message = "NOC must be three characters"))]
    pub noc: String,

    /// Sport selected when the page first loads
    #[validate(length(min = 1, message = "Default sport cannot be empty"))]
    pub default_sport: String,

    /// Sports offered in the drop-down
    #[validate(length(min = 1, message = "At least one sport option is required"))]
    pub sport_options: Vec<String>,

    /// How many entries ranking figures keep
    #[validate(range(min = 1, max = 50, message = "Top N must be between 1 and 50"))]
    pub top_n: usize,

    /// Games shown in the divided-Germany sex split
    #[validate(length(min = 1, message = "At least one division year is required"))]
    pub division_years: Vec<i32>,

    /// Sport used by the medal efficiency and medal distribution figures
    #[validate(length(min = 1, message = "Efficiency sport cannot be empty"))]
    pub efficiency_sport: String,

    /// Label locale (en-US or sv-SE)
    #[validate(custom(
        function = "crate::validation::validate_locale",
        message = "Locale must be one of: en-US, sv-SE"
    ))]
    pub locale: String,
}

/// Graph rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GraphSettings {
    /// Panel width in pixels
    #[validate(range(min = 200, max = 4000, message = "Width must be between 200 and 4000 pixels"))]
    pub width: u32,

    /// Panel height in pixels
    #[validate(range(min = 200, max = 4000, message = "Height must be between 200 and 4000 pixels"))]
    pub height: u32,

    /// Background color (hex format)
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Background color must be valid hex color"
    ))]
    pub background_color: String,

    /// Font family for text rendering
    #[validate(length(min = 1, message = "Font family cannot be empty"))]
    pub font_family: String,

    /// Font size for labels
    #[validate(range(min = 8, max = 72, message = "Font size must be between 8 and 72"))]
    pub font_size: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level or filter directives (`info`, `info,olympics_data=trace`)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be a level (trace, debug, info, warn, error) or filter directives"
    ))]
    pub level: String,

    /// Optional log file path
    pub file: Option<String>,

    /// One JSON object per event
    pub json: bool,

    /// Colored multi-line console output
    pub colored: bool,
}

impl Config {
    /// Field validation followed by the cross-field checks
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        self.dashboard.validate_selection()?;
        Ok(())
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            athletes_path: "athlete_events.csv".to_string(),
            regions_path: "noc_regions.csv".to_string(),
            anonymized_nocs: Vec::new(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            country: "Germany".to_string(),
            noc: "GER".to_string(),
            default_sport: "Ski Jumping".to_string(),
            sport_options: ["Ski Jumping", "Swimming", "Biathlon", "Football"]
                .into_iter()
                .map(String::from)
                .collect(),
            top_n: 10,
            division_years: vec![1968, 1972, 1980, 1988],
            efficiency_sport: "Ski Jumping".to_string(),
            locale: "en-US".to_string(),
        }
    }
}

impl DashboardSettings {
    /// The default sport has to be one of the drop-down options
    pub fn validate_selection(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self.sport_options.contains(&self.default_sport) {
            let mut err = ValidationError::new("default_sport_not_offered");
            err.message = Some("Default sport must be one of the sport options".into());
            errors.add("default_sport", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            background_color: "#FFFFFF".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 14,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            json: false,
            colored: true,
        }
    }
}

impl From<&LoggingSettings> for olympics_common::LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            json_format: settings.json,
            pretty_format: settings.colored && settings.file.is_none(),
            file_path: settings.file.clone(),
            ..Self::default()
        }
    }
}
