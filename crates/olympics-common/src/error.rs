//! Error types and utilities for the dashboard

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unusable input data
    #[error("Data error{}: {message}", line_suffix(.line))]
    Data {
        message: String,
        line: Option<u64>,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Localization errors
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        locale: Option<String>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// A requested item (sport, figure) does not exist
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl DashboardError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new data error
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
            line: None,
            source: None,
        }
    }

    /// Create a new data error pointing at an input line
    pub fn data_at_line(msg: impl Into<String>, line: u64) -> Self {
        Self::Data {
            message: msg.into(),
            line: Some(line),
            source: None,
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: None,
        }
    }

    /// Create a new localization error with locale
    pub fn localization_with_locale(msg: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: Some(locale.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Whether this error was caused by a request for something that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convert from csv::Error to DashboardError, keeping the offending line
impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        let message = match err.kind() {
            csv::ErrorKind::Io(_) => "CSV read failed".to_string(),
            csv::ErrorKind::Deserialize { .. } => "CSV record has an unexpected value".to_string(),
            csv::ErrorKind::UnequalLengths { .. } => "CSV record has the wrong number of fields".to_string(),
            csv::ErrorKind::Utf8 { .. } => "CSV record is not valid UTF-8".to_string(),
            _ => "CSV parsing failed".to_string(),
        };
        Self::Data {
            message,
            line,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to DashboardError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for DashboardError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = DashboardError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = DashboardError::config("config issue");
        assert_eq!(config_error.to_string(), "Configuration error: config issue");

        let validation_error = DashboardError::validation_field("Invalid input", "port");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid input"));

        let localization_error =
            DashboardError::localization_with_locale("Translation missing", "sv-SE");
        assert!(localization_error.to_string().contains("Localization error"));
    }

    #[test]
    fn test_data_error_mentions_line() {
        let error = DashboardError::data_at_line("bad medal value", 42);
        assert_eq!(error.to_string(), "Data error at line 42: bad medal value");

        let error = DashboardError::data("empty file");
        assert_eq!(error.to_string(), "Data error: empty file");
    }

    #[test]
    fn test_not_found() {
        let error = DashboardError::not_found("sport 'Quidditch'");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Not found: sport 'Quidditch'");
        assert!(!DashboardError::new("x").is_not_found());
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = DashboardError::with_source("Failed to read file", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read file"));
        assert!(wrapped_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: DashboardError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
        let error: DashboardError = serde_error.into();

        assert!(error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_csv_error_conversion_keeps_line() {
        let data = "a,b\n1,2\n3\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let err = reader
            .records()
            .find_map(std::result::Result::err)
            .expect("short record should fail");

        let error: DashboardError = err.into();
        match &error {
            DashboardError::Data { line, .. } => assert_eq!(*line, Some(3)),
            other => panic!("expected data error, got {other:?}"),
        }
        assert!(error.to_string().contains("wrong number of fields"));
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = DashboardError::config_with_source("Middle layer", root_error);
        let top_error = DashboardError::with_source("Top layer", middle_error);

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;
        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert_eq!(error_count, 2);
    }
}
