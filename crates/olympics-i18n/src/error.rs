//! Error types for localization

use thiserror::Error;

/// Errors that can occur while building or querying bundles
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource for {locale}: {errors:?}")]
    FluentParseError { locale: String, errors: Vec<String> },

    /// Message not found in any bundle
    #[error("Message not found: {key}")]
    MessageNotFound { key: String },

    /// Failed to format a message
    #[error("Failed to format message '{key}': {errors:?}")]
    MessageFormatError { key: String, errors: Vec<String> },

    /// A resource could not be added to its bundle
    #[error("Failed to create bundle for locale {locale}: {errors:?}")]
    BundleCreationError { locale: String, errors: Vec<String> },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for olympics_common::DashboardError {
    fn from(err: I18nError) -> Self {
        match &err {
            I18nError::FluentParseError { locale, .. }
            | I18nError::BundleCreationError { locale, .. } => {
                Self::localization_with_locale(err.to_string(), locale.clone())
            }
            _ => Self::localization(err.to_string()),
        }
    }
}
