//! Validation utilities and regex patterns

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use validator::ValidationError;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #DABE1E)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Three uppercase ASCII letters
pub static NOC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("Invalid NOC regex pattern"));

/// Locales with bundled label translations
pub const SUPPORTED_LOCALES: &[&str] = &["en-US", "sv-SE"];

/// Validate a level name or an `EnvFilter` directive list such as
/// `info,olympics_data=trace`.
///
/// A bare word has to be a level: `EnvFilter` would read `verbose` as a
/// target name and silently log nothing useful.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let well_formed = level.split(',').map(str::trim).all(|directive| {
        let value = directive.rsplit_once('=').map_or(directive, |(_, value)| value).trim();
        !value.is_empty() && LevelFilter::from_str(value).is_ok()
    });

    if well_formed && EnvFilter::try_new(level).is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// Validate a locale identifier against the bundled translations
pub fn validate_locale(locale: &str) -> Result<(), ValidationError> {
    if SUPPORTED_LOCALES.contains(&locale) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_locale"))
    }
}

/// Validate a list of NOC codes
pub fn validate_noc_codes(nocs: &[String]) -> Result<(), ValidationError> {
    if nocs.iter().all(|noc| NOC_REGEX.is_match(noc)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_noc_code"))
    }
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    // Colon stays allowed for Windows drive letters.
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_regex() {
        assert!(HEX_COLOR_REGEX.is_match("#FFFFFF"));
        assert!(HEX_COLOR_REGEX.is_match("#DABE1E"));
        assert!(HEX_COLOR_REGEX.is_match("#cd7f32"));

        assert!(!HEX_COLOR_REGEX.is_match("FFFFFF")); // Missing #
        assert!(!HEX_COLOR_REGEX.is_match("#FFF")); // Too short
        assert!(!HEX_COLOR_REGEX.is_match("#FFFFFFF")); // Too long
        assert!(!HEX_COLOR_REGEX.is_match("#GGGGGG"));
        assert!(!HEX_COLOR_REGEX.is_match(""));
    }

    #[test]
    fn test_validate_locale() {
        assert!(validate_locale("en-US").is_ok());
        assert!(validate_locale("sv-SE").is_ok());
        assert!(validate_locale("de-DE").is_err());
        assert!(validate_locale("").is_err());
    }

    #[test]
    fn test_validate_noc_codes() {
        let good = vec!["GER".to_string(), "FRG".to_string(), "GDR".to_string()];
        assert!(validate_noc_codes(&good).is_ok());
        assert!(validate_noc_codes(&[]).is_ok());

        assert!(validate_noc_codes(&["Ger".to_string()]).is_err());
        assert!(validate_noc_codes(&["GERM".to_string()]).is_err());
    }

    #[test]
    fn test_validate_file_path() {
        assert!(validate_file_path("athlete_events.csv").is_ok());
        assert!(validate_file_path("/srv/data/noc_regions.csv").is_ok());
        assert!(validate_file_path("C:\\data\\athlete_events.csv").is_ok());

        assert!(validate_file_path("").is_err());
        assert!(validate_file_path("file<name.csv").is_err());
        assert!(validate_file_path("file|name.csv").is_err());
        assert!(validate_file_path("file*name.csv").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        for level in ["trace", "debug", "info", "warn", "error", "off", "DEBUG"] {
            assert!(validate_log_level(level).is_ok(), "{level}");
        }
        assert!(validate_log_level("olympics_data=trace").is_ok());
        assert!(validate_log_level("info,olympics_data=trace,tower_http=debug").is_ok());

        assert!(validate_log_level("verbose").is_err());
        assert!(validate_log_level("").is_err());
        assert!(validate_log_level("info,").is_err());
        assert!(validate_log_level("olympics_data=loud").is_err());
    }
}
