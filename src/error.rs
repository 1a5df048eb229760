//! Error types for the time-record rules engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! parsing wire-format dates and times.

use thiserror::Error;

/// The main error type for the time-record rules engine.
///
/// Only the configuration loader and the string parsing front door return
/// this type; the rules themselves are total functions over typed input.
///
/// # Example
///
/// ```
/// use ponto_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A reference date string was not in `YYYY-MM-DD` form.
    #[error("Invalid reference date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The text that failed to parse.
        value: String,
    },

    /// A clock time string was not in `HH:mm` form.
    #[error("Invalid clock time '{value}': expected HH:mm")]
    InvalidTime {
        /// The text that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/settings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/settings.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = EngineError::InvalidDate {
            value: "10/03/2024".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid reference date '10/03/2024': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_invalid_time_displays_value() {
        let error = EngineError::InvalidTime {
            value: "8h30".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid clock time '8h30': expected HH:mm");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_time() -> EngineResult<()> {
            Err(EngineError::InvalidTime {
                value: "nope".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_time()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
