//! Error types for the clinic landing page

use thiserror::Error;

/// Main error type for landing page operations
#[derive(Error, Debug)]
pub enum ClinicError {
    /// A configured validation pattern failed to compile
    #[error("Invalid validation pattern for {field}: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    /// Configuration value outside its allowed range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error while parsing a configuration file
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The appointment request could not be delivered
    #[error("Submission failed: {0}")]
    Submission(String),
}

/// Result type alias using ClinicError
pub type ClinicResult<T> = Result<T, ClinicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClinicError::Submission("timeout".to_string());
        assert_eq!(format!("{}", err), "Submission failed: timeout");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ClinicError = io_err.into();
        assert!(matches!(err, ClinicError::Io(_)));
    }

    #[test]
    fn test_invalid_pattern_names_field() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = ClinicError::InvalidPattern {
            field: "phone",
            source,
        };
        assert!(err.to_string().starts_with("Invalid validation pattern for phone"));
    }
}
