//! Shared error types for the crate

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for number string symbol operations
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol sequence that must carry at least one character was empty
    #[error("Empty symbols: {0}")]
    EmptySymbols(String),

    /// Filler characters were empty or contained a NUL character
    #[error("Invalid filler characters: {0}")]
    InvalidFillerChars(String),

    /// Filler repeat count outside `1..=1_000_000`
    #[error("Invalid filler repeat count {count}: must be between 1 and {max}")]
    InvalidRepeatCount { count: usize, max: usize },

    /// Number field width outside `1..=1_000_000`
    #[error("Invalid field length {length}: must be between 1 and {max}")]
    InvalidFieldLength { length: usize, max: usize },

    /// A filler field failed validation as a whole
    #[error("Invalid filler field: {0}")]
    InvalidFiller(String),

    /// An enumeration string did not match any variant
    #[error("Invalid {kind} value '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    /// A numeric string could not be parsed as a plain decimal
    #[error("Invalid number string '{0}'")]
    InvalidNumber(String),

    /// A negative value was formatted but no negative sign symbols exist
    #[error("The numeric value is negative but no negative number sign symbols are configured")]
    NegativeSignNotConfigured,

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error without file context
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error tied to a file
    pub fn configuration_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub(crate) fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }

    /// Whether the caller can fix the error by changing its input
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_count_message_names_bounds() {
        let err = Error::InvalidRepeatCount {
            count: 0,
            max: 1_000_000,
        };
        assert_eq!(
            err.to_string(),
            "Invalid filler repeat count 0: must be between 1 and 1000000"
        );
    }

    #[test]
    fn test_configuration_error_keeps_path() {
        let err = Error::configuration_at("bad preset", "/tmp/.numstr.toml");
        match err {
            Error::Configuration { path, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/.numstr.toml")))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_io_errors_are_not_user_fixable() {
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(!io.is_user_fixable());
        assert!(Error::NegativeSignNotConfigured.is_user_fixable());
    }
}
