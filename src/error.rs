//! Error types for the Azure DevOps commit convention.

use thiserror::Error;

/// Main error type for commit convention operations.
#[derive(Error, Debug)]
pub enum CzError {
    // Answer validation errors
    #[error("{0}")]
    RequiredValueMissing(String),

    #[error("{0}")]
    InvalidAnswer(String),

    // Configuration errors
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Commit message errors
    #[error("Commit message does not follow the commit schema: {0}")]
    InvalidCommitMessage(String),

    // Parsing errors - automatic conversions via #[from]
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Invalid version format: {0}")]
    InvalidVersion(#[from] semver::Error),

    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using CzError
pub type Result<T> = std::result::Result<T, CzError>;

impl CzError {
    /// Create a required value missing error
    pub fn required(msg: impl Into<String>) -> Self {
        Self::RequiredValueMissing(msg.into())
    }

    /// Create an invalid answer error
    pub fn invalid_answer(msg: impl Into<String>) -> Self {
        Self::InvalidAnswer(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

// Wraps in Other variant for generic I/O errors
impl From<std::io::Error> for CzError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = CzError::required("Subject is required.");
        assert_eq!(err.to_string(), "Subject is required.");

        let err = CzError::invalid_config("missing field");
        assert_eq!(err.to_string(), "Invalid configuration: missing field");

        let err = CzError::ConfigurationMissing("base url".into());
        assert_eq!(err.to_string(), "Configuration missing: base url");
    }

    #[test]
    fn test_error_helpers() {
        let err = CzError::required("missing");
        assert!(matches!(err, CzError::RequiredValueMissing(_)));

        let err = CzError::invalid_answer("bad");
        assert!(matches!(err, CzError::InvalidAnswer(_)));

        let err = CzError::invalid_config("missing field");
        assert!(matches!(err, CzError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_conversions() {
        let semver_err = semver::Version::parse("invalid");
        assert!(semver_err.is_err());
        let err: CzError = semver_err.unwrap_err().into();
        assert!(matches!(err, CzError::InvalidVersion(_)));

        let io_err = std::io::Error::other("boom");
        let err: CzError = io_err.into();
        assert!(matches!(err, CzError::Other(_)));
    }
}
