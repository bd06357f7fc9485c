//! Error types for the verification code extractor.
//!
//! Extraction itself never fails: "no code" is an empty result, not an
//! error. The variants here cover everything around it: compiling the
//! caller's keyword pattern, validating configuration, and handing a
//! result to collaborators (sinks and notifiers).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fallible smscode operations.
pub type SmsCodeResult<T> = Result<T, SmsCodeError>;

/// Error type for configuration and delivery failures.
#[derive(Debug, Error)]
pub enum SmsCodeError {
    /// The caller-supplied keyword pattern is not a valid regular expression
    #[error("Invalid keyword pattern '{pattern}': {source}")]
    InvalidKeywordPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Invalid configuration value
    #[error("Invalid configuration for '{parameter}': {reason}")]
    InvalidConfig { parameter: String, reason: String },

    /// Error occurred while reading or writing files
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A code sink could not accept the extracted code
    #[error("{sink} sink failed: {reason}")]
    Delivery { sink: String, reason: String },

    /// A notification could not be presented
    #[error("Notification failed: {reason}")]
    Notification { reason: String },
}

impl SmsCodeError {
    /// Shorthand for an [`SmsCodeError::InvalidConfig`].
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error came from caller configuration rather
    /// than from a collaborator at delivery time.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeywordPattern { .. } | Self::InvalidConfig { .. }
        )
    }
}
