use thiserror::Error;

/// Unified error type for next-semvers operations
#[derive(Error, Debug)]
pub enum NextSemVersError {
    #[error("Invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in next-semvers
pub type Result<T> = std::result::Result<T, NextSemVersError>;

impl NextSemVersError {
    /// Create an invalid version error for the offending input
    pub fn invalid_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        NextSemVersError::InvalidVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextSemVersError::Config(msg.into())
    }

    pub fn is_invalid_version(&self) -> bool {
        matches!(self, NextSemVersError::InvalidVersion { .. })
    }

    /// The string that failed to parse, if this is a version error
    pub fn input(&self) -> Option<&str> {
        match self {
            NextSemVersError::InvalidVersion { input, .. } => Some(input),
            _ => None,
        }
    }
}
