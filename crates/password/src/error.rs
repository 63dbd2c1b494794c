//! Error types for the password crate.

use thiserror::Error;

/// Result type alias for password operations.
pub type Result<T> = std::result::Result<T, PasswordError>;

/// Errors that can occur around password algorithms.
///
/// Detection and hash comparison never produce these: a malformed or foreign
/// hash is simply "not detected" or "not equal".
#[derive(Debug, Error)]
pub enum PasswordError {
    /// The algorithm never declared a hash prefix
    #[error("Algorithm `{algorithm}` does not declare a hash prefix")]
    MissingPrefix {
        /// Name of the offending algorithm
        algorithm: String,
    },

    /// Descriptor document could not be parsed
    #[error("Invalid algorithm descriptor: {0}")]
    InvalidDescriptor(String),

    /// Descriptor file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A concrete algorithm failed to compute or check a hash
    #[error("Hashing failed: {0}")]
    HashFailed(String),
}

/// Numeric error codes for programmatic handling.
/// Range: 12xxx for password errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordErrorCode {
    /// Missing hash prefix
    MissingPrefix = 12001,
    /// Invalid descriptor document
    InvalidDescriptor = 12002,
    /// Descriptor IO failure
    Io = 12003,
    /// Hash computation failure
    HashFailed = 12004,
}

impl PasswordError {
    /// Create a missing prefix error for the named algorithm.
    pub fn missing_prefix(algorithm: impl Into<String>) -> Self {
        Self::MissingPrefix {
            algorithm: algorithm.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> PasswordErrorCode {
        match self {
            PasswordError::MissingPrefix { .. } => PasswordErrorCode::MissingPrefix,
            PasswordError::InvalidDescriptor(_) => PasswordErrorCode::InvalidDescriptor,
            PasswordError::Io(_) => PasswordErrorCode::Io,
            PasswordError::HashFailed(_) => PasswordErrorCode::HashFailed,
        }
    }

    /// Configuration errors are build-time defects and are never retried.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PasswordError::MissingPrefix { .. } | PasswordError::InvalidDescriptor(_)
        )
    }
}

impl From<toml::de::Error> for PasswordError {
    fn from(err: toml::de::Error) -> Self {
        PasswordError::InvalidDescriptor(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_prefix_message() {
        let err = PasswordError::missing_prefix("bcrypt");
        assert_eq!(
            err.to_string(),
            "Algorithm `bcrypt` does not declare a hash prefix"
        );
        assert_eq!(err.code(), PasswordErrorCode::MissingPrefix);
        assert!(err.is_configuration());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(PasswordErrorCode::MissingPrefix as u32, 12001);
        assert_eq!(
            PasswordError::HashFailed("boom".into()).code(),
            PasswordErrorCode::HashFailed
        );
        assert!(!PasswordError::HashFailed("boom".into()).is_configuration());
    }
}
