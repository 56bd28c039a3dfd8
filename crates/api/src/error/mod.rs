//! Error handling for the dsig ecosystem

pub mod validate;

/// Primary error type for every dsig operation
///
/// There is no verification failure variant: an untrusted signature that does
/// not verify is a normal outcome and is reported as `false`, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A security level outside the parameter table was requested
    #[error("unsupported security level {level}: expected 2, 3 or 5")]
    UnsupportedSecurityLevel {
        /// The level that was asked for
        level: u8,
    },

    /// A parameter or argument failed validation
    #[error("invalid parameter in {context}: {message}")]
    InvalidParameter {
        /// Where the parameter was checked
        context: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// An operation needed key material that has not been generated yet
    #[error("{context}: no key pair has been generated")]
    UninitializedKey {
        /// Operation that was attempted
        context: &'static str,
    },

    /// The rejection-sampling loop ran out of attempts
    #[error("{algorithm} signing gave up after {attempts} attempts")]
    RetryExhausted {
        /// Parameter set name
        algorithm: &'static str,
        /// Number of attempts that were made
        attempts: u32,
    },

    /// Input had the wrong length
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        /// What was being decoded or checked
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Input had the right length but malformed content
    #[error("malformed {context}: {message}")]
    Encoding {
        /// What was being decoded
        context: &'static str,
        /// What was wrong with it
        message: String,
    },
}

/// Result type for dsig operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for [`Error::InvalidParameter`]
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for [`Error::Encoding`]
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::Encoding {
            context,
            message: message.into(),
        }
    }

    /// True for caller configuration mistakes that must not be retried
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedSecurityLevel { .. } | Self::InvalidParameter { .. }
        )
    }

    /// True when the caller may simply try again with a fresh attempt budget
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RetryExhausted { .. })
    }
}
