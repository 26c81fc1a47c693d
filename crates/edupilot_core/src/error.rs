//! Error taxonomy for UI state primitives
//!
//! Every failure here is a deterministic input-validation failure. A rejected
//! call leaves the primitive exactly as it was, so callers never need to retry
//! or roll anything back.

use thiserror::Error;

/// Errors reported by the windowed cycler primitives and the widgets built on them
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CyclerError {
    /// A construction parameter was zero, negative or non-finite
    ///
    /// Fatal to construction. Values are never clamped into range.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },

    /// An index or page argument fell outside `[0, len)`
    #[error("index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    /// A runtime argument was rejected (negative time delta, empty message, ...)
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A navigation id did not match any known route
    #[error("unknown route `{0}`")]
    UnknownRoute(String),
}

impl CyclerError {
    /// Build an [`CyclerError::InvalidConfiguration`]
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Build an [`CyclerError::InvalidInput`]
    pub fn input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Whether this error was raised while building a primitive
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

/// Result alias used across the EduPilot crates
pub type Result<T> = std::result::Result<T, CyclerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CyclerError::config("page_size", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid configuration for `page_size`: must be greater than zero"
        );
        assert!(err.is_configuration());

        let err = CyclerError::OutOfRange { index: 9, len: 8 };
        assert_eq!(err.to_string(), "index 9 out of range (len 8)");
        assert!(!err.is_configuration());

        let err = CyclerError::UnknownRoute("blog".into());
        assert_eq!(err.to_string(), "unknown route `blog`");
    }
}
