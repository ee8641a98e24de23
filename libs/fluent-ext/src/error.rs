//! # Error Types
//!
//! Error types for the extension helpers. Every helper is a total function
//! over its documented inputs, so the only failures are rejected arguments.
//!
//! ## Error Policy
//!
//! - NO silent fallbacks: an absent sequence is an error, not an empty result
//! - Failures are returned immediately, never retried
//! - Errors name the offending argument

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the extension helpers.
///
/// ## Example
///
/// ```rust
/// use fluent_ext::{collections::duplicates, ExtError};
///
/// let absent: Option<Vec<u8>> = None;
/// match duplicates(absent) {
///     Err(ExtError::InvalidArgument(name)) => assert_eq!(name, "sequence"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtError {
    /// A required argument was absent.
    ///
    /// Contains the name of the argument.
    #[error("Invalid argument: '{0}' must be present")]
    InvalidArgument(String),

    /// A configuration value was rejected by the `config` crate.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ExtError {
    /// Builds an [`ExtError::InvalidArgument`] for the named argument.
    pub(crate) fn missing(argument: &str) -> Self {
        tracing::debug!(argument, "rejected absent argument");
        ExtError::InvalidArgument(argument.to_string())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for the extension helpers.
///
/// ## Example
///
/// ```rust
/// use fluent_ext::error::ExtResult;
///
/// fn first_even(values: &[u32]) -> ExtResult<Option<u32>> {
///     Ok(values.iter().copied().find(|v| v % 2 == 0))
/// }
/// # assert_eq!(first_even(&[1, 4]).unwrap(), Some(4));
/// ```
pub type ExtResult<T> = Result<T, ExtError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let arg_err = ExtError::missing("default_factory");
        assert!(arg_err.to_string().contains("Invalid argument"));
        assert!(arg_err.to_string().contains("default_factory"));

        let cfg_err = ExtError::from(ConfigError::InvalidMinOccurrences(1));
        assert!(cfg_err.to_string().contains("min_occurrences"));
    }

    /// Test error types are Send + Sync for use across threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExtError>();
    }
}
