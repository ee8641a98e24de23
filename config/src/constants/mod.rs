//! Centralized configuration values shared across the fluent extension crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// DUPLICATE DETECTION
// =============================================================================

/// Minimum group size for a value to count as duplicated.
///
/// A value seen once is unique; seen twice or more it is reported once.
///
/// # Examples
/// ```
/// use config::constants::DUPLICATE_MIN_OCCURRENCES;
/// assert_eq!(DUPLICATE_MIN_OCCURRENCES, 2);
/// ```
pub const DUPLICATE_MIN_OCCURRENCES: usize = 2;

// =============================================================================
// VECTOR FILL VALUES
// =============================================================================

/// Value written into the missing axis when a float 2D vector is lifted into
/// 3D without an explicit fill.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_AXIS_FILL;
/// assert_eq!(DEFAULT_AXIS_FILL, 0.0);
/// ```
pub const DEFAULT_AXIS_FILL: f32 = 0.0;

/// Integer counterpart of [`DEFAULT_AXIS_FILL`].
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_INT_AXIS_FILL;
/// assert_eq!(DEFAULT_INT_AXIS_FILL, 0);
/// ```
pub const DEFAULT_INT_AXIS_FILL: i32 = 0;

/// Duplicate detection settings.
///
/// # Examples
/// ```
/// use config::constants::DuplicateConfig;
/// let config = DuplicateConfig::default();
/// assert!(config.is_duplicate_count(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateConfig {
    /// Smallest group size reported as a duplicate.
    pub min_occurrences: usize,
}

impl DuplicateConfig {
    /// Builds a configuration, rejecting thresholds that would report unique
    /// values as duplicates.
    ///
    /// # Examples
    /// ```
    /// use config::constants::DuplicateConfig;
    /// let cfg = DuplicateConfig::new(4).expect("valid config");
    /// assert_eq!(cfg.min_occurrences, 4);
    /// assert!(DuplicateConfig::new(1).is_err());
    /// ```
    pub fn new(min_occurrences: usize) -> Result<Self, ConfigError> {
        if min_occurrences < DUPLICATE_MIN_OCCURRENCES {
            return Err(ConfigError::InvalidMinOccurrences(min_occurrences));
        }
        Ok(Self { min_occurrences })
    }

    /// Returns true when a group of `count` equal values should be reported.
    pub fn is_duplicate_count(&self, count: usize) -> bool {
        count >= self.min_occurrences
    }
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            min_occurrences: DUPLICATE_MIN_OCCURRENCES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the duplicate threshold would include unique values.
    InvalidMinOccurrences(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinOccurrences(value) => {
                write!(
                    f,
                    "min_occurrences must be >= {DUPLICATE_MIN_OCCURRENCES}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
