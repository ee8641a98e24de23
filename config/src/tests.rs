//! # Tests for Config Constants
//!
//! Sanity checks on the constant values shared by the helper crates.

use crate::constants::*;

// =============================================================================
// DUPLICATE TESTS
// =============================================================================

#[test]
fn test_duplicate_threshold_excludes_unique_values() {
    assert!(
        DUPLICATE_MIN_OCCURRENCES > 1,
        "a value seen once must never count as duplicated"
    );
}

// =============================================================================
// FILL TESTS
// =============================================================================

#[test]
fn test_default_fills_are_origin() {
    // Engine default arguments lift onto the origin plane
    assert_eq!(DEFAULT_AXIS_FILL, 0.0);
    assert_eq!(DEFAULT_INT_AXIS_FILL, 0);
}

#[test]
fn test_fill_values_agree() {
    assert_eq!(DEFAULT_AXIS_FILL, DEFAULT_INT_AXIS_FILL as f32);
}
