//! # Config Crate
//!
//! Centralized configuration constants for the fluent extension crates.
//! Thresholds and fill values shared by `fluent-ext` and `vector-ext` are
//! defined here so the helper crates never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DuplicateConfig, DUPLICATE_MIN_OCCURRENCES};
//!
//! let cfg = DuplicateConfig::default();
//! assert_eq!(cfg.min_occurrences, DUPLICATE_MIN_OCCURRENCES);
//!
//! // Only report values seen three times or more
//! let strict = DuplicateConfig::new(3).unwrap();
//! assert!(strict.is_duplicate_count(3));
//! assert!(!strict.is_duplicate_count(2));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Configuration types reject values that break invariants
//! - **Engine Compatible**: Fill defaults match the engine's default arguments

pub mod constants;

#[cfg(test)]
mod tests;
