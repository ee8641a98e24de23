//! # Vector Extensions
//!
//! Axis-wise accessors and converters for the `glam` vector types.
//!
//! ## Architecture
//!
//! ```text
//! Vec2 / IVec2 ──lift(Plane, fill)──▶ Vec3 / IVec3
//! Vec3 / IVec3 ──project(Plane)─────▶ Vec2 / IVec2
//! Vec2 / Vec3  ──Rounding───────────▶ IVec2 / IVec3
//! ```
//!
//! The named helpers (`to_vec3_xz`, `floor_to_ivec2_yz`, ...) are thin
//! shorthands over [`Plane`] and [`Rounding`].
//!
//! ## Example
//!
//! ```rust
//! use glam::{IVec2, Vec3};
//! use vector_ext::prelude::*;
//!
//! let position = Vec3::new(10.6, 2.0, -3.2);
//! let tile = position.floor_to_ivec2_xz();
//! assert_eq!(tile, IVec2::new(10, -4));
//! assert_eq!(tile.to_ivec3_xz(0).to_ivec2_xz(), tile);
//! ```

pub mod ivec2;
pub mod ivec3;
pub mod plane;
pub mod rounding;
pub mod vec2;
pub mod vec3;

pub use ivec2::IVec2Ext;
pub use ivec3::IVec3Ext;
pub use plane::Plane;
pub use rounding::Rounding;
pub use vec2::Vec2Ext;
pub use vec3::Vec3Ext;

/// Extension traits and selector enums, for glob import.
pub mod prelude {
    pub use crate::{IVec2Ext, IVec3Ext, Plane, Rounding, Vec2Ext, Vec3Ext};
}
