//! Extensions for `glam::Vec3`.
//!
//! Projections keep the two axes named by the method (`_xy`, `_xz`, `_yz`)
//! in that order. Integer conversions truncate unless the method names
//! another rounding.

use glam::{IVec2, IVec3, Vec2, Vec3};

use crate::{Plane, Rounding};

/// Per-axis arithmetic, setters and conversions for float 3D vectors.
///
/// # Examples
/// ```
/// use glam::{IVec2, Vec2, Vec3};
/// use vector_ext::Vec3Ext;
///
/// let v = Vec3::new(1.2, 2.5, -3.8).with_xz(0.0, 0.0);
/// assert_eq!(v, Vec3::new(0.0, 2.5, 0.0));
/// assert_eq!(Vec3::new(1.2, 2.5, -3.8).to_vec2_yz(), Vec2::new(2.5, -3.8));
/// assert_eq!(Vec3::new(1.2, 2.5, -3.8).round_to_ivec2_xz(), IVec2::new(1, -4));
/// ```
pub trait Vec3Ext: Copy {
    /// Adds `x` to the x component.
    fn add_x(self, x: f32) -> Vec3;
    /// Adds `y` to the y component.
    fn add_y(self, y: f32) -> Vec3;
    /// Adds `z` to the z component.
    fn add_z(self, z: f32) -> Vec3;
    /// Subtracts `x` from the x component.
    fn sub_x(self, x: f32) -> Vec3;
    /// Subtracts `y` from the y component.
    fn sub_y(self, y: f32) -> Vec3;
    /// Subtracts `z` from the z component.
    fn sub_z(self, z: f32) -> Vec3;
    /// Multiplies the x component by `x`.
    fn mul_x(self, x: f32) -> Vec3;
    /// Multiplies the y component by `y`.
    fn mul_y(self, y: f32) -> Vec3;
    /// Multiplies the z component by `z`.
    fn mul_z(self, z: f32) -> Vec3;
    /// Divides the x component by `x`.
    fn div_x(self, x: f32) -> Vec3;
    /// Divides the y component by `y`.
    fn div_y(self, y: f32) -> Vec3;
    /// Divides the z component by `z`.
    fn div_z(self, z: f32) -> Vec3;

    /// Replaces x and y.
    fn with_xy(self, x: f32, y: f32) -> Vec3;
    /// Replaces x and z.
    fn with_xz(self, x: f32, z: f32) -> Vec3;
    /// Replaces y and z.
    fn with_yz(self, y: f32, z: f32) -> Vec3;

    /// Drops the axis not named by `plane`.
    fn project(self, plane: Plane) -> Vec2;

    /// Projects onto `plane`, then converts with `rounding`.
    fn project_to_ivec2(self, plane: Plane, rounding: Rounding) -> IVec2;

    /// Converts all three components with `rounding`.
    fn to_ivec3_with(self, rounding: Rounding) -> IVec3;

    /// `(x, y)`.
    fn to_vec2_xy(self) -> Vec2 {
        self.project(Plane::XY)
    }

    /// `(x, z)`.
    fn to_vec2_xz(self) -> Vec2 {
        self.project(Plane::XZ)
    }

    /// `(y, z)`.
    fn to_vec2_yz(self) -> Vec2 {
        self.project(Plane::YZ)
    }

    /// Truncated `(x, y)`.
    fn to_ivec2_xy(self) -> IVec2 {
        self.project_to_ivec2(Plane::XY, Rounding::Truncate)
    }

    /// Truncated `(x, z)`.
    fn to_ivec2_xz(self) -> IVec2 {
        self.project_to_ivec2(Plane::XZ, Rounding::Truncate)
    }

    /// Truncated `(y, z)`.
    fn to_ivec2_yz(self) -> IVec2 {
        self.project_to_ivec2(Plane::YZ, Rounding::Truncate)
    }

    /// Floored `(x, y)`.
    fn floor_to_ivec2_xy(self) -> IVec2 {
        self.project_to_ivec2(Plane::XY, Rounding::Floor)
    }

    /// Floored `(x, z)`.
    fn floor_to_ivec2_xz(self) -> IVec2 {
        self.project_to_ivec2(Plane::XZ, Rounding::Floor)
    }

    /// Floored `(y, z)`.
    fn floor_to_ivec2_yz(self) -> IVec2 {
        self.project_to_ivec2(Plane::YZ, Rounding::Floor)
    }

    /// Ceiled `(x, y)`.
    fn ceil_to_ivec2_xy(self) -> IVec2 {
        self.project_to_ivec2(Plane::XY, Rounding::Ceil)
    }

    /// Ceiled `(x, z)`.
    fn ceil_to_ivec2_xz(self) -> IVec2 {
        self.project_to_ivec2(Plane::XZ, Rounding::Ceil)
    }

    /// Ceiled `(y, z)`.
    fn ceil_to_ivec2_yz(self) -> IVec2 {
        self.project_to_ivec2(Plane::YZ, Rounding::Ceil)
    }

    /// Rounded `(x, y)`, ties to even.
    fn round_to_ivec2_xy(self) -> IVec2 {
        self.project_to_ivec2(Plane::XY, Rounding::Nearest)
    }

    /// Rounded `(x, z)`, ties to even.
    fn round_to_ivec2_xz(self) -> IVec2 {
        self.project_to_ivec2(Plane::XZ, Rounding::Nearest)
    }

    /// Rounded `(y, z)`, ties to even.
    fn round_to_ivec2_yz(self) -> IVec2 {
        self.project_to_ivec2(Plane::YZ, Rounding::Nearest)
    }

    /// Truncating conversion.
    fn to_ivec3(self) -> IVec3 {
        self.to_ivec3_with(Rounding::Truncate)
    }

    /// Floors every component.
    fn floor_to_ivec3(self) -> IVec3 {
        self.to_ivec3_with(Rounding::Floor)
    }

    /// Ceils every component.
    fn ceil_to_ivec3(self) -> IVec3 {
        self.to_ivec3_with(Rounding::Ceil)
    }

    /// Rounds every component, ties to even.
    fn round_to_ivec3(self) -> IVec3 {
        self.to_ivec3_with(Rounding::Nearest)
    }
}

impl Vec3Ext for Vec3 {
    fn add_x(self, x: f32) -> Vec3 {
        Vec3::new(self.x + x, self.y, self.z)
    }

    fn add_y(self, y: f32) -> Vec3 {
        Vec3::new(self.x, self.y + y, self.z)
    }

    fn add_z(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, self.z + z)
    }

    fn sub_x(self, x: f32) -> Vec3 {
        Vec3::new(self.x - x, self.y, self.z)
    }

    fn sub_y(self, y: f32) -> Vec3 {
        Vec3::new(self.x, self.y - y, self.z)
    }

    fn sub_z(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, self.z - z)
    }

    fn mul_x(self, x: f32) -> Vec3 {
        Vec3::new(self.x * x, self.y, self.z)
    }

    fn mul_y(self, y: f32) -> Vec3 {
        Vec3::new(self.x, self.y * y, self.z)
    }

    fn mul_z(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, self.z * z)
    }

    fn div_x(self, x: f32) -> Vec3 {
        Vec3::new(self.x / x, self.y, self.z)
    }

    fn div_y(self, y: f32) -> Vec3 {
        Vec3::new(self.x, self.y / y, self.z)
    }

    fn div_z(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, self.z / z)
    }

    fn with_xy(self, x: f32, y: f32) -> Vec3 {
        Vec3::new(x, y, self.z)
    }

    fn with_xz(self, x: f32, z: f32) -> Vec3 {
        Vec3::new(x, self.y, z)
    }

    fn with_yz(self, y: f32, z: f32) -> Vec3 {
        Vec3::new(self.x, y, z)
    }

    fn project(self, plane: Plane) -> Vec2 {
        plane.project(self)
    }

    fn project_to_ivec2(self, plane: Plane, rounding: Rounding) -> IVec2 {
        rounding.apply_vec2(plane.project(self))
    }

    fn to_ivec3_with(self, rounding: Rounding) -> IVec3 {
        rounding.apply_vec3(self)
    }
}
