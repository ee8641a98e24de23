//! Extensions for `glam::Vec2`.

use config::constants::{DEFAULT_AXIS_FILL, DEFAULT_INT_AXIS_FILL};
use glam::{IVec2, IVec3, Vec2, Vec3};

use crate::{Plane, Rounding};

/// Per-axis arithmetic and conversions for float 2D vectors.
///
/// Every method returns a new vector; the receiver is `Copy` and untouched.
///
/// # Examples
/// ```
/// use glam::{IVec3, Vec2, Vec3};
/// use vector_ext::Vec2Ext;
///
/// let v = Vec2::new(1.5, -2.5).add_x(1.0);
/// assert_eq!(v, Vec2::new(2.5, -2.5));
/// assert_eq!(v.to_vec3_xz(4.0), Vec3::new(2.5, 4.0, -2.5));
/// assert_eq!(v.floor_to_ivec3_xy(0), IVec3::new(2, -3, 0));
/// ```
pub trait Vec2Ext: Copy {
    /// Adds `x` to the x component.
    fn add_x(self, x: f32) -> Vec2;
    /// Adds `y` to the y component.
    fn add_y(self, y: f32) -> Vec2;
    /// Subtracts `x` from the x component.
    fn sub_x(self, x: f32) -> Vec2;
    /// Subtracts `y` from the y component.
    fn sub_y(self, y: f32) -> Vec2;
    /// Multiplies the x component by `x`.
    fn mul_x(self, x: f32) -> Vec2;
    /// Multiplies the y component by `y`.
    fn mul_y(self, y: f32) -> Vec2;
    /// Divides the x component by `x`.
    fn div_x(self, x: f32) -> Vec2;
    /// Divides the y component by `y`.
    fn div_y(self, y: f32) -> Vec2;

    /// Places the vector on `plane`, writing `fill` into the free axis.
    fn lift(self, plane: Plane, fill: f32) -> Vec3;

    /// Converts both components with the given rounding.
    fn to_ivec2_with(self, rounding: Rounding) -> IVec2;

    /// Converts with `rounding`, then places the result on `plane`.
    fn to_ivec3_with(self, plane: Plane, fill: i32, rounding: Rounding) -> IVec3;

    /// [`Vec2Ext::lift`] with the configured default fill.
    fn lift_default(self, plane: Plane) -> Vec3 {
        self.lift(plane, DEFAULT_AXIS_FILL)
    }

    /// `(x, y, z)`.
    fn to_vec3_xy(self, z: f32) -> Vec3 {
        self.lift(Plane::XY, z)
    }

    /// `(x, y', y)`: the vector's y becomes z.
    fn to_vec3_xz(self, y: f32) -> Vec3 {
        self.lift(Plane::XZ, y)
    }

    /// Truncating conversion.
    fn to_ivec2(self) -> IVec2 {
        self.to_ivec2_with(Rounding::Truncate)
    }

    /// Floors both components.
    fn floor_to_ivec2(self) -> IVec2 {
        self.to_ivec2_with(Rounding::Floor)
    }

    /// Ceils both components.
    fn ceil_to_ivec2(self) -> IVec2 {
        self.to_ivec2_with(Rounding::Ceil)
    }

    /// Rounds both components to nearest, ties to even.
    fn round_to_ivec2(self) -> IVec2 {
        self.to_ivec2_with(Rounding::Nearest)
    }

    /// Truncates onto the XY plane.
    fn to_ivec3_xy(self, z: i32) -> IVec3 {
        self.to_ivec3_with(Plane::XY, z, Rounding::Truncate)
    }

    /// Truncates onto the XZ plane.
    fn to_ivec3_xz(self, y: i32) -> IVec3 {
        self.to_ivec3_with(Plane::XZ, y, Rounding::Truncate)
    }

    /// Floors onto the XY plane.
    fn floor_to_ivec3_xy(self, z: i32) -> IVec3 {
        self.to_ivec3_with(Plane::XY, z, Rounding::Floor)
    }

    /// Floors onto the XZ plane.
    fn floor_to_ivec3_xz(self, y: i32) -> IVec3 {
        self.to_ivec3_with(Plane::XZ, y, Rounding::Floor)
    }

    /// Ceils onto the XY plane.
    fn ceil_to_ivec3_xy(self, z: i32) -> IVec3 {
        self.to_ivec3_with(Plane::XY, z, Rounding::Ceil)
    }

    /// Ceils onto the XZ plane.
    fn ceil_to_ivec3_xz(self, y: i32) -> IVec3 {
        self.to_ivec3_with(Plane::XZ, y, Rounding::Ceil)
    }

    /// Rounds onto the XY plane.
    fn round_to_ivec3_xy(self, z: i32) -> IVec3 {
        self.to_ivec3_with(Plane::XY, z, Rounding::Nearest)
    }

    /// Rounds onto the XZ plane.
    fn round_to_ivec3_xz(self, y: i32) -> IVec3 {
        self.to_ivec3_with(Plane::XZ, y, Rounding::Nearest)
    }

    /// Truncates onto `plane` with the configured default fill.
    fn to_ivec3_default(self, plane: Plane) -> IVec3 {
        self.to_ivec3_with(plane, DEFAULT_INT_AXIS_FILL, Rounding::Truncate)
    }
}

impl Vec2Ext for Vec2 {
    fn add_x(self, x: f32) -> Vec2 {
        Vec2::new(self.x + x, self.y)
    }

    fn add_y(self, y: f32) -> Vec2 {
        Vec2::new(self.x, self.y + y)
    }

    fn sub_x(self, x: f32) -> Vec2 {
        Vec2::new(self.x - x, self.y)
    }

    fn sub_y(self, y: f32) -> Vec2 {
        Vec2::new(self.x, self.y - y)
    }

    fn mul_x(self, x: f32) -> Vec2 {
        Vec2::new(self.x * x, self.y)
    }

    fn mul_y(self, y: f32) -> Vec2 {
        Vec2::new(self.x, self.y * y)
    }

    fn div_x(self, x: f32) -> Vec2 {
        Vec2::new(self.x / x, self.y)
    }

    fn div_y(self, y: f32) -> Vec2 {
        Vec2::new(self.x, self.y / y)
    }

    fn lift(self, plane: Plane, fill: f32) -> Vec3 {
        plane.lift(self, fill)
    }

    fn to_ivec2_with(self, rounding: Rounding) -> IVec2 {
        rounding.apply_vec2(self)
    }

    fn to_ivec3_with(self, plane: Plane, fill: i32, rounding: Rounding) -> IVec3 {
        plane.lift_int(rounding.apply_vec2(self), fill)
    }
}
