//! Extensions for `glam::IVec2`.

use config::constants::DEFAULT_INT_AXIS_FILL;
use glam::{IVec2, IVec3, Vec3};

use crate::Plane;

/// Per-axis arithmetic and lifts for integer 2D vectors.
///
/// Addition, subtraction and multiplication wrap on overflow in every build
/// profile. Division by zero panics.
///
/// # Examples
/// ```
/// use glam::{IVec2, IVec3};
/// use vector_ext::IVec2Ext;
///
/// let tile = IVec2::new(3, 4).mul_x(2).sub_y(1);
/// assert_eq!(tile, IVec2::new(6, 3));
/// assert_eq!(tile.to_ivec3_xz(0), IVec3::new(6, 0, 3));
/// ```
pub trait IVec2Ext: Copy {
    /// Adds `x` to the x component.
    fn add_x(self, x: i32) -> IVec2;
    /// Adds `y` to the y component.
    fn add_y(self, y: i32) -> IVec2;
    /// Subtracts `x` from the x component.
    fn sub_x(self, x: i32) -> IVec2;
    /// Subtracts `y` from the y component.
    fn sub_y(self, y: i32) -> IVec2;
    /// Multiplies the x component by `x`.
    fn mul_x(self, x: i32) -> IVec2;
    /// Multiplies the y component by `y`.
    fn mul_y(self, y: i32) -> IVec2;
    /// Divides the x component by `x`, truncating.
    ///
    /// # Panics
    ///
    /// If `x` is zero.
    fn div_x(self, x: i32) -> IVec2;
    /// Divides the y component by `y`, truncating.
    ///
    /// # Panics
    ///
    /// If `y` is zero.
    fn div_y(self, y: i32) -> IVec2;

    /// Places the vector on `plane` as floats, writing `fill` into the free axis.
    fn lift(self, plane: Plane, fill: f32) -> Vec3;

    /// Places the vector on `plane`, writing `fill` into the free axis.
    fn lift_int(self, plane: Plane, fill: i32) -> IVec3;

    /// [`IVec2Ext::lift_int`] with the configured default fill.
    fn lift_default(self, plane: Plane) -> IVec3 {
        self.lift_int(plane, DEFAULT_INT_AXIS_FILL)
    }

    /// Float `(x, y, z)`.
    fn to_vec3_xy(self, z: f32) -> Vec3 {
        self.lift(Plane::XY, z)
    }

    /// Float `(x, y', y)`.
    fn to_vec3_xz(self, y: f32) -> Vec3 {
        self.lift(Plane::XZ, y)
    }

    /// `(x, y, z)`.
    fn to_ivec3_xy(self, z: i32) -> IVec3 {
        self.lift_int(Plane::XY, z)
    }

    /// `(x, y', y)`.
    fn to_ivec3_xz(self, y: i32) -> IVec3 {
        self.lift_int(Plane::XZ, y)
    }
}

impl IVec2Ext for IVec2 {
    fn add_x(self, x: i32) -> IVec2 {
        IVec2::new(self.x.wrapping_add(x), self.y)
    }

    fn add_y(self, y: i32) -> IVec2 {
        IVec2::new(self.x, self.y.wrapping_add(y))
    }

    fn sub_x(self, x: i32) -> IVec2 {
        IVec2::new(self.x.wrapping_sub(x), self.y)
    }

    fn sub_y(self, y: i32) -> IVec2 {
        IVec2::new(self.x, self.y.wrapping_sub(y))
    }

    fn mul_x(self, x: i32) -> IVec2 {
        IVec2::new(self.x.wrapping_mul(x), self.y)
    }

    fn mul_y(self, y: i32) -> IVec2 {
        IVec2::new(self.x, self.y.wrapping_mul(y))
    }

    fn div_x(self, x: i32) -> IVec2 {
        IVec2::new(self.x / x, self.y)
    }

    fn div_y(self, y: i32) -> IVec2 {
        IVec2::new(self.x, self.y / y)
    }

    fn lift(self, plane: Plane, fill: f32) -> Vec3 {
        plane.lift(self.as_vec2(), fill)
    }

    fn lift_int(self, plane: Plane, fill: i32) -> IVec3 {
        plane.lift_int(self, fill)
    }
}
