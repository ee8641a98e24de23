//! Extensions for `glam::IVec3`.

use glam::{IVec2, IVec3, Vec2};

use crate::Plane;

/// Per-axis arithmetic, setters and projections for integer 3D vectors.
///
/// Addition, subtraction and multiplication wrap on overflow in every build
/// profile. Division by zero panics.
///
/// # Examples
/// ```
/// use glam::{IVec2, IVec3, Vec2};
/// use vector_ext::IVec3Ext;
///
/// let cell = IVec3::new(4, 1, -2).add_z(2);
/// assert_eq!(cell, IVec3::new(4, 1, 0));
/// assert_eq!(cell.to_ivec2_xz(), IVec2::new(4, 0));
/// assert_eq!(cell.to_vec2_xy(), Vec2::new(4.0, 1.0));
/// ```
pub trait IVec3Ext: Copy {
    /// Adds `x` to the x component.
    fn add_x(self, x: i32) -> IVec3;
    /// Adds `y` to the y component.
    fn add_y(self, y: i32) -> IVec3;
    /// Adds `z` to the z component.
    fn add_z(self, z: i32) -> IVec3;
    /// Subtracts `x` from the x component.
    fn sub_x(self, x: i32) -> IVec3;
    /// Subtracts `y` from the y component.
    fn sub_y(self, y: i32) -> IVec3;
    /// Subtracts `z` from the z component.
    fn sub_z(self, z: i32) -> IVec3;
    /// Multiplies the x component by `x`.
    fn mul_x(self, x: i32) -> IVec3;
    /// Multiplies the y component by `y`.
    fn mul_y(self, y: i32) -> IVec3;
    /// Multiplies the z component by `z`.
    fn mul_z(self, z: i32) -> IVec3;
    /// Divides the x component by `x`, truncating. Panics if `x` is zero.
    fn div_x(self, x: i32) -> IVec3;
    /// Divides the y component by `y`, truncating. Panics if `y` is zero.
    fn div_y(self, y: i32) -> IVec3;
    /// Divides the z component by `z`, truncating. Panics if `z` is zero.
    fn div_z(self, z: i32) -> IVec3;

    /// Replaces x and y.
    fn with_xy(self, x: i32, y: i32) -> IVec3;
    /// Replaces x and z.
    fn with_xz(self, x: i32, z: i32) -> IVec3;
    /// Replaces y and z.
    fn with_yz(self, y: i32, z: i32) -> IVec3;

    /// Drops the axis not named by `plane`.
    fn project(self, plane: Plane) -> IVec2;

    /// `(x, y)`.
    fn to_ivec2_xy(self) -> IVec2 {
        self.project(Plane::XY)
    }

    /// `(x, z)`.
    fn to_ivec2_xz(self) -> IVec2 {
        self.project(Plane::XZ)
    }

    /// `(y, z)`.
    fn to_ivec2_yz(self) -> IVec2 {
        self.project(Plane::YZ)
    }

    /// Float `(x, y)`.
    fn to_vec2_xy(self) -> Vec2 {
        self.to_ivec2_xy().as_vec2()
    }

    /// Float `(x, z)`.
    fn to_vec2_xz(self) -> Vec2 {
        self.to_ivec2_xz().as_vec2()
    }

    /// Float `(y, z)`.
    fn to_vec2_yz(self) -> Vec2 {
        self.to_ivec2_yz().as_vec2()
    }
}

impl IVec3Ext for IVec3 {
    fn add_x(self, x: i32) -> IVec3 {
        IVec3::new(self.x.wrapping_add(x), self.y, self.z)
    }

    fn add_y(self, y: i32) -> IVec3 {
        IVec3::new(self.x, self.y.wrapping_add(y), self.z)
    }

    fn add_z(self, z: i32) -> IVec3 {
        IVec3::new(self.x, self.y, self.z.wrapping_add(z))
    }

    fn sub_x(self, x: i32) -> IVec3 {
        IVec3::new(self.x.wrapping_sub(x), self.y, self.z)
    }

    fn sub_y(self, y: i32) -> IVec3 {
        IVec3::new(self.x, self.y.wrapping_sub(y), self.z)
    }

    fn sub_z(self, z: i32) -> IVec3 {
        IVec3::new(self.x, self.y, self.z.wrapping_sub(z))
    }

    fn mul_x(self, x: i32) -> IVec3 {
        IVec3::new(self.x.wrapping_mul(x), self.y, self.z)
    }

    fn mul_y(self, y: i32) -> IVec3 {
        IVec3::new(self.x, self.y.wrapping_mul(y), self.z)
    }

    fn mul_z(self, z: i32) -> IVec3 {
        IVec3::new(self.x, self.y, self.z.wrapping_mul(z))
    }

    fn div_x(self, x: i32) -> IVec3 {
        IVec3::new(self.x / x, self.y, self.z)
    }

    fn div_y(self, y: i32) -> IVec3 {
        IVec3::new(self.x, self.y / y, self.z)
    }

    fn div_z(self, z: i32) -> IVec3 {
        IVec3::new(self.x, self.y, self.z / z)
    }

    fn with_xy(self, x: i32, y: i32) -> IVec3 {
        IVec3::new(x, y, self.z)
    }

    fn with_xz(self, x: i32, z: i32) -> IVec3 {
        IVec3::new(x, self.y, z)
    }

    fn with_yz(self, y: i32, z: i32) -> IVec3 {
        IVec3::new(self.x, y, z)
    }

    fn project(self, plane: Plane) -> IVec2 {
        plane.project_int(self)
    }
}
