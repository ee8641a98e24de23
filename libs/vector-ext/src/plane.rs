//! Coordinate planes used to project 3D vectors to 2D and lift 2D vectors to 3D.

use glam::{IVec2, IVec3, Vec2, Vec3};

/// An axis-aligned plane, named by the two axes it keeps.
///
/// Projecting drops the third axis. Lifting writes the 2D components onto
/// the two named axes, in order, and fills the third.
///
/// # Examples
/// ```
/// use glam::{Vec2, Vec3};
/// use vector_ext::Plane;
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Plane::XZ.project(v), Vec2::new(1.0, 3.0));
/// assert_eq!(Plane::XZ.lift(Vec2::new(1.0, 3.0), 9.0), Vec3::new(1.0, 9.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Keeps x and y; z is the free axis.
    XY,
    /// Keeps x and z; y is the free axis.
    XZ,
    /// Keeps y and z; x is the free axis.
    YZ,
}

impl Plane {
    /// All planes, in axis order.
    pub const ALL: [Plane; 3] = [Plane::XY, Plane::XZ, Plane::YZ];

    /// Drops the free axis of a float vector.
    pub fn project(self, v: Vec3) -> Vec2 {
        match self {
            Plane::XY => Vec2::new(v.x, v.y),
            Plane::XZ => Vec2::new(v.x, v.z),
            Plane::YZ => Vec2::new(v.y, v.z),
        }
    }

    /// Drops the free axis of an integer vector.
    pub fn project_int(self, v: IVec3) -> IVec2 {
        match self {
            Plane::XY => IVec2::new(v.x, v.y),
            Plane::XZ => IVec2::new(v.x, v.z),
            Plane::YZ => IVec2::new(v.y, v.z),
        }
    }

    /// Places a float vector on the plane, writing `fill` into the free axis.
    pub fn lift(self, v: Vec2, fill: f32) -> Vec3 {
        match self {
            Plane::XY => Vec3::new(v.x, v.y, fill),
            Plane::XZ => Vec3::new(v.x, fill, v.y),
            Plane::YZ => Vec3::new(fill, v.x, v.y),
        }
    }

    /// Places an integer vector on the plane, writing `fill` into the free axis.
    pub fn lift_int(self, v: IVec2, fill: i32) -> IVec3 {
        match self {
            Plane::XY => IVec3::new(v.x, v.y, fill),
            Plane::XZ => IVec3::new(v.x, fill, v.y),
            Plane::YZ => IVec3::new(fill, v.x, v.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_then_lift_restores_kept_axes() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        for plane in Plane::ALL {
            let back = plane.lift(plane.project(v), 0.0);
            assert_eq!(plane.project(back), plane.project(v));
        }
    }

    #[test]
    fn lift_fills_free_axis() {
        let v = IVec2::new(4, 5);
        assert_eq!(Plane::XY.lift_int(v, 7), IVec3::new(4, 5, 7));
        assert_eq!(Plane::XZ.lift_int(v, 7), IVec3::new(4, 7, 5));
        assert_eq!(Plane::YZ.lift_int(v, 7), IVec3::new(7, 4, 5));
    }

    #[test]
    fn project_int_keeps_named_axes() {
        let v = IVec3::new(1, 2, 3);
        assert_eq!(Plane::XY.project_int(v), IVec2::new(1, 2));
        assert_eq!(Plane::XZ.project_int(v), IVec2::new(1, 3));
        assert_eq!(Plane::YZ.project_int(v), IVec2::new(2, 3));
    }
}
