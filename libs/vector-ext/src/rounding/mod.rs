//! Float to integer rounding policies used by the converters.

use glam::{IVec2, IVec3, Vec2, Vec3};

/// How a float component becomes an integer.
///
/// Every policy saturates at `i32::MIN`/`i32::MAX` and maps NaN to zero,
/// like an `as` cast. Hardware conversions such as x86 `cvttss2si` return
/// `i32::MIN` for NaN instead; callers porting code that relied on that
/// sentinel must check `is_nan()` first.
///
/// # Examples
/// ```
/// use vector_ext::Rounding;
///
/// assert_eq!(Rounding::Truncate.apply(-1.5), -1);
/// assert_eq!(Rounding::Floor.apply(-1.5), -2);
/// assert_eq!(Rounding::Ceil.apply(-1.5), -1);
/// assert_eq!(Rounding::Nearest.apply(-1.5), -2);
/// assert_eq!(Rounding::Nearest.apply(2.5), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Drop the fractional part (round toward zero).
    #[default]
    Truncate,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round to the nearest integer, ties to even.
    Nearest,
}

impl Rounding {
    /// Converts a single component.
    pub fn apply(self, value: f32) -> i32 {
        let rounded = match self {
            Rounding::Truncate => value,
            Rounding::Floor => value.floor(),
            Rounding::Ceil => value.ceil(),
            Rounding::Nearest => value.round_ties_even(),
        };
        rounded as i32
    }

    /// Converts both components of a 2D vector.
    pub fn apply_vec2(self, v: Vec2) -> IVec2 {
        IVec2::new(self.apply(v.x), self.apply(v.y))
    }

    /// Converts all three components of a 3D vector.
    pub fn apply_vec3(self, v: Vec3) -> IVec3 {
        IVec3::new(self.apply(v.x), self.apply(v.y), self.apply(v.z))
    }
}

#[cfg(test)]
mod tests;
