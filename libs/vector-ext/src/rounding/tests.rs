//! Tests for the rounding policies.

use super::*;

#[test]
fn policies_on_positive_fraction() {
    assert_eq!(Rounding::Truncate.apply(1.7), 1);
    assert_eq!(Rounding::Floor.apply(1.7), 1);
    assert_eq!(Rounding::Ceil.apply(1.2), 2);
    assert_eq!(Rounding::Nearest.apply(1.7), 2);
}

#[test]
fn policies_on_negative_fraction() {
    assert_eq!(Rounding::Truncate.apply(-1.7), -1);
    assert_eq!(Rounding::Floor.apply(-1.2), -2);
    assert_eq!(Rounding::Ceil.apply(-1.7), -1);
    assert_eq!(Rounding::Nearest.apply(-1.7), -2);
}

/// Halfway values go to the even neighbour, matching the engine's RoundToInt.
#[test]
fn nearest_ties_to_even() {
    assert_eq!(Rounding::Nearest.apply(0.5), 0);
    assert_eq!(Rounding::Nearest.apply(1.5), 2);
    assert_eq!(Rounding::Nearest.apply(2.5), 2);
    assert_eq!(Rounding::Nearest.apply(-2.5), -2);
}

#[test]
fn conversion_saturates() {
    assert_eq!(Rounding::Truncate.apply(1.0e12), i32::MAX);
    assert_eq!(Rounding::Floor.apply(-1.0e12), i32::MIN);
    assert_eq!(Rounding::Nearest.apply(f32::NAN), 0);
}

#[test]
fn nan_maps_to_zero_for_every_policy() {
    for rounding in [
        Rounding::Truncate,
        Rounding::Floor,
        Rounding::Ceil,
        Rounding::Nearest,
    ] {
        assert_eq!(rounding.apply(f32::NAN), 0, "{rounding:?}");
        assert_eq!(rounding.apply(f32::INFINITY), i32::MAX, "{rounding:?}");
        assert_eq!(rounding.apply(f32::NEG_INFINITY), i32::MIN, "{rounding:?}");
    }
    assert_eq!(Rounding::Floor.apply_vec2(Vec2::new(f32::NAN, 1.5)), IVec2::new(0, 1));
}

#[test]
fn default_is_truncate() {
    assert_eq!(Rounding::default(), Rounding::Truncate);
}

#[test]
fn applies_component_wise() {
    assert_eq!(
        Rounding::Floor.apply_vec2(Vec2::new(1.5, -1.5)),
        IVec2::new(1, -2)
    );
    assert_eq!(
        Rounding::Ceil.apply_vec3(Vec3::new(1.5, -1.5, 0.1)),
        IVec3::new(2, -1, 1)
    );
}
