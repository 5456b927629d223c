//! Projection of normalized points onto the trackball surface.
//!
//! The surface is a sphere of radius `r` near the origin, switching to the
//! hyperbolic sheet `z = (r²/2) / |p|` once `|p|² > r²/2`. Both pieces meet
//! at `|p| = r/√2` with equal height and slope, so points far outside the
//! ball still get a finite, slowly vanishing height.

use glam::{Vec2, Vec3};

/// Fraction of `r²` at which the surface switches from sphere to sheet.
pub const SPHERE_SHEET_THRESHOLD: f32 = 0.5;

/// Returns the surface height `z` above the normalized point.
#[must_use]
pub fn project_to_surface(point: Vec2, radius: f32) -> f32 {
    let r2 = radius * radius;
    let d2 = point.length_squared();
    if d2 <= SPHERE_SHEET_THRESHOLD * r2 {
        (r2 - d2).sqrt()
    } else {
        (SPHERE_SHEET_THRESHOLD * r2) / d2.sqrt()
    }
}

/// Completes a normalized point into a 3D point on the surface.
#[must_use]
pub fn surface_point(point: Vec2, radius: f32) -> Vec3 {
    point.extend(project_to_surface(point, radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_is_sphere_apex() {
        assert!((project_to_surface(Vec2::ZERO, 0.8) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_regime() {
        let z = project_to_surface(Vec2::new(0.125, 0.0), 0.8);
        assert!((z - (0.64f32 - 0.015_625).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_sheet_regime() {
        let p = Vec2::new(3.0, 4.0);
        let z = project_to_surface(p, 0.8);
        assert!((z - 0.32 / 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_regimes_agree_at_threshold() {
        let radius = 0.8_f32;
        let edge = radius / 2.0_f32.sqrt();
        let inside = project_to_surface(Vec2::new(edge - 1e-4, 0.0), radius);
        let outside = project_to_surface(Vec2::new(edge + 1e-4, 0.0), radius);
        assert!((inside - outside).abs() < 1e-3);
        assert!((inside - edge).abs() < 1e-3);
    }

    #[test]
    fn test_surface_point_keeps_xy() {
        let p = Vec2::new(-0.2, 0.3);
        let v = surface_point(p, 0.5);
        assert_eq!(v.truncate(), p);
        assert!(v.z > 0.0);
    }

    proptest! {
        #[test]
        fn prop_height_is_positive_and_bounded(
            x in -50.0f32..50.0,
            y in -50.0f32..50.0,
            radius in 0.1f32..=1.0,
        ) {
            let z = project_to_surface(Vec2::new(x, y), radius);
            prop_assert!(z.is_finite());
            prop_assert!(z > 0.0);
            prop_assert!(z <= radius + 1e-6);
        }
    }
}
