//! Rotation between two trackball surface points.

use glam::{Quat, UVec2, Vec2, Vec3};

use crate::error::{ArcballError, Result};
use crate::normalize::normalize_to_plane;
use crate::projection::surface_point;

/// Returns the rotation carrying the drag from `start` to `current`.
///
/// Both inputs are surface points and are normalized here. The quaternion is
/// built as `normalize(cos(θ/2), sin(θ/2) · (v₁ × v₂))` with `v₁` the current
/// direction, `v₂` the start direction and `θ` the unsigned angle between
/// them. The cross product is used as-is, without rescaling to unit length.
///
/// Coincident or degenerate directions give [`Quat::IDENTITY`].
#[must_use]
pub fn rotation_between(current: Vec3, start: Vec3) -> Quat {
    let v1 = current.normalize_or_zero();
    let v2 = start.normalize_or_zero();
    if v1 == Vec3::ZERO || v2 == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let axis = v1.cross(v2);
    if axis == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let angle = v1.dot(v2).clamp(-1.0, 1.0).acos();
    let (sin, cos) = (0.5 * angle).sin_cos();
    let axis = sin * axis;

    let q = Quat::from_xyzw(axis.x, axis.y, axis.z, cos);
    let len2 = q.length_squared();
    if !len2.is_finite() || len2 <= f32::EPSILON {
        return Quat::IDENTITY;
    }
    q.normalize()
}

/// Computes the drag rotation for two pixel points in one step.
///
/// Chains [`normalize_to_plane`], [`surface_point`] and [`rotation_between`].
///
/// # Errors
///
/// Fails if the viewport is degenerate or if either point (or its surface
/// lift) is not finite.
pub fn drag_rotation(start: Vec2, current: Vec2, viewport: UVec2, radius: f32) -> Result<Quat> {
    let p_now = normalize_to_plane(current, viewport)?;
    let p_start = normalize_to_plane(start, viewport)?;

    let v1 = surface_point(p_now, radius);
    let v2 = surface_point(p_start, radius);
    if !v1.length_squared().is_finite() || !v2.length_squared().is_finite() {
        return Err(ArcballError::NonFinitePoint);
    }

    Ok(rotation_between(v1, v2))
}
