//! Pixel to normalized-plane conversion.

use glam::{UVec2, Vec2};

use crate::error::{ArcballError, Result};

/// Maps a pixel-space point into the symmetric `[-1, 1]` plane of the viewport.
///
/// The viewport center maps to the origin and the y axis is flipped so that
/// moving the pointer down the screen gives negative values.
///
/// # Errors
///
/// Returns [`ArcballError::DegenerateViewport`] if either viewport dimension
/// is zero, and [`ArcballError::NonFinitePoint`] if `pixel` is not finite.
pub fn normalize_to_plane(pixel: Vec2, viewport: UVec2) -> Result<Vec2> {
    if viewport.x == 0 || viewport.y == 0 {
        return Err(ArcballError::DegenerateViewport {
            width: viewport.x,
            height: viewport.y,
        });
    }
    if !pixel.is_finite() {
        return Err(ArcballError::NonFinitePoint);
    }

    let size = viewport.as_vec2();
    let center = 0.5 * size;
    let scale = Vec2::new(2.0 / size.x, -2.0 / size.y);
    Ok(scale * (pixel - center))
}
