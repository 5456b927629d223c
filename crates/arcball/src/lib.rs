//! arcball: virtual trackball camera orientation for interactive 3D viewers.
//!
//! A [`Trackball`] converts pointer drags into a rotation that the host
//! renderer applies between its look-at and model matrices. Near the viewport
//! center the drag is projected onto a sphere; farther out it falls on a
//! hyperbolic sheet, so rotation stays finite for drags anywhere on screen.
//!
//! # Quick Start
//!
//! ```
//! use arcball::*;
//!
//! let mut ball = Trackball::with_window_size(800, 600, 0.8);
//! ball.start_drag(Vec2::new(400.0, 300.0));
//! ball.drag(Vec2::new(450.0, 300.0));
//! let preview = ball.rotation();
//! ball.end_drag();
//! assert!(ball.rotation().abs_diff_eq(preview, 1e-6));
//! ```
//!
//! # Windowed hosts
//!
//! [`Camera`] owns a trackball together with a look-at view and perspective
//! projection; [`InputHandler`] feeds it from winit window events.

pub mod input;

pub use arcball_core::{
    clamp_radius, drag_rotation, normalize_to_plane, project_to_surface, rotation_between,
    surface_point, ArcballError, DragState, Result, Trackball, TrackballOptions, DEFAULT_RADIUS,
    MAX_RADIUS, MIN_RADIUS, SPHERE_SHEET_THRESHOLD,
};
pub use arcball_core::{Mat4, Quat, UVec2, Vec2, Vec3};

pub use arcball_camera::{
    Camera, CameraOptions, CameraUniforms, Spin, DEFAULT_SPIN_PERIOD, MAX_FOV_DEGREES,
    MIN_FOV_DEGREES,
};

pub use input::{InputHandler, ANGLE_DELTA_PER_LINE};

/// Initializes `env_logger` for the host application.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
    log::debug!("arcball logging initialized");
}
