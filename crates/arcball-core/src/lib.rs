//! Core of arcball-rs.
//!
//! This crate turns 2D pointer drags into an accumulated 3D rotation:
//! - [`normalize_to_plane`] maps pixels into a viewport-independent plane
//! - [`project_to_surface`] lifts plane points onto the sphere/hyperbolic-sheet surface
//! - [`rotation_between`] builds the rotation between two surface points
//! - [`Trackball`] holds the committed and in-progress rotation of a drag session

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod normalize;
pub mod options;
pub mod projection;
pub mod rotation;
pub mod trackball;

pub use error::{ArcballError, Result};
pub use normalize::normalize_to_plane;
pub use options::{clamp_radius, TrackballOptions, DEFAULT_RADIUS, MAX_RADIUS, MIN_RADIUS};
pub use projection::{project_to_surface, surface_point, SPHERE_SHEET_THRESHOLD};
pub use rotation::{drag_rotation, rotation_between};
pub use trackball::{DragState, Trackball};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, UVec2, Vec2, Vec3};
