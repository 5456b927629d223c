//! Host camera for arcball-rs.
//!
//! Wraps a [`Trackball`](arcball_core::Trackball) in a perspective camera:
//! - [`Camera`] look-at view, trackball rotation, FOV zoom and projection
//! - [`Spin`] optional frame-counted model rotation
//! - [`CameraUniforms`] matrices packed for upload to a graphics pipeline

#![allow(clippy::missing_errors_doc)]

pub mod camera;
pub mod spin;
pub mod uniforms;

pub use camera::{Camera, CameraOptions, MAX_FOV_DEGREES, MIN_FOV_DEGREES};
pub use spin::{Spin, DEFAULT_SPIN_PERIOD};
pub use uniforms::CameraUniforms;
