//! Camera and view management.

use std::path::Path;

use arcball_core::{ArcballError, Result, Trackball, TrackballOptions, Vec2};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::spin::{Spin, DEFAULT_SPIN_PERIOD};

/// Smallest field of view reachable by [`Camera::zoom_fov`], in degrees.
pub const MIN_FOV_DEGREES: f32 = 10.0;

/// Largest field of view reachable by [`Camera::zoom_fov`], in degrees.
pub const MAX_FOV_DEGREES: f32 = 170.0;

/// Serializable camera setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Trackball settings.
    pub trackball: TrackballOptions,
    /// Frames per model spin revolution.
    pub spin_period_frames: u32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 4.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees: 30.0,
            near: 2.0,
            far: 5.0,
            trackball: TrackballOptions::default(),
            spin_period_frames: DEFAULT_SPIN_PERIOD,
        }
    }
}

impl CameraOptions {
    /// Parses options from JSON text. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the clipping planes and look-at frame.
    pub fn validate(&self) -> Result<()> {
        if self.near.is_nan() || self.near <= 0.0 {
            return Err(ArcballError::InvalidOption(format!(
                "near plane must be positive, got {}",
                self.near
            )));
        }
        if !self.far.is_finite() || self.far <= self.near {
            return Err(ArcballError::InvalidOption(format!(
                "far plane ({}) must be finite and beyond near plane ({})",
                self.far, self.near
            )));
        }
        if !self.fov_y_degrees.is_finite() {
            return Err(ArcballError::InvalidOption(
                "field of view is not finite".to_string(),
            ));
        }
        if !self.eye.is_finite() || !self.target.is_finite() || !self.up.is_finite() {
            return Err(ArcballError::InvalidOption(
                "eye, target and up must be finite".to_string(),
            ));
        }

        let forward = (self.target - self.eye).normalize_or_zero();
        if forward == Vec3::ZERO {
            return Err(ArcballError::InvalidOption(
                "eye and target coincide".to_string(),
            ));
        }
        if self.up.length_squared() <= f32::EPSILON {
            return Err(ArcballError::InvalidOption(
                "up vector is zero or too short".to_string(),
            ));
        }
        // look_at_rh needs a non-degenerate side vector.
        if forward.cross(self.up.normalize()).length_squared() <= f32::EPSILON {
            return Err(ArcballError::InvalidOption(
                "up vector is parallel to the view direction".to_string(),
            ));
        }
        Ok(())
    }
}

/// A 3D camera whose orientation is driven by a [`Trackball`].
///
/// The view matrix is the look-at transform followed by the trackball
/// rotation, so dragging turns the scene in front of a fixed eye.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Trackball owning the scene orientation.
    pub trackball: Trackball,
    /// Model spin animation.
    pub spin: Spin,
}

impl Camera {
    /// Creates a camera with default settings for a window of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let options = CameraOptions::default();
        let mut camera = Self::build(&options);
        camera.resize(width, height);
        camera
    }

    /// Creates a camera from options for a window of the given size.
    ///
    /// The trackball window size from `options` is overridden by
    /// `width`/`height`.
    pub fn from_options(options: &CameraOptions, width: u32, height: u32) -> Result<Self> {
        options.validate()?;
        let mut camera = Self::build(options);
        camera.resize(width, height);
        Ok(camera)
    }

    fn build(options: &CameraOptions) -> Self {
        Self {
            eye: options.eye,
            target: options.target,
            up: options.up,
            fov_y_degrees: options.fov_y_degrees.clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES),
            near: options.near,
            far: options.far,
            aspect_ratio: 1.0,
            trackball: Trackball::from_options(&options.trackball),
            spin: Spin::new(options.spin_period_frames),
        }
    }

    /// Handles a window resize.
    ///
    /// Updates the aspect ratio and the trackball window size. A zero height
    /// keeps the previous aspect ratio.
    #[allow(clippy::cast_precision_loss)]
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
        self.trackball.set_window_size(width, height);
        log::debug!("camera resized to {width}x{height}");
    }

    /// Returns the look-at matrix, without the trackball rotation.
    #[must_use]
    pub fn look_at_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.look_at_matrix() * self.trackball.rotation()
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }

    /// Returns the model matrix of the displayed object.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        self.spin.model_matrix()
    }

    /// Returns the combined projection * view * model matrix.
    #[must_use]
    pub fn pvm_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix() * self.model_matrix()
    }

    /// Advances per-frame animation. Call once per rendered frame.
    pub fn advance_frame(&mut self) {
        self.spin.advance();
    }

    /// Zooms by changing the field of view.
    ///
    /// `angle_delta` is a wheel delta in eighths of a degree (one notch is
    /// 120). The field of view changes by `angle_delta / 16` degrees.
    pub fn zoom_fov(&mut self, angle_delta: f32) {
        if !angle_delta.is_finite() {
            return;
        }
        self.fov_y_degrees =
            (self.fov_y_degrees + angle_delta / 16.0).clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES);
    }

    /// Starts a trackball drag at a pixel position.
    pub fn start_drag(&mut self, position: Vec2) {
        self.trackball.start_drag(position);
    }

    /// Continues a trackball drag.
    pub fn drag(&mut self, position: Vec2) {
        self.trackball.drag(position);
    }

    /// Ends the trackball drag.
    pub fn end_drag(&mut self) {
        self.trackball.end_drag();
    }

    /// Resets the trackball orientation.
    pub fn reset_rotation(&mut self) {
        self.trackball.reset_rotation();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
