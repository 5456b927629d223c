//! Drag-driven trackball rotation state.
//!
//! A [`Trackball`] turns a pointer drag into a rotation. The rotation of all
//! finished drags is kept in a committed base quaternion; the drag in progress
//! only touches a transient quaternion, which is folded into the base on
//! [`Trackball::end_drag`]. Queries compose both as `transient * base`, so a
//! new drag always rotates about axes of the already-rotated frame.

use glam::{Mat4, Quat, UVec2, Vec2};

use crate::options::{clamp_radius, TrackballOptions, DEFAULT_RADIUS};
use crate::rotation::drag_rotation;

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag session is open.
    #[default]
    Idle,
    /// A drag is open, anchored at `start` (pixel coordinates).
    Dragging {
        /// Pixel position where the drag started.
        start: Vec2,
    },
}

/// A virtual trackball producing a camera rotation from pointer drags.
#[derive(Debug, Clone)]
pub struct Trackball {
    base_rotation: Quat,
    transient_rotation: Quat,
    state: DragState,
    window_size: UVec2,
    radius: f32,
}

impl Default for Trackball {
    fn default() -> Self {
        Self::new()
    }
}

impl Trackball {
    /// Creates a trackball with identity rotation and no window size.
    ///
    /// Drags are ignored until [`set_window_size`](Self::set_window_size) is
    /// called with a non-zero size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_rotation: Quat::IDENTITY,
            transient_rotation: Quat::IDENTITY,
            state: DragState::Idle,
            window_size: UVec2::ZERO,
            radius: DEFAULT_RADIUS,
        }
    }

    /// Creates a trackball for a window of the given size.
    ///
    /// `radius` is the size of the tracking sphere relative to the window and
    /// is clamped to `[0.1, 1.0]`.
    #[must_use]
    pub fn with_window_size(width: u32, height: u32, radius: f32) -> Self {
        Self {
            window_size: UVec2::new(width, height),
            radius: clamp_radius(radius),
            ..Self::new()
        }
    }

    /// Creates a trackball from options.
    #[must_use]
    pub fn from_options(options: &TrackballOptions) -> Self {
        let [width, height] = options.window_size.unwrap_or([0, 0]);
        Self::with_window_size(width, height, options.radius)
    }

    /// Resets to the identity rotation, discarding any drag in progress.
    pub fn reset_rotation(&mut self) {
        self.base_rotation = Quat::IDENTITY;
        self.transient_rotation = Quat::IDENTITY;
        self.state = DragState::Idle;
        log::debug!("trackball rotation reset");
    }

    /// Starts a drag at the given pixel position.
    ///
    /// Starting while already dragging moves the anchor; the transient
    /// rotation is kept until the next [`drag`](Self::drag).
    pub fn start_drag(&mut self, position: Vec2) {
        self.state = DragState::Dragging { start: position };
        log::debug!("trackball drag started at ({}, {})", position.x, position.y);
    }

    /// Updates the drag in progress with the current pixel position.
    ///
    /// Does nothing while idle. If the window size is degenerate or the point
    /// cannot be projected, the previous transient rotation is kept.
    pub fn drag(&mut self, position: Vec2) {
        let DragState::Dragging { start } = self.state else {
            return;
        };

        match drag_rotation(start, position, self.window_size, self.radius) {
            Ok(rotation) => {
                self.transient_rotation = rotation;
                log::trace!("trackball drag to ({}, {})", position.x, position.y);
            }
            Err(err) => log::debug!("trackball drag skipped: {err}"),
        }
    }

    /// Ends the drag, committing its rotation into the base rotation.
    ///
    /// Does nothing while idle.
    pub fn end_drag(&mut self) {
        if self.state == DragState::Idle {
            return;
        }
        self.state = DragState::Idle;
        self.base_rotation = (self.transient_rotation * self.base_rotation).normalize();
        self.transient_rotation = Quat::IDENTITY;
        log::debug!("trackball drag committed");
    }

    /// Sets the window size used by future drags.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = UVec2::new(width, height);
    }

    /// Returns the registered window size.
    #[must_use]
    pub fn window_size(&self) -> UVec2 {
        self.window_size
    }

    /// Returns the clamped trackball radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the current rotation as a 4x4 matrix.
    ///
    /// This is `transient * base`, so it includes the uncommitted part of a
    /// drag in progress. It does not modify any state.
    #[must_use]
    pub fn rotation(&self) -> Mat4 {
        Mat4::from_quat(self.rotation_quat())
    }

    /// Returns the current rotation as a quaternion.
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        self.transient_rotation * self.base_rotation
    }

    /// Returns the rotation committed by finished drags.
    #[must_use]
    pub fn base_rotation(&self) -> Quat {
        self.base_rotation
    }

    /// Returns the uncommitted rotation of the drag in progress.
    #[must_use]
    pub fn transient_rotation(&self) -> Quat {
        self.transient_rotation
    }

    /// Returns the drag state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.state
    }

    /// Returns whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}
