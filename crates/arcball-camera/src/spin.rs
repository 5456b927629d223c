//! Automatic model spin about the +Z axis.

use glam::{Mat4, Vec3};

/// Default number of frames per full revolution.
pub const DEFAULT_SPIN_PERIOD: u32 = 200;

/// Frame-counted spin of the displayed model.
///
/// The angle advances by `360° / period` every frame while enabled, so the
/// default period of 200 frames gives roughly 90°/s at 50 fps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spin {
    enabled: bool,
    frame: u32,
    period: u32,
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(DEFAULT_SPIN_PERIOD)
    }
}

impl Spin {
    /// Creates a disabled spin with the given period (at least one frame).
    #[must_use]
    pub fn new(period: u32) -> Self {
        Self {
            enabled: false,
            frame: 0,
            period: period.max(1),
        }
    }

    /// Returns whether the model is spinning.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the spin.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled != self.enabled {
            self.enabled = enabled;
            log::debug!("model spin {}", if enabled { "enabled" } else { "disabled" });
        }
    }

    /// Flips the spin on or off.
    pub fn toggle(&mut self) {
        self.set_enabled(!self.enabled);
    }

    /// Returns the current frame counter.
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Returns the number of frames per revolution.
    #[must_use]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Advances the frame counter by one, wrapping at the period.
    ///
    /// The counter runs even while disabled.
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % self.period;
    }

    /// Returns the current spin angle in degrees.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn angle_degrees(&self) -> f32 {
        360.0 * self.frame as f32 / self.period as f32
    }

    /// Returns the model matrix: identity while disabled.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        if self.enabled {
            Mat4::from_axis_angle(Vec3::Z, self.angle_degrees().to_radians())
        } else {
            Mat4::IDENTITY
        }
    }
}
