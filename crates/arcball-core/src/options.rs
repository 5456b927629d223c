//! Configuration options for the trackball.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default trackball radius, as a fraction of the viewport.
pub const DEFAULT_RADIUS: f32 = 0.8;

/// Smallest accepted trackball radius.
pub const MIN_RADIUS: f32 = 0.1;

/// Largest accepted trackball radius.
pub const MAX_RADIUS: f32 = 1.0;

/// Construction options for a [`Trackball`](crate::Trackball).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackballOptions {
    /// Radius of the tracking sphere relative to the viewport.
    /// Clamped to `[0.1, 1.0]` when applied.
    pub radius: f32,

    /// Initial viewport size in pixels. `None` leaves the trackball
    /// unusable for rotation until a window size is set.
    pub window_size: Option<[u32; 2]>,
}

impl Default for TrackballOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            window_size: None,
        }
    }
}

impl TrackballOptions {
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
}

/// Clamps a requested radius into `[MIN_RADIUS, MAX_RADIUS]`.
///
/// Non-finite input falls back to [`DEFAULT_RADIUS`].
#[must_use]
pub fn clamp_radius(radius: f32) -> f32 {
    if radius.is_finite() {
        radius.clamp(MIN_RADIUS, MAX_RADIUS)
    } else {
        DEFAULT_RADIUS
    }
}
