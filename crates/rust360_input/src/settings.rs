//! Controller tuning

use std::time::Duration;

use rust360_math::angles::NOISE_THRESHOLD_DEFAULT;
use rust360_math::{AxisMask, Position};
use rust360_motion::DEFAULT_UPDATE_INTERVAL;

use crate::BuildError;

/// Tunable parameters for an [`OrientationController`](crate::OrientationController)
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerSettings {
    /// Cadence requested from the motion broker
    pub preferred_update_interval: Duration,
    /// Gyroscope rates below this (rad/s) are ignored
    pub noise_threshold: f32,
    /// Distance from the initial position the gyroscope must move the camera
    /// before it counts as a user interaction
    pub initial_movement_threshold: f32,
    /// How long the horizon reorientation animates for
    pub reorientation_duration: Duration,
    /// Look position at startup
    pub initial_position: Position,
    /// Axes the gyroscope may move
    pub allowed_sensor_axes: AxisMask,
    /// Axes a drag may move
    pub allowed_drag_axes: AxisMask,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            preferred_update_interval: DEFAULT_UPDATE_INTERVAL,
            noise_threshold: NOISE_THRESHOLD_DEFAULT,
            initial_movement_threshold: 0.75,
            reorientation_duration: Duration::from_millis(500),
            // Matches the compass reference angle, so the compass starts at zero
            initial_position: Position::new(3.14, 0.0),
            allowed_sensor_axes: AxisMask::Both,
            allowed_drag_axes: AxisMask::Both,
        }
    }
}

impl ControllerSettings {
    /// Builder: set the requested sensor cadence
    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.preferred_update_interval = interval;
        self
    }

    /// Builder: set the gyroscope dead zone
    pub fn with_noise_threshold(mut self, threshold: f32) -> Self {
        self.noise_threshold = threshold;
        self
    }

    /// Builder: set the first-movement distance threshold
    pub fn with_initial_movement_threshold(mut self, threshold: f32) -> Self {
        self.initial_movement_threshold = threshold;
        self
    }

    /// Builder: set the reorientation animation length
    pub fn with_reorientation_duration(mut self, duration: Duration) -> Self {
        self.reorientation_duration = duration;
        self
    }

    /// Builder: set the startup look position
    pub fn with_initial_position(mut self, position: Position) -> Self {
        self.initial_position = position;
        self
    }

    /// Builder: set the gyroscope axis mask
    pub fn with_sensor_axes(mut self, mask: AxisMask) -> Self {
        self.allowed_sensor_axes = mask;
        self
    }

    /// Builder: set the drag axis mask
    pub fn with_drag_axes(mut self, mask: AxisMask) -> Self {
        self.allowed_drag_axes = mask;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        if self.preferred_update_interval.is_zero() {
            return Err(BuildError::InvalidSetting(
                "preferred_update_interval must be positive".to_string(),
            ));
        }
        if !self.noise_threshold.is_finite() || self.noise_threshold < 0.0 {
            return Err(BuildError::InvalidSetting(format!(
                "noise_threshold must be finite and non-negative, got {}",
                self.noise_threshold
            )));
        }
        if !self.initial_movement_threshold.is_finite() || self.initial_movement_threshold < 0.0 {
            return Err(BuildError::InvalidSetting(format!(
                "initial_movement_threshold must be finite and non-negative, got {}",
                self.initial_movement_threshold
            )));
        }
        if !self.initial_position.x.is_finite() || !self.initial_position.y.is_finite() {
            return Err(BuildError::InvalidSetting(
                "initial_position must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
