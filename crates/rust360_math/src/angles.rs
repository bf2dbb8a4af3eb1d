//! Stateless orientation calculations
//!
//! Every update function takes the current [`Position`] plus a stimulus and
//! returns the new position together with the derived [`RotationAngles`].
//! Nothing here keeps state between calls.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::{AxisMask, InterfaceOrientation, Position, RotationAngles, RotationRate, ScreenPoint, ViewportSize};

/// Rotation rates below this magnitude (rad/s) are treated as sensor drift
pub const NOISE_THRESHOLD_DEFAULT: f32 = 0.12;

/// Scales raw rotation rates into per-sample position deltas
pub const ROTATION_RATE_DAMPING: f32 = 0.02;

/// Fraction of a full turn applied per viewport width of horizontal drag
pub const PAN_HORIZONTAL_SCALE: f32 = 0.5;

/// Fraction of a full turn applied per viewport height of vertical drag.
/// Lower than the horizontal scale; 0.5 felt uncomfortable vertically.
pub const PAN_VERTICAL_SCALE: f32 = 0.4;

/// Yaw offset that makes the compass read zero at the initial look direction
pub const REFERENCE_COMPASS_ANGLE: f32 = 3.14;

/// Vertical field of view bounds and fallback, in degrees
pub const FOV_MIN: f32 = 40.0;
pub const FOV_MAX: f32 = 120.0;
pub const FOV_DEFAULT: f32 = 60.0;

/// Linear fit of vertical FOV (degrees) against aspect ratio
pub const FOV_SLOPE: f32 = -33.6;
pub const FOV_INTERCEPT: f32 = 118.0;

/// Results this close to a full turn wrap to zero
pub const WRAP_EPSILON: f32 = 1e-4;

/// New position plus the angles to apply to the camera node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleCalculation {
    pub position: Position,
    pub angles: RotationAngles,
}

impl AngleCalculation {
    #[inline]
    fn from_position(position: Position) -> Self {
        Self {
            position,
            angles: position.to_angles(),
        }
    }
}

/// Zero every component of `position` that `mask` does not allow
#[inline]
pub fn apply_axis_mask(position: Position, mask: AxisMask) -> Position {
    Position::new(
        if mask.allows_horizontal() { position.x } else { 0.0 },
        if mask.allows_vertical() { position.y } else { 0.0 },
    )
}

/// Re-project an existing position after the allowed axes changed
pub fn update_for_axis_mask_change(position: Position, mask: AxisMask) -> AngleCalculation {
    AngleCalculation::from_position(apply_axis_mask(position, mask))
}

/// Advance `position` by one angular-rate sample
///
/// Components of `rate` below `noise_threshold` are dropped first. The
/// mapping from device axes to look axes depends on how the device is held:
/// in landscape the device x axis drives yaw, in portrait the y axis does.
/// Landscape-left and landscape-right mirror each other.
pub fn update_for_rotation_sample(
    position: Position,
    rate: RotationRate,
    orientation: InterfaceOrientation,
    mask: AxisMask,
    noise_threshold: f32,
) -> AngleCalculation {
    let rate = rate.filter_noise(noise_threshold);
    let damping = ROTATION_RATE_DAMPING;

    let mut next = if orientation.is_landscape() {
        let modifier = match orientation {
            InterfaceOrientation::LandscapeLeft => -1.0,
            _ => 1.0,
        };
        Position::new(
            position.x + rate.x * damping * modifier,
            position.y - rate.y * damping * modifier,
        )
    } else {
        Position::new(
            position.x + rate.y * damping,
            position.y + rate.x * damping,
        )
    };

    next.y = clamp_vertical(next.y);
    AngleCalculation::from_position(apply_axis_mask(next, mask))
}

/// Advance `position` by a drag of `delta` across a viewport of `viewport` size
///
/// An axis whose viewport extent is not positive contributes nothing.
pub fn update_for_pan_delta(
    position: Position,
    delta: ScreenPoint,
    viewport: ViewportSize,
    mask: AxisMask,
) -> AngleCalculation {
    let dx = if viewport.width > 0.0 {
        TAU * delta.x / viewport.width * PAN_HORIZONTAL_SCALE
    } else {
        0.0
    };
    let dy = if viewport.height > 0.0 {
        TAU * delta.y / viewport.height * PAN_VERTICAL_SCALE
    } else {
        0.0
    };

    let mut next = Position::new(position.x + dx, position.y + dy);
    next.y = clamp_vertical(next.y);
    AngleCalculation::from_position(apply_axis_mask(next, mask))
}

/// Normalize an angle into [0, 2π)
///
/// Values within [`WRAP_EPSILON`] of either end snap to zero so a reading
/// hovering around north does not flicker between 0 and 2π.
pub fn unit_rotation(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped < WRAP_EPSILON || TAU - wrapped < WRAP_EPSILON {
        0.0
    } else {
        wrapped
    }
}

/// Compass heading for a camera yaw, in [0, 2π)
#[inline]
pub fn compass_angle(yaw: f32) -> f32 {
    unit_rotation(-yaw + REFERENCE_COMPASS_ANGLE)
}

/// Vertical field of view (degrees) suited to a viewport's aspect ratio
///
/// Wide viewports get a narrower FOV, square and portrait ones a wider FOV.
/// Falls back to [`FOV_DEFAULT`] when the height is not positive.
pub fn optimal_field_of_view(viewport: ViewportSize) -> f32 {
    match viewport.aspect_ratio() {
        Some(ratio) => (FOV_SLOPE * ratio + FOV_INTERCEPT).clamp(FOV_MIN, FOV_MAX),
        None => FOV_DEFAULT,
    }
}

#[inline]
fn clamp_vertical(y: f32) -> f32 {
    y.clamp(-FRAC_PI_2, FRAC_PI_2)
}
