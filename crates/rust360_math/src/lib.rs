//! Angle math for spherical video orientation
//!
//! This crate provides the value types and stateless calculations that turn
//! sensor and drag stimuli into a camera orientation.
//!
//! ## Core Types
//!
//! - [`Position`] - 2D look offset in radians (horizontal, vertical)
//! - [`RotationAngles`] - pitch/yaw/roll triple applied to a camera node
//! - [`RotationRate`] - angular rate sample from a gyroscope (rad/s)
//! - [`AxisMask`] - which look axes are allowed to move
//! - [`InterfaceOrientation`] - how the device is being held
//!
//! ## Calculations
//!
//! See the [`angles`] module for the pure update functions.

mod position;
mod axis;
pub mod angles;

pub use position::{Position, RotationAngles, RotationRate, ScreenPoint, ViewportSize};
pub use axis::{AxisMask, InterfaceOrientation};
pub use angles::{
    AngleCalculation, apply_axis_mask, compass_angle, optimal_field_of_view, unit_rotation,
    update_for_axis_mask_change, update_for_pan_delta, update_for_rotation_sample,
};
