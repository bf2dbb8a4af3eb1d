//! Camera node seam
//!
//! The controller writes its output through [`SceneNode`], so it can drive
//! any scene graph's camera.

use std::time::Duration;

use rust360_math::RotationAngles;

/// The 3D camera node the controller orients
///
/// The animation hooks bracket changes that a renderer should animate
/// rather than apply instantly. When such an animation finishes the
/// renderer must call
/// [`OrientationController::complete_reorientation`](crate::OrientationController::complete_reorientation).
pub trait SceneNode {
    /// Current euler angles of the node
    fn euler_angles(&self) -> RotationAngles;
    /// Replace the node's euler angles
    fn set_euler_angles(&mut self, angles: RotationAngles);
    /// Set the vertical field of view, in degrees
    fn set_field_of_view(&mut self, degrees: f32);
    /// Changes until [`commit_animation`](Self::commit_animation) animate over `duration`
    fn begin_animation(&mut self, _duration: Duration) {}
    /// Close the animation opened by [`begin_animation`](Self::begin_animation)
    fn commit_animation(&mut self) {}
}
