//! Orientation change notifications

use slotmap::new_key_type;

new_key_type! {
    /// Handle returned by [`OrientationController::add_listener`](crate::OrientationController::add_listener)
    pub struct ListenerKey;
}

/// Which input first moved the camera
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionMethod {
    /// Physically rotating the device
    Gyroscope,
    /// Dragging across the viewport
    Touch,
}

/// Receives orientation events from the controller
///
/// Callbacks run synchronously on the render tick and must return quickly:
/// treat them as having a budget well under a millisecond.
pub trait OrientationListener {
    /// The compass heading was recomputed (radians, in [0, 2π))
    fn compass_angle_changed(&mut self, _angle: f32) {}

    /// The user moved the camera for the first time. Fires at most once per
    /// controller.
    fn initial_movement(&mut self, _method: InteractionMethod) {}
}
