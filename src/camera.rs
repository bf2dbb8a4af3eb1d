//! Headless camera node
//!
//! Stands in for a scene graph camera: it records the euler angles and FOV
//! the controller writes, and plays reorientation animations on a simple
//! countdown so the frame loop can report when they finish.

use std::time::Duration;

use rust360_input::SceneNode;
use rust360_math::RotationAngles;

/// Camera node that keeps its state in memory
#[derive(Debug, Default)]
pub struct HeadlessCamera {
    angles: RotationAngles,
    field_of_view: f32,
    // Animation opened by begin_animation but not yet committed
    pending_animation: Option<Duration>,
    // Time left on the committed animation
    running_animation: Option<Duration>,
}

impl HeadlessCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical field of view in degrees
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Whether a committed animation is still playing
    pub fn is_animating(&self) -> bool {
        self.running_animation.is_some()
    }

    /// Advance the running animation by `dt`
    ///
    /// Returns `true` on the frame the animation finishes.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self.running_animation {
            Some(remaining) if remaining > dt => {
                self.running_animation = Some(remaining - dt);
                false
            }
            Some(_) => {
                self.running_animation = None;
                true
            }
            None => false,
        }
    }
}

impl SceneNode for HeadlessCamera {
    fn euler_angles(&self) -> RotationAngles {
        self.angles
    }

    fn set_euler_angles(&mut self, angles: RotationAngles) {
        log::trace!("Camera angles -> {:?}", angles.to_array());
        self.angles = angles;
    }

    fn set_field_of_view(&mut self, degrees: f32) {
        log::debug!("Camera FOV -> {:.1} degrees", degrees);
        self.field_of_view = degrees;
    }

    fn begin_animation(&mut self, duration: Duration) {
        self.pending_animation = Some(duration);
    }

    fn commit_animation(&mut self) {
        if let Some(duration) = self.pending_animation.take() {
            self.running_animation = Some(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_angles_and_fov() {
        let mut camera = HeadlessCamera::new();
        camera.set_euler_angles(RotationAngles::new(0.1, 0.2, 0.0));
        camera.set_field_of_view(72.0);
        assert_eq!(camera.euler_angles(), RotationAngles::new(0.1, 0.2, 0.0));
        assert_eq!(camera.field_of_view(), 72.0);
    }

    #[test]
    fn test_animation_runs_after_commit() {
        let mut camera = HeadlessCamera::new();
        camera.begin_animation(Duration::from_millis(40));
        assert!(!camera.is_animating());
        camera.commit_animation();
        assert!(camera.is_animating());

        assert!(!camera.advance(Duration::from_millis(16)));
        assert!(!camera.advance(Duration::from_millis(16)));
        assert!(camera.advance(Duration::from_millis(16)));
        assert!(!camera.is_animating());
        assert!(!camera.advance(Duration::from_millis(16)));
    }
}
