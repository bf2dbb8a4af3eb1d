//! Scripted frame loop
//!
//! Plays the renderer's role for the headless demo. Each frame:
//! - Feeds the scripted gyroscope reading to the simulated sensor
//! - Ticks the orientation controller
//! - Advances any camera animation and reports its completion

use std::time::Duration;

use rust360_input::OrientationController;
use rust360_math::RotationRate;
use rust360_motion::SimulatedSensor;

use crate::camera::HeadlessCamera;

/// Result of a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationResult {
    /// Whether the gyroscope sample moved the camera this frame
    pub camera_updated: bool,
    /// Whether a reorientation animation finished this frame
    pub reorientation_finished: bool,
}

/// Drives a controller at a fixed frame rate with a constant gyroscope reading
pub struct SimulationSystem {
    sensor: SimulatedSensor,
    gyro_rate: RotationRate,
    frame_interval: Duration,
    frame: u32,
}

impl SimulationSystem {
    /// Create a system feeding `sensor` with `gyro_rate` every `frame_interval`
    pub fn new(sensor: SimulatedSensor, gyro_rate: RotationRate, frame_interval: Duration) -> Self {
        Self {
            sensor,
            gyro_rate,
            frame_interval,
            frame: 0,
        }
    }

    /// Replace the scripted gyroscope reading
    pub fn set_gyro_rate(&mut self, rate: RotationRate) {
        self.gyro_rate = rate;
    }

    /// Frames run so far
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Simulated time elapsed
    pub fn elapsed(&self) -> Duration {
        self.frame_interval.saturating_mul(self.frame)
    }

    /// Run one frame
    pub fn update(&mut self, controller: &mut OrientationController<HeadlessCamera>) -> SimulationResult {
        // 1. Hardware delivers a reading
        self.sensor.push_rate(self.gyro_rate);

        // 2. Render-loop tick
        let camera_updated = controller.update_camera_angle_for_current_device_motion();

        // 3. Animation completion hook
        let reorientation_finished = controller.node_mut().advance(self.frame_interval);
        if reorientation_finished {
            controller.complete_reorientation();
        }

        self.frame = self.frame.saturating_add(1);
        SimulationResult {
            camera_updated,
            reorientation_finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust360_input::{ControllerState, SceneNode};
    use rust360_math::ViewportSize;
    use rust360_motion::MotionBroker;

    fn setup(rate: RotationRate) -> (SimulationSystem, OrientationController<HeadlessCamera>) {
        let sensor = SimulatedSensor::new();
        let broker = MotionBroker::new(sensor.clone()).into_shared();
        let mut controller = OrientationController::builder()
            .scene_node(HeadlessCamera::new())
            .motion_broker(broker)
            .viewport(ViewportSize::new(1280.0, 720.0))
            .build()
            .unwrap();
        controller.start_updates();
        let system = SimulationSystem::new(sensor, rate, Duration::from_millis(10));
        (system, controller)
    }

    #[test]
    fn test_each_frame_ticks_controller() {
        let (mut system, mut controller) = setup(RotationRate::new(0.0, 1.0, 0.0));
        let start = controller.position();
        for _ in 0..5 {
            assert!(system.update(&mut controller).camera_updated);
        }
        assert_eq!(system.frame(), 5);
        assert_eq!(system.elapsed(), Duration::from_millis(50));
        // Portrait: device y drives yaw
        assert!((controller.position().x - (start.x + 5.0 * 0.02)).abs() < 1e-5);
        assert_eq!(controller.node().euler_angles(), controller.angles());
    }

    #[test]
    fn test_elapsed_saturates_instead_of_overflowing() {
        let mut system = SimulationSystem::new(SimulatedSensor::new(), RotationRate::ZERO, Duration::MAX);
        system.frame = 3;
        assert_eq!(system.elapsed(), Duration::MAX);

        let mut system = SimulationSystem::new(SimulatedSensor::new(), RotationRate::ZERO, Duration::from_millis(10));
        system.frame = u32::MAX;
        assert_eq!(system.elapsed(), Duration::from_millis(10) * u32::MAX);
    }

    #[test]
    fn test_reorientation_completes_after_duration() {
        let (mut system, mut controller) = setup(RotationRate::new(1.0, 0.0, 0.0));
        system.update(&mut controller);
        assert!(controller.position().y > 0.0);

        controller.reorient_to_horizon(true);
        assert_eq!(controller.state(), ControllerState::Reorienting);

        // 500ms animation at 10ms per frame
        let mut finished_at = None;
        for frame in 0..60 {
            let result = system.update(&mut controller);
            if result.reorientation_finished {
                finished_at = Some(frame);
                break;
            }
            assert!(!result.camera_updated);
        }
        assert_eq!(finished_at, Some(49));
        assert_eq!(controller.state(), ControllerState::Idle);
        assert!(system.update(&mut controller).camera_updated);
    }
}
