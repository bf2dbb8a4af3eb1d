//! Rust360 - headless orientation demo
//!
//! Runs the orientation pipeline against a simulated gyroscope: scripted
//! device motion, a short drag, and an animated return to the horizon.

use std::process::ExitCode;

use rust360::camera::HeadlessCamera;
use rust360::config::AppConfig;
use rust360::systems::SimulationSystem;
use rust360_input::{InteractionMethod, OrientationController, OrientationListener, PanPhase};
use rust360_math::{RotationRate, ScreenPoint};
use rust360_motion::{MotionBroker, SimulatedSensor};

/// Logs orientation events as they arrive
struct EventLogger {
    last_logged_degrees: i32,
}

impl OrientationListener for EventLogger {
    fn compass_angle_changed(&mut self, angle: f32) {
        // Only log whole-degree changes, this fires every frame
        let degrees = angle.to_degrees() as i32;
        if degrees != self.last_logged_degrees {
            self.last_logged_degrees = degrees;
            log::debug!("Compass: {} degrees", degrees);
        }
    }

    fn initial_movement(&mut self, method: InteractionMethod) {
        log::info!("User first moved the camera via {:?}", method);
    }
}

fn main() -> ExitCode {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Rust360");

    let sensor = SimulatedSensor::new();
    let broker = MotionBroker::with_default_interval(sensor.clone(), config.motion.default_interval())
        .into_shared();

    let controller = OrientationController::builder()
        .scene_node(HeadlessCamera::new())
        .motion_broker(broker.clone())
        .viewport(config.viewport.size())
        .interface_orientation(config.viewport.orientation)
        .settings(config.camera.to_controller_settings())
        .build();
    let mut controller = match controller {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    controller.add_listener(EventLogger { last_logged_degrees: -1 });
    log::info!(
        "Viewport {}x{}, FOV {:.1} degrees",
        config.viewport.width,
        config.viewport.height,
        controller.node().field_of_view()
    );

    controller.start_updates();
    log::info!(
        "Motion updates every {:?} ({} observer)",
        broker.borrow().resolved_update_interval(),
        broker.borrow().observer_count()
    );

    let mut simulation = SimulationSystem::new(
        sensor,
        config.simulation.gyro_rate(),
        config.simulation.frame_interval(),
    );
    for _ in 0..config.simulation.frames {
        simulation.update(&mut controller);
    }
    log::info!(
        "After {:?} of device motion: position {:?}, compass {:.3} rad",
        simulation.elapsed(),
        controller.position(),
        controller.compass_angle()
    );

    // Drag across the middle of the viewport in small steps
    simulation.set_gyro_rate(RotationRate::ZERO);
    let size = config.viewport.size();
    let start = ScreenPoint::new(size.width * 0.5, size.height * 0.5);
    let steps = 10;
    controller.handle_pan(PanPhase::Began, start);
    for step in 1..=steps {
        let offset = config.simulation.drag_distance * step as f32 / steps as f32;
        controller.handle_pan(PanPhase::Changed, ScreenPoint::new(start.x + offset, start.y + offset * 0.25));
        simulation.update(&mut controller);
    }
    controller.handle_pan(PanPhase::Ended, start);
    log::info!("After drag: position {:?}", controller.position());

    controller.reorient_to_horizon(true);
    while controller.is_reorienting() {
        simulation.update(&mut controller);
    }
    log::info!(
        "Leveled to horizon at {:?}: angles {:?}, compass {:.3} rad",
        simulation.elapsed(),
        controller.angles().to_array(),
        controller.compass_angle()
    );

    controller.stop_updates();
    log::info!("Motion sensor active after stop: {}", broker.borrow().is_active());
    ExitCode::SUCCESS
}
