//! Orientation controller for 360° video
//!
//! Input sources:
//! - Gyroscope: sampled once per render frame through a shared motion broker
//! - Drag: pan gesture begin/change events in viewport coordinates
//!
//! Both flow through the angle math in `rust360_math` and end up as euler
//! angles on a [`SceneNode`].
//!
//! The controller is a two-state machine. While a horizon reorientation is
//! animating it ignores gyroscope and drag input so it does not fight the
//! animation; the renderer ends that state with
//! [`OrientationController::complete_reorientation`].

use rust360_math::{
    angles, AngleCalculation, AxisMask, InterfaceOrientation, Position, RotationAngles,
    ScreenPoint, ViewportSize,
};
use rust360_motion::{ObserverToken, SharedMotionBroker};
use slotmap::SlotMap;

use crate::{
    BuildError, ControllerSettings, InteractionMethod, ListenerKey, OrientationListener, SceneNode,
};

/// Whether a reorientation animation is in flight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    /// Accepting gyroscope and drag input
    #[default]
    Idle,
    /// Leveling to the horizon; input is ignored
    Reorienting,
}

/// Phase of a pan gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// Two-phase construction for [`OrientationController`]
///
/// A scene node is mandatory; everything else has a default. Without a motion
/// broker the controller runs drag-only.
pub struct OrientationControllerBuilder<N: SceneNode> {
    scene_node: Option<N>,
    broker: Option<SharedMotionBroker>,
    viewport: ViewportSize,
    orientation: InterfaceOrientation,
    settings: ControllerSettings,
}

impl<N: SceneNode> Default for OrientationControllerBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: SceneNode> OrientationControllerBuilder<N> {
    pub fn new() -> Self {
        Self {
            scene_node: None,
            broker: None,
            viewport: ViewportSize::ZERO,
            orientation: InterfaceOrientation::default(),
            settings: ControllerSettings::default(),
        }
    }

    /// The camera node to orient (required)
    pub fn scene_node(mut self, node: N) -> Self {
        self.scene_node = Some(node);
        self
    }

    /// The broker to pull gyroscope samples from
    pub fn motion_broker(mut self, broker: SharedMotionBroker) -> Self {
        self.broker = Some(broker);
        self
    }

    /// Initial viewport size, used for FOV and drag scaling
    pub fn viewport(mut self, viewport: ViewportSize) -> Self {
        self.viewport = viewport;
        self
    }

    /// How the device is held at startup
    pub fn interface_orientation(mut self, orientation: InterfaceOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn settings(mut self, settings: ControllerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Validate and produce a ready controller
    ///
    /// The initial position is projected through the sensor axis mask and
    /// applied to the node, and the node's FOV is set for the viewport.
    pub fn build(self) -> Result<OrientationController<N>, BuildError> {
        let mut node = self.scene_node.ok_or(BuildError::MissingSceneNode)?;
        self.settings.validate()?;

        let initial = angles::update_for_axis_mask_change(
            self.settings.initial_position,
            self.settings.allowed_sensor_axes,
        );
        node.set_euler_angles(initial.angles);
        node.set_field_of_view(angles::optimal_field_of_view(self.viewport));

        if self.broker.is_none() {
            log::debug!("Orientation controller built without a motion broker; drag-only mode");
        }

        Ok(OrientationController {
            node,
            broker: self.broker,
            motion_token: None,
            listeners: SlotMap::with_key(),
            position: initial.position,
            angles: initial.angles,
            initial_position: initial.position,
            allowed_sensor_axes: self.settings.allowed_sensor_axes,
            allowed_drag_axes: self.settings.allowed_drag_axes,
            interface_orientation: self.orientation,
            viewport: self.viewport,
            pan_last_point: None,
            state: ControllerState::Idle,
            has_reported_initial_movement: false,
            settings: self.settings,
        })
    }
}

/// Owns the look position and drives a camera node from gyroscope and drag input
///
/// All methods must be called from the render/UI thread that owns the
/// motion broker.
pub struct OrientationController<N: SceneNode> {
    node: N,
    broker: Option<SharedMotionBroker>,
    motion_token: Option<ObserverToken>,
    listeners: SlotMap<ListenerKey, Box<dyn OrientationListener>>,
    settings: ControllerSettings,

    position: Position,
    angles: RotationAngles,
    initial_position: Position,
    allowed_sensor_axes: AxisMask,
    allowed_drag_axes: AxisMask,
    interface_orientation: InterfaceOrientation,
    viewport: ViewportSize,
    pan_last_point: Option<ScreenPoint>,

    state: ControllerState,
    // Latched once, never reset
    has_reported_initial_movement: bool,
}

impl<N: SceneNode> OrientationController<N> {
    pub fn builder() -> OrientationControllerBuilder<N> {
        OrientationControllerBuilder::new()
    }

    /// Subscribe to gyroscope updates
    ///
    /// Does nothing when already subscribed or when no broker is attached.
    pub fn start_updates(&mut self) {
        if self.motion_token.is_some() {
            return;
        }
        let Some(broker) = &self.broker else {
            log::debug!("No motion broker attached; gyroscope tracking unavailable");
            return;
        };
        let token = broker
            .borrow_mut()
            .subscribe(self.settings.preferred_update_interval);
        self.motion_token = Some(token);
    }

    /// Release the gyroscope subscription, if any
    pub fn stop_updates(&mut self) {
        let (Some(token), Some(broker)) = (self.motion_token.take(), &self.broker) else {
            return;
        };
        broker.borrow_mut().unsubscribe(token);
    }

    /// Whether this controller currently holds a gyroscope subscription
    pub fn is_updating(&self) -> bool {
        self.motion_token.is_some()
    }

    /// Per-frame tick: apply the latest gyroscope sample
    ///
    /// Returns `true` if new angles were applied. Does nothing while not
    /// subscribed, without a sample, or while reorienting.
    pub fn update_camera_angle_for_current_device_motion(&mut self) -> bool {
        if self.state == ControllerState::Reorienting || self.motion_token.is_none() {
            return false;
        }
        let Some(sample) = self.broker.as_ref().and_then(|b| b.borrow().latest_sample()) else {
            return false;
        };

        let result = angles::update_for_rotation_sample(
            self.position,
            sample.rotation_rate,
            self.interface_orientation,
            self.allowed_sensor_axes,
            self.settings.noise_threshold,
        );
        self.apply(result);
        self.notify_compass_angle();
        self.report_initial_movement_if_needed(InteractionMethod::Gyroscope);
        true
    }

    /// Feed a pan gesture event
    pub fn handle_pan(&mut self, phase: PanPhase, point: ScreenPoint) {
        match phase {
            PanPhase::Began => self.handle_pan_begin(point),
            PanPhase::Changed => self.handle_pan_changed(point),
            PanPhase::Ended | PanPhase::Cancelled => self.handle_pan_end(),
        }
    }

    /// Start of a drag at `point`
    pub fn handle_pan_begin(&mut self, point: ScreenPoint) {
        self.pan_last_point = Some(point);
    }

    /// The drag moved to `point`
    ///
    /// Ignored without a preceding begin. While reorienting the point is
    /// tracked but the camera does not move, so the next change after the
    /// animation produces a small delta rather than a jump.
    pub fn handle_pan_changed(&mut self, point: ScreenPoint) {
        let Some(last) = self.pan_last_point.replace(point) else {
            return;
        };
        if self.state == ControllerState::Reorienting {
            return;
        }

        let result = angles::update_for_pan_delta(
            self.position,
            point - last,
            self.viewport,
            self.allowed_drag_axes,
        );
        self.apply(result);
        self.notify_compass_angle();
        self.report_initial_movement_if_needed(InteractionMethod::Touch);
    }

    /// The drag ended or was cancelled
    pub fn handle_pan_end(&mut self) {
        self.pan_last_point = None;
    }

    /// Adapt the FOV to a new viewport size; returns the FOV in degrees
    pub fn update_field_of_view(&mut self, viewport: ViewportSize) -> f32 {
        self.viewport = viewport;
        let fov = angles::optimal_field_of_view(viewport);
        self.node.set_field_of_view(fov);
        fov
    }

    /// Level the vertical look angle to the horizon
    ///
    /// With `animated`, the change is wrapped in the node's animation hooks
    /// and the controller enters [`ControllerState::Reorienting`] until
    /// [`complete_reorientation`](Self::complete_reorientation) is called.
    pub fn reorient_to_horizon(&mut self, animated: bool) {
        if animated {
            log::debug!("Reorienting to horizon over {:?}", self.settings.reorientation_duration);
            self.state = ControllerState::Reorienting;
            self.node.begin_animation(self.settings.reorientation_duration);
        }

        self.position.y = 0.0;
        self.angles.pitch = 0.0;
        self.node.set_euler_angles(self.angles);

        if animated {
            self.node.commit_animation();
        }
    }

    /// Animation-completion hook from the renderer
    pub fn complete_reorientation(&mut self) {
        if self.state == ControllerState::Reorienting {
            log::debug!("Reorientation complete");
            self.state = ControllerState::Idle;
        }
    }

    /// Compass heading of the current yaw, in [0, 2π)
    pub fn compass_angle(&self) -> f32 {
        angles::compass_angle(self.angles.yaw)
    }

    pub fn allowed_sensor_axes(&self) -> AxisMask {
        self.allowed_sensor_axes
    }

    /// Change which axes the gyroscope may move; takes effect immediately
    pub fn set_allowed_sensor_axes(&mut self, mask: AxisMask) {
        if self.allowed_sensor_axes != mask {
            self.allowed_sensor_axes = mask;
            self.reproject(mask);
        }
    }

    pub fn allowed_drag_axes(&self) -> AxisMask {
        self.allowed_drag_axes
    }

    /// Change which axes a drag may move; takes effect immediately
    pub fn set_allowed_drag_axes(&mut self, mask: AxisMask) {
        if self.allowed_drag_axes != mask {
            self.allowed_drag_axes = mask;
            self.reproject(mask);
        }
    }

    pub fn interface_orientation(&self) -> InterfaceOrientation {
        self.interface_orientation
    }

    /// Device orientation used to map the next gyroscope samples
    pub fn set_interface_orientation(&mut self, orientation: InterfaceOrientation) {
        self.interface_orientation = orientation;
    }

    /// Register a listener for compass and first-movement events
    pub fn add_listener(&mut self, listener: impl OrientationListener + 'static) -> ListenerKey {
        self.listeners.insert(Box::new(listener))
    }

    /// Unregister a listener; returns `false` if it was already removed
    pub fn remove_listener(&mut self, key: ListenerKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn angles(&self) -> RotationAngles {
        self.angles
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_reorienting(&self) -> bool {
        self.state == ControllerState::Reorienting
    }

    pub fn has_reported_initial_movement(&self) -> bool {
        self.has_reported_initial_movement
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut N {
        &mut self.node
    }

    fn apply(&mut self, result: AngleCalculation) {
        self.position = result.position;
        self.angles = result.angles;
        self.node.set_euler_angles(result.angles);
    }

    fn reproject(&mut self, mask: AxisMask) {
        let previous_yaw = self.angles.yaw;
        let result = angles::update_for_axis_mask_change(self.position, mask);
        self.apply(result);
        if self.angles.yaw != previous_yaw {
            self.notify_compass_angle();
        }
    }

    fn notify_compass_angle(&mut self) {
        let angle = self.compass_angle();
        for listener in self.listeners.values_mut() {
            listener.compass_angle_changed(angle);
        }
    }

    fn report_initial_movement_if_needed(&mut self, method: InteractionMethod) {
        if self.has_reported_initial_movement {
            return;
        }
        let moved = match method {
            InteractionMethod::Touch => true,
            InteractionMethod::Gyroscope => {
                self.position.distance(self.initial_position) > self.settings.initial_movement_threshold
            }
        };
        if !moved {
            return;
        }

        self.has_reported_initial_movement = true;
        log::debug!("Initial camera movement via {:?}", method);
        for listener in self.listeners.values_mut() {
            listener.initial_movement(method);
        }
    }
}

impl<N: SceneNode> Drop for OrientationController<N> {
    fn drop(&mut self) {
        self.stop_updates();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::f32::consts::FRAC_PI_2;
    use std::rc::Rc;
    use std::time::Duration;

    use rust360_math::RotationRate;
    use rust360_motion::{MotionBroker, MotionSensor, SimulatedSensor};

    #[derive(Default)]
    struct TestNode {
        angles: RotationAngles,
        fov: f32,
        animation_depth: i32,
        animations_begun: u32,
        last_duration: Option<Duration>,
    }

    impl SceneNode for TestNode {
        fn euler_angles(&self) -> RotationAngles {
            self.angles
        }
        fn set_euler_angles(&mut self, angles: RotationAngles) {
            self.angles = angles;
        }
        fn set_field_of_view(&mut self, degrees: f32) {
            self.fov = degrees;
        }
        fn begin_animation(&mut self, duration: Duration) {
            self.animation_depth += 1;
            self.animations_begun += 1;
            self.last_duration = Some(duration);
        }
        fn commit_animation(&mut self) {
            self.animation_depth -= 1;
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Compass(f32),
        Moved(InteractionMethod),
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl OrientationListener for Recorder {
        fn compass_angle_changed(&mut self, angle: f32) {
            self.0.borrow_mut().push(Event::Compass(angle));
        }
        fn initial_movement(&mut self, method: InteractionMethod) {
            self.0.borrow_mut().push(Event::Moved(method));
        }
    }

    impl Recorder {
        fn moves(&self) -> Vec<InteractionMethod> {
            self.0
                .borrow()
                .iter()
                .filter_map(|e| match e {
                    Event::Moved(m) => Some(*m),
                    _ => None,
                })
                .collect()
        }

        fn compass_count(&self) -> usize {
            self.0.borrow().iter().filter(|e| matches!(e, Event::Compass(_))).count()
        }
    }

    fn drag_only() -> OrientationController<TestNode> {
        OrientationController::builder()
            .scene_node(TestNode::default())
            .viewport(ViewportSize::new(536.0, 320.0))
            .build()
            .unwrap()
    }

    fn with_sensor() -> (OrientationController<TestNode>, SimulatedSensor) {
        let sensor = SimulatedSensor::new();
        let broker = MotionBroker::new(sensor.clone()).into_shared();
        let controller = OrientationController::builder()
            .scene_node(TestNode::default())
            .motion_broker(broker)
            .viewport(ViewportSize::new(536.0, 320.0))
            .interface_orientation(InterfaceOrientation::LandscapeLeft)
            .build()
            .unwrap();
        (controller, sensor)
    }

    #[test]
    fn test_build_requires_scene_node() {
        let result = OrientationControllerBuilder::<TestNode>::new().build();
        assert!(matches!(result, Err(BuildError::MissingSceneNode)));
    }

    #[test]
    fn test_build_rejects_invalid_settings() {
        let result = OrientationController::builder()
            .scene_node(TestNode::default())
            .settings(ControllerSettings::default().with_update_interval(Duration::ZERO))
            .build();
        assert!(matches!(result, Err(BuildError::InvalidSetting(_))));
    }

    #[test]
    fn test_build_applies_initial_state() {
        let controller = drag_only();
        assert_eq!(controller.position(), Position::new(3.14, 0.0));
        assert_eq!(controller.node().euler_angles(), RotationAngles::new(0.0, 3.14, 0.0));
        assert_eq!(controller.node().fov, angles::optimal_field_of_view(ViewportSize::new(536.0, 320.0)));
        assert_eq!(controller.compass_angle(), 0.0);
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_tick_without_broker_is_noop() {
        let mut controller = drag_only();
        controller.start_updates();
        assert!(!controller.is_updating());
        assert!(!controller.update_camera_angle_for_current_device_motion());
        assert_eq!(controller.position(), Position::new(3.14, 0.0));
    }

    #[test]
    fn test_tick_applies_sample() {
        let (mut controller, sensor) = with_sensor();
        controller.start_updates();
        sensor.push_rate(RotationRate::new(1.0, 0.0, 0.0));

        assert!(controller.update_camera_angle_for_current_device_motion());
        // Landscape-left flips the x rate
        assert!((controller.position().x - (3.14 - 0.02)).abs() < 1e-6);
        assert_eq!(controller.node().euler_angles(), controller.angles());
    }

    #[test]
    fn test_tick_without_sample_is_noop() {
        let (mut controller, _sensor) = with_sensor();
        controller.start_updates();
        assert!(!controller.update_camera_angle_for_current_device_motion());
    }

    #[test]
    fn test_start_updates_is_idempotent() {
        let (mut controller, sensor) = with_sensor();
        controller.start_updates();
        controller.start_updates();
        assert_eq!(sensor.start_count(), 1);

        controller.stop_updates();
        assert!(!controller.is_updating());
        assert_eq!(sensor.stop_count(), 1);
        controller.stop_updates();
        assert_eq!(sensor.stop_count(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let sensor = SimulatedSensor::new();
        let broker = MotionBroker::new(sensor.clone()).into_shared();
        {
            let mut controller = OrientationController::builder()
                .scene_node(TestNode::default())
                .motion_broker(broker.clone())
                .build()
                .unwrap();
            controller.start_updates();
            assert_eq!(broker.borrow().observer_count(), 1);
        }
        assert_eq!(broker.borrow().observer_count(), 0);
        assert!(!sensor.is_active());
    }

    #[test]
    fn test_gyroscope_movement_needs_threshold() {
        let (mut controller, sensor) = with_sensor();
        let recorder = Recorder::default();
        controller.add_listener(recorder.clone());
        controller.start_updates();

        // 0.02 rad per sample; 0.75 needs 38 samples
        for _ in 0..30 {
            sensor.push_rate(RotationRate::new(1.0, 0.0, 0.0));
            controller.update_camera_angle_for_current_device_motion();
        }
        assert!(recorder.moves().is_empty());
        assert!(!controller.has_reported_initial_movement());

        for _ in 0..20 {
            sensor.push_rate(RotationRate::new(1.0, 0.0, 0.0));
            controller.update_camera_angle_for_current_device_motion();
        }
        assert_eq!(recorder.moves(), vec![InteractionMethod::Gyroscope]);
        assert_eq!(recorder.compass_count(), 50);
    }

    #[test]
    fn test_touch_reports_immediately_once() {
        let mut controller = drag_only();
        let recorder = Recorder::default();
        controller.add_listener(recorder.clone());

        controller.handle_pan_begin(ScreenPoint::new(100.0, 100.0));
        controller.handle_pan_changed(ScreenPoint::new(101.0, 100.0));
        controller.handle_pan_changed(ScreenPoint::new(150.0, 120.0));

        assert_eq!(recorder.moves(), vec![InteractionMethod::Touch]);
        assert!(controller.has_reported_initial_movement());
        assert_eq!(recorder.compass_count(), 2);
    }

    #[test]
    fn test_pan_uses_incremental_delta() {
        let mut controller = drag_only();
        controller.handle_pan(PanPhase::Began, ScreenPoint::new(0.0, 0.0));
        controller.handle_pan(PanPhase::Changed, ScreenPoint::new(53.6, 0.0));
        controller.handle_pan(PanPhase::Changed, ScreenPoint::new(107.2, 0.0));
        // Two steps of a tenth of the width = 0.1 of a turn
        let expected = 3.14 + std::f32::consts::TAU * 0.2 * 0.5;
        assert!((controller.position().x - expected).abs() < 1e-4);
    }

    #[test]
    fn test_pan_changed_without_begin_is_ignored() {
        let mut controller = drag_only();
        controller.handle_pan_changed(ScreenPoint::new(300.0, 300.0));
        assert_eq!(controller.position(), Position::new(3.14, 0.0));

        controller.handle_pan(PanPhase::Began, ScreenPoint::new(0.0, 0.0));
        controller.handle_pan(PanPhase::Ended, ScreenPoint::new(0.0, 0.0));
        controller.handle_pan_changed(ScreenPoint::new(300.0, 300.0));
        assert_eq!(controller.position(), Position::new(3.14, 0.0));
    }

    #[test]
    fn test_pan_respects_drag_mask() {
        let mut controller = drag_only();
        controller.set_allowed_drag_axes(AxisMask::Vertical);
        controller.handle_pan_begin(ScreenPoint::new(0.0, 0.0));
        controller.handle_pan_changed(ScreenPoint::new(1000.0, -1000.0));
        assert_eq!(controller.position().x, 0.0);
        assert_eq!(controller.position().y, -FRAC_PI_2);
    }

    #[test]
    fn test_mask_change_reprojects_immediately() {
        let mut controller = drag_only();
        let recorder = Recorder::default();
        controller.add_listener(recorder.clone());

        controller.set_allowed_sensor_axes(AxisMask::Vertical);
        assert_eq!(controller.position(), Position::ORIGIN);
        assert_eq!(controller.node().euler_angles(), RotationAngles::ZERO);
        assert_eq!(recorder.compass_count(), 1);

        // Same mask again: nothing happens
        controller.set_allowed_sensor_axes(AxisMask::Vertical);
        assert_eq!(recorder.compass_count(), 1);
        assert_eq!(controller.allowed_sensor_axes(), AxisMask::Vertical);
    }

    #[test]
    fn test_reorient_animated_blocks_input() {
        let (mut controller, sensor) = with_sensor();
        let recorder = Recorder::default();
        controller.add_listener(recorder.clone());
        controller.start_updates();
        controller.handle_pan_begin(ScreenPoint::new(0.0, 0.0));
        controller.handle_pan_changed(ScreenPoint::new(40.0, 50.0));
        assert!(controller.position().y > 0.0);

        let yaw = controller.angles().yaw;
        let compass = controller.compass_angle();
        let compass_events = recorder.compass_count();
        controller.reorient_to_horizon(true);
        assert!(controller.is_reorienting());
        assert_eq!(controller.angles().yaw, yaw);
        assert_eq!(controller.node().angles.yaw, yaw);
        assert_eq!(controller.compass_angle(), compass);
        assert_eq!(recorder.compass_count(), compass_events);
        assert_eq!(controller.position().y, 0.0);
        assert_eq!(controller.node().angles.pitch, 0.0);
        assert_eq!(controller.node().animation_depth, 0);
        assert_eq!(controller.node().animations_begun, 1);
        assert_eq!(controller.node().last_duration, Some(Duration::from_millis(500)));

        let before = controller.position();
        sensor.push_rate(RotationRate::new(5.0, 5.0, 0.0));
        assert!(!controller.update_camera_angle_for_current_device_motion());
        controller.handle_pan_changed(ScreenPoint::new(0.0, 100.0));
        assert_eq!(controller.position(), before);

        controller.complete_reorientation();
        assert_eq!(controller.state(), ControllerState::Idle);
        assert!(controller.update_camera_angle_for_current_device_motion());
    }

    #[test]
    fn test_reorient_unanimated_stays_idle() {
        let mut controller = drag_only();
        let recorder = Recorder::default();
        controller.add_listener(recorder.clone());
        controller.handle_pan_begin(ScreenPoint::new(0.0, 0.0));
        controller.handle_pan_changed(ScreenPoint::new(30.0, -40.0));
        let yaw = controller.angles().yaw;
        let compass_events = recorder.compass_count();
        controller.reorient_to_horizon(false);
        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(controller.angles().yaw, yaw);
        assert_eq!(recorder.compass_count(), compass_events);
        assert_eq!(controller.position().y, 0.0);
        assert_eq!(controller.node().animations_begun, 0);
    }

    #[test]
    fn test_update_field_of_view() {
        let mut controller = drag_only();
        let fov = controller.update_field_of_view(ViewportSize::new(0.0, 0.0));
        assert_eq!(fov, angles::FOV_DEFAULT);
        assert_eq!(controller.node().fov, angles::FOV_DEFAULT);

        let square = controller.update_field_of_view(ViewportSize::new(400.0, 400.0));
        assert_ne!(square, fov);
        assert_eq!(controller.viewport(), ViewportSize::new(400.0, 400.0));
    }

    #[test]
    fn test_remove_listener() {
        let mut controller = drag_only();
        let recorder = Recorder::default();
        let key = controller.add_listener(recorder.clone());
        assert!(controller.remove_listener(key));
        assert!(!controller.remove_listener(key));

        controller.handle_pan_begin(ScreenPoint::new(0.0, 0.0));
        controller.handle_pan_changed(ScreenPoint::new(10.0, 0.0));
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_interface_orientation_changes_mapping() {
        let (mut controller, sensor) = with_sensor();
        controller.start_updates();
        controller.set_interface_orientation(InterfaceOrientation::LandscapeRight);
        assert_eq!(controller.interface_orientation(), InterfaceOrientation::LandscapeRight);

        sensor.push_rate(RotationRate::new(1.0, 0.0, 0.0));
        controller.update_camera_angle_for_current_device_motion();
        assert!((controller.position().x - (3.14 + 0.02)).abs() < 1e-6);
    }
}
