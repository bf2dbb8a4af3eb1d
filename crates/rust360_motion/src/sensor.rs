//! Sensor subsystem seam
//!
//! The broker only ever talks to hardware through [`MotionSensor`], so hosts
//! can plug in a platform gyroscope and tests can plug in [`SimulatedSensor`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rust360_math::RotationRate;

/// One reading from the angular-rate sensor
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionSample {
    /// Angular rate around the device axes (rad/s)
    pub rotation_rate: RotationRate,
    /// Time since the sensor started when the sample was taken
    pub timestamp: Duration,
}

/// An angular-rate sensor that can be started, stopped and polled
pub trait MotionSensor {
    /// Whether the hardware and its APIs exist on this device
    fn is_available(&self) -> bool;
    /// Whether the sensor is currently delivering samples
    fn is_active(&self) -> bool;
    /// Most recent sample, or `None` if nothing is available
    fn latest_sample(&self) -> Option<MotionSample>;
    /// Begin delivering samples every `interval`
    fn start(&mut self, interval: Duration);
    /// Stop delivering samples
    fn stop(&mut self);
    /// Change the delivery cadence, whether or not the sensor is running
    fn set_update_interval(&mut self, interval: Duration);
}

#[derive(Debug, Default)]
struct SimulatedState {
    available: bool,
    active: bool,
    interval: Duration,
    elapsed: Duration,
    latest: Option<MotionSample>,
    start_count: u32,
    stop_count: u32,
}

/// In-memory sensor fed by hand
///
/// Clones share state, so a test can keep one handle to push samples while
/// the broker owns another. Samples are only reported while started.
#[derive(Clone, Debug)]
pub struct SimulatedSensor {
    state: Rc<RefCell<SimulatedState>>,
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSensor {
    /// Create an available, stopped sensor
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SimulatedState {
                available: true,
                ..Default::default()
            })),
        }
    }

    /// Create a sensor that reports itself as missing
    pub fn unavailable() -> Self {
        let sensor = Self::new();
        sensor.state.borrow_mut().available = false;
        sensor
    }

    /// Record a new reading, advancing the sample clock by one interval
    pub fn push_rate(&self, rotation_rate: RotationRate) {
        let mut state = self.state.borrow_mut();
        let interval = state.interval;
        state.elapsed += interval;
        let timestamp = state.elapsed;
        state.latest = Some(MotionSample { rotation_rate, timestamp });
    }

    /// Forget the latest reading
    pub fn clear(&self) {
        self.state.borrow_mut().latest = None;
    }

    /// Cadence last requested by the broker
    pub fn update_interval(&self) -> Duration {
        self.state.borrow().interval
    }

    /// Number of times the sensor was started
    pub fn start_count(&self) -> u32 {
        self.state.borrow().start_count
    }

    /// Number of times the sensor was stopped
    pub fn stop_count(&self) -> u32 {
        self.state.borrow().stop_count
    }
}

impl MotionSensor for SimulatedSensor {
    fn is_available(&self) -> bool {
        self.state.borrow().available
    }

    fn is_active(&self) -> bool {
        self.state.borrow().active
    }

    fn latest_sample(&self) -> Option<MotionSample> {
        let state = self.state.borrow();
        if state.active {
            state.latest
        } else {
            None
        }
    }

    fn start(&mut self, interval: Duration) {
        let mut state = self.state.borrow_mut();
        state.active = true;
        state.interval = interval;
        state.elapsed = Duration::ZERO;
        state.start_count += 1;
    }

    fn stop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.active = false;
        state.latest = None;
        state.stop_count += 1;
    }

    fn set_update_interval(&mut self, interval: Duration) {
        self.state.borrow_mut().interval = interval;
    }
}
