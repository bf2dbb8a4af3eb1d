//! Shared motion sensor access
//!
//! A device normally has one angular-rate sensor, but several views may want
//! to track it at once. [`MotionBroker`] hands out an [`ObserverToken`] per
//! subscriber, runs the sensor only while at least one token is live, and
//! drives it at the fastest cadence any subscriber asked for.

mod sensor;
mod broker;

pub use sensor::{MotionSample, MotionSensor, SimulatedSensor};
pub use broker::{MotionBroker, ObserverToken, SharedMotionBroker, DEFAULT_UPDATE_INTERVAL};
