//! Motion update broker
//!
//! Multiplexes one [`MotionSensor`] across many observers.
//!
//! The broker is single-threaded: every call must come from the thread that
//! created it. Debug builds trap on violations. Share it between controllers
//! as a [`SharedMotionBroker`].

use std::cell::RefCell;
use std::rc::Rc;
use std::thread::{self, ThreadId};
use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

use crate::{MotionSample, MotionSensor};

/// Cadence used when no observer has asked for one (60 Hz)
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

new_key_type! {
    /// Handle for one active subscription
    ///
    /// Becomes stale once passed to [`MotionBroker::unsubscribe`].
    pub struct ObserverToken;
}

/// A broker shared between controllers on the same thread
pub type SharedMotionBroker = Rc<RefCell<MotionBroker>>;

#[derive(Debug)]
struct ObserverItem {
    preferred_interval: Duration,
}

/// Arbitrates access to a single angular-rate sensor
pub struct MotionBroker {
    sensor: Box<dyn MotionSensor>,
    observers: SlotMap<ObserverToken, ObserverItem>,
    default_interval: Duration,
    resolved_interval: Duration,
    owner_thread: ThreadId,
}

impl MotionBroker {
    /// Create a broker over `sensor` with the 60 Hz default cadence
    pub fn new(sensor: impl MotionSensor + 'static) -> Self {
        Self::with_default_interval(sensor, DEFAULT_UPDATE_INTERVAL)
    }

    /// Create a broker with a custom fallback cadence
    pub fn with_default_interval(sensor: impl MotionSensor + 'static, default_interval: Duration) -> Self {
        let mut sensor: Box<dyn MotionSensor> = Box::new(sensor);
        sensor.set_update_interval(default_interval);
        Self {
            sensor,
            observers: SlotMap::with_key(),
            default_interval,
            resolved_interval: default_interval,
            owner_thread: thread::current().id(),
        }
    }

    /// Wrap this broker for sharing between controllers
    pub fn into_shared(self) -> SharedMotionBroker {
        Rc::new(RefCell::new(self))
    }

    /// Register an observer wanting samples every `preferred_interval`
    ///
    /// Starts the sensor when this is the first observer.
    pub fn subscribe(&mut self, preferred_interval: Duration) -> ObserverToken {
        self.assert_owner_thread();

        let previous_count = self.observers.len();
        let token = self.observers.insert(ObserverItem { preferred_interval });
        self.apply_resolved_interval();

        if previous_count == 0 {
            if self.sensor.is_available() {
                log::debug!("Starting motion updates at {:?}", self.resolved_interval);
                self.sensor.start(self.resolved_interval);
            } else {
                log::warn!("Motion sensor unavailable; subscription recorded without starting updates");
            }
        }

        token
    }

    /// Remove an observer
    ///
    /// Stops the sensor when the last observer leaves. Returns `false` for a
    /// token that is unknown or already unsubscribed, in which case nothing
    /// changes.
    pub fn unsubscribe(&mut self, token: ObserverToken) -> bool {
        self.assert_owner_thread();

        if self.observers.remove(token).is_none() {
            log::debug!("Ignoring unsubscribe for stale observer token");
            return false;
        }
        self.apply_resolved_interval();

        if self.observers.is_empty() && self.sensor.is_active() {
            log::debug!("Stopping motion updates");
            self.sensor.stop();
        }

        true
    }

    /// Most recent sensor reading, if the sensor is running
    pub fn latest_sample(&self) -> Option<MotionSample> {
        self.sensor.latest_sample()
    }

    /// Whether the underlying sensor exists
    pub fn is_available(&self) -> bool {
        self.sensor.is_available()
    }

    /// Whether the underlying sensor is delivering samples
    pub fn is_active(&self) -> bool {
        self.sensor.is_active()
    }

    /// Number of live subscriptions
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Whether `token` refers to a live subscription
    pub fn contains(&self, token: ObserverToken) -> bool {
        self.observers.contains_key(token)
    }

    /// The cadence the sensor is currently driven at
    pub fn resolved_update_interval(&self) -> Duration {
        self.resolved_interval
    }

    /// The cadence used when there are no observers
    pub fn default_update_interval(&self) -> Duration {
        self.default_interval
    }

    // Ties resolve to the same duration, so which observer wins does not matter.
    fn resolve_interval(&self) -> Duration {
        self.observers
            .values()
            .map(|item| item.preferred_interval)
            .min()
            .unwrap_or(self.default_interval)
    }

    fn apply_resolved_interval(&mut self) {
        self.resolved_interval = self.resolve_interval();
        self.sensor.set_update_interval(self.resolved_interval);
    }

    #[inline]
    fn assert_owner_thread(&self) {
        debug_assert_eq!(
            thread::current().id(),
            self.owner_thread,
            "MotionBroker must be used from the thread that created it"
        );
    }
}

impl std::fmt::Debug for MotionBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionBroker")
            .field("observers", &self.observers.len())
            .field("resolved_interval", &self.resolved_interval)
            .field("active", &self.sensor.is_active())
            .finish()
    }
}
