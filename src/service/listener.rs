//! Status change observers.
//!
//! Listeners are called synchronously, in registration order, on the thread
//! that made the service call. A panicking listener is not isolated.

use crate::data::AlarmStatus;
use std::sync::Arc;

/// Observer of security status changes.
pub trait StatusListener: Send + Sync {
    /// A new alarm status was written.
    fn alarm_status_changed(&self, status: AlarmStatus);

    /// One or more sensors changed their active flag.
    fn sensor_status_changed(&self) {}

    /// A camera frame was classified.
    fn cat_detected(&self, _cat: bool) {}
}

/// Registration-ordered set of listeners, deduplicated by pointer identity.
#[derive(Default, Clone)]
pub struct ListenerSet {
    listeners: Vec<Arc<dyn StatusListener>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Returns false if it was already registered.
    pub fn add(&mut self, listener: Arc<dyn StatusListener>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove(&mut self, listener: &Arc<dyn StatusListener>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !Arc::ptr_eq(l, listener));
        self.listeners.len() != before
    }

    pub fn contains(&self, listener: &Arc<dyn StatusListener>) -> bool {
        self.listeners.iter().any(|l| Arc::ptr_eq(l, listener))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify_alarm(&self, status: AlarmStatus) {
        for listener in &self.listeners {
            listener.alarm_status_changed(status);
        }
    }

    pub fn notify_sensors(&self) {
        for listener in &self.listeners {
            listener.sensor_status_changed();
        }
    }

    pub fn notify_cat(&self, cat: bool) {
        for listener in &self.listeners {
            listener.cat_detected(cat);
        }
    }
}
