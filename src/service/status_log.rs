//! Bounded, timestamped history of status notifications.

use super::StatusListener;
use crate::data::AlarmStatus;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// What a listener was told.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEventKind {
    Alarm(AlarmStatus),
    SensorsChanged,
    CatDetected(bool),
}

#[derive(Debug, Clone)]
pub struct StatusEvent {
    pub at: DateTime<Utc>,
    pub kind: StatusEventKind,
}

impl std::fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let when = self.at.format("%H:%M:%S%.3f");
        match self.kind {
            StatusEventKind::Alarm(status) => {
                write!(f, "{} alarm status -> {} ({})", when, status, status.description())
            }
            StatusEventKind::SensorsChanged => write!(f, "{} sensors changed", when),
            StatusEventKind::CatDetected(true) => write!(f, "{} cat detected", when),
            StatusEventKind::CatDetected(false) => write!(f, "{} no cat in frame", when),
        }
    }
}

/// Listener that records every notification, keeping the newest `capacity`.
pub struct StatusLog {
    capacity: usize,
    events: Mutex<VecDeque<StatusEvent>>,
}

impl StatusLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            events: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    fn push(&self, kind: StatusEventKind) {
        if self.capacity == 0 {
            return;
        }
        let mut events = self.events.lock();
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(StatusEvent {
            at: Utc::now(),
            kind,
        });
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> Vec<StatusEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Recorded event kinds, oldest first.
    pub fn kinds(&self) -> Vec<StatusEventKind> {
        self.events.lock().iter().map(|e| e.kind).collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl StatusListener for StatusLog {
    fn alarm_status_changed(&self, status: AlarmStatus) {
        self.push(StatusEventKind::Alarm(status));
    }

    fn sensor_status_changed(&self) {
        self.push(StatusEventKind::SensorsChanged);
    }

    fn cat_detected(&self, cat: bool) {
        self.push(StatusEventKind::CatDetected(cat));
    }
}
