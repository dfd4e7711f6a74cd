//! Alarm state machine.
//!
//! [`transitions`] holds the pure decision rules; [`SecurityService`] wraps
//! them with repository reads/writes and listener notification.

pub mod listener;
pub mod security_service;
pub mod status_log;
pub mod transitions;

pub use listener::{ListenerSet, StatusListener};
pub use security_service::SecurityService;
pub use status_log::{StatusEvent, StatusEventKind, StatusLog};
pub use transitions::SensorChange;
