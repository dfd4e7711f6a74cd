//! Home security monitoring simulator.
//!
//! Tracks door, window and motion sensors, an arming status and a derived
//! alarm status. Camera frames can be classified for cats, which forces or
//! clears the alarm independently of the sensors.

pub mod config;
pub mod data;
pub mod error;
pub mod image;
pub mod input;
pub mod service;

pub use error::{Result, SecurityError};
pub use service::SecurityService;
