//! Sensors, status values and the repositories that store them.
//!
//! The security service only talks to storage through the
//! [`SecurityRepository`] trait. Two implementations are provided: an
//! in-memory store for tests and embedding, and a JSON file store used by
//! the command line tool.

pub mod file;
pub mod memory;
pub mod repository;
pub mod sensor;
pub mod status;

pub use file::JsonFileRepository;
pub use memory::{InMemoryRepository, SecurityState};
pub use repository::SecurityRepository;
pub use sensor::{Sensor, SensorType};
pub use status::{AlarmStatus, ArmingStatus};
