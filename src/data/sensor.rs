//! Door, window and motion sensors.
//!
//! A sensor is identified by its name and type. The `active` flag is mutable
//! state and takes no part in equality or ordering, so a sensor can be looked
//! up in a set and replaced with an updated copy.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use strum::{Display, EnumIter, EnumString};

/// Kind of physical input a sensor represents.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

/// A named, typed boolean input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    name: String,
    #[serde(rename = "sensor_type")]
    kind: SensorType,
    #[serde(default)]
    active: bool,
}

impl Sensor {
    /// Create an inactive sensor.
    pub fn new(name: impl Into<String>, kind: SensorType) -> Self {
        Self {
            name: name.into(),
            kind,
            active: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SensorType {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the active flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Copy of this sensor with the given active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// True if `other` names the same physical sensor.
    pub fn same_identity(&self, other: &Sensor) -> bool {
        self.kind == other.kind && self.name == other.name
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Sensor {}

impl Hash for Sensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
    }
}

impl PartialOrd for Sensor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sensor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.kind.cmp(&other.kind))
    }
}
