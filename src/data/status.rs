//! Arming and alarm status enums.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Guard posture chosen by the user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ArmingStatus {
    #[default]
    Disarmed,
    ArmedHome,
    ArmedAway,
}

impl ArmingStatus {
    /// True for both armed postures.
    pub fn is_armed(self) -> bool {
        !matches!(self, ArmingStatus::Disarmed)
    }

    pub fn description(self) -> &'static str {
        match self {
            ArmingStatus::Disarmed => "Disarmed",
            ArmingStatus::ArmedHome => "Armed - At Home",
            ArmingStatus::ArmedAway => "Armed - Away",
        }
    }
}

/// Alarm state derived from sensors, arming changes and cat detection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AlarmStatus {
    #[default]
    NoAlarm,
    PendingAlarm,
    Alarm,
}

impl AlarmStatus {
    pub fn description(self) -> &'static str {
        match self {
            AlarmStatus::NoAlarm => "All quiet",
            AlarmStatus::PendingAlarm => "Sensor tripped, alarm pending",
            AlarmStatus::Alarm => "ALARM",
        }
    }
}
