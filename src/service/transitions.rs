//! Alarm status transition rules.
//!
//! Pure functions from the current statuses and an incoming event to the
//! alarm status that should be written, if any. `None` means "leave the
//! stored alarm status alone". Storage and listener notification are done
//! by [`SecurityService`](super::SecurityService).

use crate::data::{AlarmStatus, ArmingStatus};

/// A sensor activation request as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorChange {
    /// Flag before the request.
    pub was_active: bool,
    /// Requested flag.
    pub now_active: bool,
    /// Whether any other registered sensor is active.
    pub others_active: bool,
}

/// Alarm status after a sensor activation request.
///
/// Full alarm is sticky. Activation only counts while armed. Deactivation
/// only counts when the sensor was actually active, and clears a pending
/// alarm once nothing else is active.
pub fn on_sensor_change(
    arming: ArmingStatus,
    alarm: AlarmStatus,
    change: SensorChange,
) -> Option<AlarmStatus> {
    if alarm == AlarmStatus::Alarm {
        return None;
    }

    if change.now_active {
        if !arming.is_armed() {
            return None;
        }
        return match alarm {
            AlarmStatus::NoAlarm => Some(AlarmStatus::PendingAlarm),
            AlarmStatus::PendingAlarm => Some(AlarmStatus::Alarm),
            AlarmStatus::Alarm => None,
        };
    }

    if change.was_active && !change.others_active && alarm == AlarmStatus::PendingAlarm {
        return Some(AlarmStatus::NoAlarm);
    }
    None
}

/// Alarm status after the arming status is set.
///
/// Disarming always writes `NoAlarm`. Arming at home while the last frame
/// showed a cat goes straight to `Alarm`.
pub fn on_arming_change(arming: ArmingStatus, cat_detected: bool) -> Option<AlarmStatus> {
    match arming {
        ArmingStatus::Disarmed => Some(AlarmStatus::NoAlarm),
        ArmingStatus::ArmedHome if cat_detected => Some(AlarmStatus::Alarm),
        ArmingStatus::ArmedHome | ArmingStatus::ArmedAway => None,
    }
}

/// Alarm status after a classifier verdict.
///
/// A negative verdict only clears the alarm when no sensor is active.
pub fn on_cat_verdict(
    arming: ArmingStatus,
    cat_detected: bool,
    any_sensor_active: bool,
) -> Option<AlarmStatus> {
    if cat_detected {
        (arming == ArmingStatus::ArmedHome).then_some(AlarmStatus::Alarm)
    } else if !any_sensor_active {
        Some(AlarmStatus::NoAlarm)
    } else {
        None
    }
}
