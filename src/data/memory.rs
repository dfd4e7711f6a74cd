//! In-process repository.

use super::{AlarmStatus, ArmingStatus, SecurityRepository, Sensor};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Complete stored state. Shared with the JSON file repository, which
/// serializes it as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityState {
    #[serde(default)]
    pub sensors: BTreeSet<Sensor>,
    #[serde(default)]
    pub alarm_status: AlarmStatus,
    #[serde(default)]
    pub arming_status: ArmingStatus,
    #[serde(default)]
    pub cat_detected: bool,
}

impl SecurityState {
    pub(crate) fn add_sensor(&mut self, sensor: Sensor) {
        self.sensors.insert(sensor);
    }

    pub(crate) fn remove_sensor(&mut self, sensor: &Sensor) {
        self.sensors.remove(sensor);
    }

    /// Replace the stored sensor. Returns false if it is not registered.
    pub(crate) fn update_sensor(&mut self, sensor: Sensor) -> bool {
        if !self.sensors.contains(&sensor) {
            return false;
        }
        self.sensors.replace(sensor);
        true
    }
}

/// Repository that keeps everything in memory. Starts disarmed with no alarm.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    state: SecurityState,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecurityRepository for InMemoryRepository {
    fn alarm_status(&self) -> AlarmStatus {
        self.state.alarm_status
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<()> {
        self.state.alarm_status = status;
        Ok(())
    }

    fn arming_status(&self) -> ArmingStatus {
        self.state.arming_status
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<()> {
        self.state.arming_status = status;
        Ok(())
    }

    fn add_sensor(&mut self, sensor: Sensor) -> Result<()> {
        self.state.add_sensor(sensor);
        Ok(())
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> Result<()> {
        self.state.remove_sensor(sensor);
        Ok(())
    }

    fn update_sensor(&mut self, sensor: Sensor) -> Result<()> {
        if !self.state.update_sensor(sensor) {
            log::debug!("Ignoring update for unregistered sensor");
        }
        Ok(())
    }

    fn cat_detected(&self) -> bool {
        self.state.cat_detected
    }

    fn set_cat_detected(&mut self, cat: bool) -> Result<()> {
        self.state.cat_detected = cat;
        Ok(())
    }

    fn sensors(&self) -> Vec<Sensor> {
        self.state.sensors.iter().cloned().collect()
    }

    fn find_sensor(&self, sensor: &Sensor) -> Option<Sensor> {
        self.state.sensors.get(sensor).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SensorType;

    #[test]
    fn test_defaults() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.alarm_status(), AlarmStatus::NoAlarm);
        assert_eq!(repo.arming_status(), ArmingStatus::Disarmed);
        assert!(repo.sensors().is_empty());
    }

    #[test]
    fn test_add_and_remove_sensor() {
        let mut repo = InMemoryRepository::new();
        let sensor = Sensor::new("sensor", SensorType::Door);

        repo.add_sensor(sensor.clone()).unwrap();
        repo.add_sensor(sensor.clone()).unwrap();
        assert_eq!(repo.sensors().len(), 1);

        repo.remove_sensor(&sensor).unwrap();
        assert!(repo.sensors().is_empty());

        // Removing again is a no-op
        repo.remove_sensor(&sensor).unwrap();
    }

    #[test]
    fn test_add_keeps_existing_copy() {
        let mut repo = InMemoryRepository::new();
        repo.add_sensor(Sensor::new("sensor", SensorType::Door).with_active(true))
            .unwrap();
        repo.add_sensor(Sensor::new("sensor", SensorType::Door))
            .unwrap();
        assert!(repo.sensors()[0].is_active());
    }

    #[test]
    fn test_update_sensor() {
        let mut repo = InMemoryRepository::new();
        let sensor = Sensor::new("sensor", SensorType::Door);
        repo.add_sensor(sensor.clone()).unwrap();

        repo.update_sensor(sensor.clone().with_active(true)).unwrap();
        assert!(repo.find_sensor(&sensor).unwrap().is_active());

        // Unregistered sensors are not inserted by an update
        let stray = Sensor::new("stray", SensorType::Motion);
        repo.update_sensor(stray.clone()).unwrap();
        assert!(repo.find_sensor(&stray).is_none());
    }

    #[test]
    fn test_sensors_are_ordered() {
        let mut repo = InMemoryRepository::new();
        repo.add_sensor(Sensor::new("b", SensorType::Door)).unwrap();
        repo.add_sensor(Sensor::new("a", SensorType::Motion)).unwrap();
        repo.add_sensor(Sensor::new("a", SensorType::Door)).unwrap();

        let order: Vec<_> = repo
            .sensors()
            .iter()
            .map(|s| (s.name().to_string(), s.kind()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("a".to_string(), SensorType::Door),
                ("a".to_string(), SensorType::Motion),
                ("b".to_string(), SensorType::Door),
            ]
        );
    }

    #[test]
    fn test_status_round_trip() {
        let mut repo = InMemoryRepository::new();
        repo.set_arming_status(ArmingStatus::ArmedAway).unwrap();
        repo.set_alarm_status(AlarmStatus::PendingAlarm).unwrap();
        repo.set_cat_detected(true).unwrap();
        assert_eq!(repo.arming_status(), ArmingStatus::ArmedAway);
        assert_eq!(repo.alarm_status(), AlarmStatus::PendingAlarm);
        assert!(repo.cat_detected());
    }

    #[test]
    fn test_update_sensors_batch() {
        let mut repo = InMemoryRepository::new();
        let a = Sensor::new("a", SensorType::Door);
        let b = Sensor::new("b", SensorType::Window);
        repo.add_sensor(a.clone()).unwrap();
        repo.add_sensor(b.clone()).unwrap();

        repo.update_sensors(vec![a.with_active(true), b.with_active(true)])
            .unwrap();
        assert!(repo.sensors().iter().all(Sensor::is_active));
    }
}
