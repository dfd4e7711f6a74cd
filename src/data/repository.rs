//! Storage capability consumed by the security service.

use super::{AlarmStatus, ArmingStatus, Sensor};
use crate::error::Result;

/// Persistent store for sensors and the two status values.
///
/// Implementations must reflect the last write in the next read made on the
/// same thread. Writes return a `Result` because file-backed stores can fail.
pub trait SecurityRepository: Send {
    fn alarm_status(&self) -> AlarmStatus;

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<()>;

    fn arming_status(&self) -> ArmingStatus;

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<()>;

    /// Register a sensor. A sensor with the same name and type is kept as is.
    fn add_sensor(&mut self, sensor: Sensor) -> Result<()>;

    /// Unregister a sensor. Absent sensors are ignored.
    fn remove_sensor(&mut self, sensor: &Sensor) -> Result<()>;

    /// Replace the stored copy of a registered sensor.
    fn update_sensor(&mut self, sensor: Sensor) -> Result<()>;

    /// Replace several sensors. Stores that can write atomically override
    /// this so a failure leaves every sensor as it was.
    fn update_sensors(&mut self, sensors: Vec<Sensor>) -> Result<()> {
        for sensor in sensors {
            self.update_sensor(sensor)?;
        }
        Ok(())
    }

    /// Whether the most recently classified frame showed a cat.
    fn cat_detected(&self) -> bool;

    fn set_cat_detected(&mut self, cat: bool) -> Result<()>;

    /// All registered sensors ordered by name, then type.
    fn sensors(&self) -> Vec<Sensor>;

    /// Stored copy of `sensor`, if registered.
    fn find_sensor(&self, sensor: &Sensor) -> Option<Sensor> {
        self.sensors().into_iter().find(|s| s.same_identity(sensor))
    }
}
