//! JSON file repository.
//!
//! Keeps the full [`SecurityState`] in memory and rewrites the file after
//! every mutation, so the CLI can apply one command per process and pick up
//! where the previous invocation left off.

use super::memory::SecurityState;
use super::{AlarmStatus, ArmingStatus, SecurityRepository, Sensor};
use crate::error::{Result, SecurityError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct JsonFileRepository {
    path: PathBuf,
    state: SecurityState,
}

impl JsonFileRepository {
    /// Open the repository at `path`.
    ///
    /// A missing file yields the default state (disarmed, no alarm, no
    /// sensors). The file is not created until the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                SecurityError::StorageCorrupt(format!("{}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No state file at {}, starting fresh", path.display());
                SecurityState::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `next` to a sibling temp file, rename it over the target and
    /// only then adopt it as the current state. A failed write leaves both
    /// the file and the in-memory state untouched.
    fn commit(&mut self, next: SecurityState) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&next)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        self.state = next;
        Ok(())
    }

    fn modify(&mut self, f: impl FnOnce(&mut SecurityState)) -> Result<()> {
        let mut next = self.state.clone();
        f(&mut next);
        self.commit(next)
    }
}

impl SecurityRepository for JsonFileRepository {
    fn alarm_status(&self) -> AlarmStatus {
        self.state.alarm_status
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<()> {
        self.modify(|state| state.alarm_status = status)
    }

    fn arming_status(&self) -> ArmingStatus {
        self.state.arming_status
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<()> {
        self.modify(|state| state.arming_status = status)
    }

    fn add_sensor(&mut self, sensor: Sensor) -> Result<()> {
        self.modify(|state| state.add_sensor(sensor))
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> Result<()> {
        self.modify(|state| state.remove_sensor(sensor))
    }

    fn update_sensor(&mut self, sensor: Sensor) -> Result<()> {
        if !self.state.sensors.contains(&sensor) {
            return Ok(());
        }
        self.modify(|state| {
            state.update_sensor(sensor);
        })
    }

    /// All sensors are written in one save.
    fn update_sensors(&mut self, sensors: Vec<Sensor>) -> Result<()> {
        self.modify(|state| {
            for sensor in sensors {
                state.update_sensor(sensor);
            }
        })
    }

    fn cat_detected(&self) -> bool {
        self.state.cat_detected
    }

    fn set_cat_detected(&mut self, cat: bool) -> Result<()> {
        self.modify(|state| state.cat_detected = cat)
    }

    fn sensors(&self) -> Vec<Sensor> {
        self.state.sensors.iter().cloned().collect()
    }

    fn find_sensor(&self, sensor: &Sensor) -> Option<Sensor> {
        self.state.sensors.get(sensor).cloned()
    }
}
