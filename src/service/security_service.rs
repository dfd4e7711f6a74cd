//! Security service: applies the transition rules against a repository.
//!
//! Every public operation reads the current statuses from the repository,
//! asks [`transitions`](super::transitions) what the alarm status should
//! become, writes the result back and notifies listeners. Operations run to
//! completion on the calling thread.

use super::transitions::{self, SensorChange};
use super::{ListenerSet, StatusListener};
use crate::data::{AlarmStatus, ArmingStatus, SecurityRepository, Sensor};
use crate::error::{Result, SecurityError};
use crate::image::{CameraFrame, DEFAULT_CONFIDENCE_THRESHOLD, ImageService};
use log::{debug, info, warn};
use std::sync::Arc;

/// Alarm state machine over a sensor repository and an image classifier.
pub struct SecurityService<R: SecurityRepository> {
    repository: R,
    image_service: Box<dyn ImageService>,
    listeners: ListenerSet,
    confidence_threshold: f32,
}

impl<R: SecurityRepository> SecurityService<R> {
    pub fn new(repository: R, image_service: Box<dyn ImageService>) -> Self {
        Self {
            repository,
            image_service,
            listeners: ListenerSet::new(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn add_sensor(&mut self, sensor: Sensor) -> Result<()> {
        debug!("Adding sensor {} ({})", sensor.name(), sensor.kind());
        self.repository.add_sensor(sensor)
    }

    pub fn remove_sensor(&mut self, sensor: &Sensor) -> Result<()> {
        debug!("Removing sensor {} ({})", sensor.name(), sensor.kind());
        self.repository.remove_sensor(sensor)
    }

    pub fn sensors(&self) -> Vec<Sensor> {
        self.repository.sensors()
    }

    pub fn add_status_listener(&mut self, listener: Arc<dyn StatusListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_status_listener(&mut self, listener: &Arc<dyn StatusListener>) {
        self.listeners.remove(listener);
    }

    pub fn alarm_status(&self) -> AlarmStatus {
        self.repository.alarm_status()
    }

    pub fn arming_status(&self) -> ArmingStatus {
        self.repository.arming_status()
    }

    /// Whether the last processed frame contained a cat.
    pub fn cat_detected(&self) -> bool {
        self.repository.cat_detected()
    }

    /// Change the arming status.
    ///
    /// The new status is stored first. Arming resets every sensor to
    /// inactive; disarming forces `NoAlarm`.
    pub fn set_arming_status(&mut self, status: ArmingStatus) -> Result<()> {
        info!("Arming status: {} -> {}", self.repository.arming_status(), status);
        self.repository.set_arming_status(status)?;

        if status.is_armed() {
            let reset = self
                .repository
                .sensors()
                .into_iter()
                .map(|sensor| sensor.with_active(false))
                .collect();
            self.repository.update_sensors(reset)?;
            self.listeners.notify_sensors();
        }

        let cat_detected = self.repository.cat_detected();
        if let Some(next) = transitions::on_arming_change(status, cat_detected) {
            self.write_alarm_status(next)?;
        }
        Ok(())
    }

    /// Set a registered sensor's active flag and update the alarm status.
    ///
    /// Returns [`SecurityError::UnknownSensor`] without writing anything if
    /// the sensor is not registered.
    pub fn change_sensor_activation(&mut self, sensor: &Sensor, active: bool) -> Result<()> {
        let Some(current) = self.repository.find_sensor(sensor) else {
            warn!(
                "Activation change for unregistered sensor {} ({})",
                sensor.name(),
                sensor.kind()
            );
            return Err(SecurityError::UnknownSensor {
                name: sensor.name().to_string(),
                kind: sensor.kind(),
            });
        };

        let arming = self.repository.arming_status();
        let alarm = self.repository.alarm_status();
        let others_active = self
            .repository
            .sensors()
            .iter()
            .any(|s| s.is_active() && !s.same_identity(sensor));
        let change = SensorChange {
            was_active: current.is_active(),
            now_active: active,
            others_active,
        };

        debug!(
            "Sensor {} ({}): {} -> {}",
            sensor.name(),
            sensor.kind(),
            change.was_active,
            active
        );
        self.repository.update_sensor(current.with_active(active))?;

        if let Some(next) = transitions::on_sensor_change(arming, alarm, change) {
            self.write_alarm_status(next)?;
        }
        self.listeners.notify_sensors();
        Ok(())
    }

    /// Classify a camera frame and apply the verdict. Returns the verdict.
    pub fn process_image(&mut self, frame: &CameraFrame) -> Result<bool> {
        let cat = self
            .image_service
            .contains_cat(frame, self.confidence_threshold);
        debug!("Classifier verdict: cat={}", cat);
        self.repository.set_cat_detected(cat)?;

        let arming = self.repository.arming_status();
        let any_active = self.repository.sensors().iter().any(Sensor::is_active);
        if let Some(next) = transitions::on_cat_verdict(arming, cat, any_active) {
            self.write_alarm_status(next)?;
        }
        self.listeners.notify_cat(cat);
        Ok(cat)
    }

    fn write_alarm_status(&mut self, status: AlarmStatus) -> Result<()> {
        let previous = self.repository.alarm_status();
        self.repository.set_alarm_status(status)?;
        if previous != status {
            info!("Alarm status: {} -> {}", previous, status);
        }
        self.listeners.notify_alarm(status);
        Ok(())
    }
}
