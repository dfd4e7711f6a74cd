//! Sensor and camera simulation for testing.
//!
//! Provides simulated sensor state changes and camera frames for development
//! and testing purposes.

use crate::data::SecurityRepository;
use crate::image::CameraFrame;
use crate::service::SecurityService;
use log::{info, warn};
use parking_lot::Mutex;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};

/// Spawn a task that periodically toggles a random registered sensor.
///
/// Each tick picks one sensor, flips its active flag through
/// [`SecurityService::change_sensor_activation`] and logs the resulting
/// alarm status. Ticks with no registered sensors are skipped.
///
/// # Returns
///
/// A `JoinHandle` that can be used to abort the simulation task.
pub fn run_sensor_simulation<R>(
    service: Arc<Mutex<SecurityService<R>>>,
    period: Duration,
) -> JoinHandle<()>
where
    R: SecurityRepository + 'static,
{
    tokio::spawn(async move {
        let mut interval = interval(period);
        // First tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            let mut service = service.lock();
            let Some(mut sensor) = service.sensors().choose(&mut rand::thread_rng()).cloned()
            else {
                continue;
            };
            let active = sensor.toggle();
            match service.change_sensor_activation(&sensor, active) {
                Ok(()) => info!(
                    "[Sim] {} ({}) -> {}, alarm: {}",
                    sensor.name(),
                    sensor.kind(),
                    if active { "active" } else { "inactive" },
                    service.alarm_status()
                ),
                Err(e) => warn!("[Sim] Failed to toggle {}: {}", sensor.name(), e),
            }
        }
    })
}

/// Spawn a task that periodically feeds a blank camera frame to the
/// service's image classifier.
pub fn run_camera_simulation<R>(
    service: Arc<Mutex<SecurityService<R>>>,
    period: Duration,
) -> JoinHandle<()>
where
    R: SecurityRepository + 'static,
{
    tokio::spawn(async move {
        let frame = CameraFrame::blank(240, 240);
        let mut interval = interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            let mut service = service.lock();
            match service.process_image(&frame) {
                Ok(cat) => info!(
                    "[Sim] Camera frame: {}, alarm: {}",
                    if cat { "cat" } else { "no cat" },
                    service.alarm_status()
                ),
                Err(e) => warn!("[Sim] Failed to process camera frame: {}", e),
            }
        }
    })
}
