//! Simulated inputs for running the monitor without hardware.

pub mod sensors;

pub use sensors::{run_camera_simulation, run_sensor_simulation};
