//! Input sources that feed events into the security service.
//!
//! Current input sources:
//! - `simulation`: periodic random sensor toggles and camera frames

pub mod simulation;
