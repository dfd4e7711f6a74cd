//! Image classification capability.
//!
//! The security service asks an [`ImageService`] whether a camera frame
//! shows a cat. No recognition model lives in this crate; the provided
//! implementations are stand-ins for simulation and tests.

pub mod fake;
pub mod frame;

pub use fake::{FakeImageService, FixedImageService};
pub use frame::CameraFrame;

/// Confidence threshold passed to the classifier, in percent.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Answers "is there a cat in this frame".
pub trait ImageService: Send + Sync {
    fn contains_cat(&self, frame: &CameraFrame, confidence_threshold: f32) -> bool;
}
