//! Stand-in classifiers.

use super::{CameraFrame, ImageService};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Classifier that answers at random.
///
/// Used by the simulator in place of a real model. The RNG sits behind a
/// mutex so the service can be shared with the simulation task.
pub struct FakeImageService {
    rng: Mutex<StdRng>,
}

impl FakeImageService {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic verdict sequence for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for FakeImageService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageService for FakeImageService {
    fn contains_cat(&self, _frame: &CameraFrame, _confidence_threshold: f32) -> bool {
        self.rng.lock().gen_bool(0.5)
    }
}

/// Classifier that always returns the same verdict.
#[derive(Debug, Clone, Copy)]
pub struct FixedImageService {
    cat: bool,
}

impl FixedImageService {
    pub fn new(cat: bool) -> Self {
        Self { cat }
    }
}

impl ImageService for FixedImageService {
    fn contains_cat(&self, _frame: &CameraFrame, _confidence_threshold: f32) -> bool {
        self.cat
    }
}
