//! Camera frames handed to the image classifier.

use crate::error::Result;
use std::path::Path;

/// A single camera frame.
///
/// The bytes are opaque to this crate; only the classifier interprets them.
/// Dimensions are 0 when the source did not report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl CameraFrame {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// An all-zero ARGB frame of the given size.
    pub fn blank(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self::new(width, height, vec![0; len])
    }

    /// Read raw bytes from an image file without decoding it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(Self::new(0, 0, data))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
