//! One analyzed video frame: ordered landmarks plus source image size

use serde::{Deserialize, Serialize};

use super::landmark::{Landmark, LANDMARK_COUNT};
use crate::error::FrameError;

/// Floats per landmark in the flat JS transport layout: x, y, z, visibility
pub const FLAT_STRIDE: usize = 4;

/// Landmarks for a single frame, indexed by the MediaPipe 33-point scheme
///
/// An empty frame means the pose model found nobody.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    landmarks: Vec<Landmark>,
    width: u32,
    height: u32,
}

impl PoseFrame {
    pub fn new(landmarks: Vec<Landmark>, width: u32, height: u32) -> Self {
        Self { landmarks, width, height }
    }

    /// Frame in which no person was detected
    pub fn empty(width: u32, height: u32) -> Self {
        Self::new(Vec::new(), width, height)
    }

    /// Decode a flat Float32Array of 132 values (33 landmarks × 4)
    ///
    /// A zero-length slice decodes to an empty frame.
    pub fn from_flat(data: &[f32], width: u32, height: u32) -> Result<Self, FrameError> {
        if data.is_empty() {
            return Ok(Self::empty(width, height));
        }

        let expected = LANDMARK_COUNT * FLAT_STRIDE;
        if data.len() != expected {
            return Err(FrameError::BadLength {
                expected,
                actual: data.len(),
            });
        }

        let landmarks = data
            .chunks_exact(FLAT_STRIDE)
            .map(|c| Landmark::new(c[0], c[1], c[2], c[3]))
            .collect();

        Ok(Self::new(landmarks, width, height))
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn image_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Landmark at `index` only if it clears the visibility floor
    pub fn visible(&self, index: usize, min_visibility: f32) -> Option<&Landmark> {
        self.landmark(index).filter(|lm| lm.is_visible(min_visibility))
    }

    /// Mean visibility over every landmark in the frame (0 when empty)
    ///
    /// Global frame quality, independent of which joints an exercise uses.
    pub fn confidence(&self) -> f32 {
        if self.landmarks.is_empty() {
            return 0.0;
        }
        let total: f32 = self.landmarks.iter().map(|lm| lm.visibility).sum();
        total / self.landmarks.len() as f32
    }
}
