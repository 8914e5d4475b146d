//! Error types
//!
//! Per-frame analysis never fails. These cover construction, configuration
//! and decoding of the JS transport format.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::analyzer::ExerciseType;

/// Rejected analyzer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_visibility must be within [0, 1], got {0}")]
    VisibilityOutOfRange(f32),

    #[error("incremental_ratio must be within [0, 1], got {0}")]
    RatioOutOfRange(f64),

    #[error("{exercise}: threshold {value}° is outside [0, 180]")]
    ThresholdOutOfRange { exercise: ExerciseType, value: f64 },

    #[error("{exercise}: down threshold ({down}°) must exceed up threshold ({up}°)")]
    InvertedThresholds {
        exercise: ExerciseType,
        down: f64,
        up: f64,
    },

    #[error("{exercise}: deduction must be non-negative, got {value}")]
    NegativeDeduction { exercise: ExerciseType, value: f64 },

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Malformed landmark transport data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("invalid landmark data length: {actual} (expected {expected} or 0)")]
    BadLength { expected: usize, actual: usize },
}

/// Failure to build an analyzer or session
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("unknown exercise: {0:?}")]
    UnknownExercise(String),

    #[error("{0} is not tracked from pose landmarks")]
    NotPoseTracked(ExerciseType),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ============================================================================
// JS CONVERSION
// ============================================================================

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<AnalyzerError> for JsValue {
    fn from(err: AnalyzerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
