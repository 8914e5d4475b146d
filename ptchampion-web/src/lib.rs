//! PT Champion Web - pose-based exercise grading
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - Re-exports of the analysis API
//! - wasm_bindgen start hook
//!
//! The host runs MediaPipe Pose in JavaScript and feeds each result to
//! `bridge::analyze_pose`. The same analyzers are usable natively through
//! `create_analyzer` / `WorkoutSession`.

pub mod analyzer;
pub mod bridge;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pose;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;

pub use analyzer::{create_analyzer, AnalysisResult, ExerciseAnalyzer, ExerciseState, ExerciseType};
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, ConfigError, FrameError};
pub use geometry::calculate_angle;
pub use pose::{Landmark, PoseFrame};
pub use session::{WorkoutSession, WorkoutSummary};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
